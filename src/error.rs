// Copyright 2024 The ime-relay Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors returned while hooking a surface.
//!
//! Only hook installation can fail. Everything on the composition path
//! degrades to "no text" instead of returning an error.

use crate::RawSurface;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The native handle does not name a live window.
    #[error("{0:?} is not a live window")]
    InvalidSurface(RawSurface),
    /// The window belongs to another thread; hooks can only be installed on
    /// windows owned by the calling UI thread.
    #[error("{0:?} is owned by another thread")]
    WrongThread(RawSurface),
    /// Another registry entry already owns the hook on this native handle.
    #[error("{0:?} already has an IME interceptor installed")]
    AlreadyHooked(RawSurface),
    /// The platform refused to swap the window procedure.
    #[error("could not install the message hook on {surface:?}")]
    Install {
        surface: RawSurface,
        #[source]
        source: std::io::Error,
    },
}
