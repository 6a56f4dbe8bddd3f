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

//! The native operations an interceptor depends on.

use std::rc::Rc;

use crate::keyboard::KeyboardLayouts;
use crate::{Error, MessageInterceptor, RawSurface};

/// Which flavour of composition buffer to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// UTF-16LE code units (`ImmGetCompositionStringW`).
    Wide,
    /// Bytes in the input language's codepage (`ImmGetCompositionStringA`).
    Multibyte,
}

/// A scoped handle to a surface's input method context.
///
/// Implementations release the native context when dropped.
pub trait InputContext {
    /// Size in bytes of the current composition string. Zero or negative
    /// means there is nothing to read.
    fn composition_len(&self, kind: BufferKind) -> i32;

    /// Copy the composition string into `buf`, returning the number of bytes
    /// written. Zero or negative means the read failed.
    fn read_composition(&self, kind: BufferKind, buf: &mut [u8]) -> i32;
}

/// The windowing system the interceptors are installed into.
///
/// All methods are called on the UI thread.
pub trait Host: KeyboardLayouts {
    type Context: InputContext;

    /// Put `interceptor` in front of the surface's current message
    /// procedure. The previous procedure must stay reachable so that every
    /// message can be forwarded to it.
    fn install(&self, surface: RawSurface, interceptor: Rc<dyn MessageInterceptor>)
        -> Result<(), Error>;

    /// Restore the surface's previous message procedure.
    ///
    /// Must tolerate surfaces that were never hooked or that the system has
    /// already destroyed.
    fn uninstall(&self, surface: RawSurface);

    /// Acquire the surface's input method context, if it has one.
    fn open_input_context(&self, surface: RawSurface) -> Option<Self::Context>;
}
