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

//! Surface identities.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// An application-side identity for a text control.
///
/// A `SurfaceId` exists before the control has a native handle, which is
/// what lets [`AttachmentRegistry::attach`] defer hook installation until
/// the control is realized.
///
/// [`AttachmentRegistry::attach`]: crate::AttachmentRegistry::attach
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SurfaceId(NonZeroU64);

static SURFACE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

impl SurfaceId {
    /// Allocate a new, process-unique id.
    pub fn next() -> SurfaceId {
        let mut id = SURFACE_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        // The counter only wraps after 2^64 allocations; skip zero if it does.
        if id == 0 {
            id = SURFACE_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        }
        SurfaceId(NonZeroU64::new(id).unwrap_or(NonZeroU64::MAX))
    }

    /// The raw value of this id.
    pub fn into_raw(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// The native handle of a realized surface (an `HWND` on Windows).
///
/// The core never dereferences it; only the [`Host`](crate::Host) knows what
/// it means.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawSurface(isize);

impl RawSurface {
    pub const fn from_raw(raw: isize) -> RawSurface {
        RawSurface(raw)
    }

    pub const fn as_raw(self) -> isize {
        self.0
    }
}

impl fmt::Debug for RawSurface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RawSurface({:#x})", self.0)
    }
}
