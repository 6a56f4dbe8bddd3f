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

//! `ime-relay` watches the IME traffic of a single native text control and
//! turns it into three lifecycle events: composition started, composition
//! updated (with the full live text) and composition ended.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(windows)]
//! # fn demo(hwnd: isize) -> Result<(), ime_relay::Error> {
//! use ime_relay::{
//!     AttachmentRegistry, CompositionCallbacks, DecodeStrategy, RawSurface, SurfaceId,
//! };
//! use ime_relay::backend::windows::Win32Host;
//!
//! let registry =
//!     AttachmentRegistry::new(Win32Host::new()).decode_strategy(DecodeStrategy::Utf16);
//! let text_box = SurfaceId::next();
//! registry.attach(
//!     text_box,
//!     Some(RawSurface::from_raw(hwnd)),
//!     CompositionCallbacks::new()
//!         .on_start(|| println!("IME started"))
//!         .on_update(|text| println!("Composing: {text}"))
//!         .on_end(|| println!("IME ended")),
//! )?;
//! // ...
//! registry.detach(text_box);
//! # Ok(())
//! # }
//! ```
//!
//! The crate also resolves the active keyboard layout to a language
//! identifier, a display name, a locale tag and the legacy codepage that
//! composition buffers are encoded in. See [`keyboard`].
//!
//! Prefer [`DecodeStrategy::Utf16`] on Win32: it reads the wide composition
//! buffer and loses nothing. The default, [`DecodeStrategy::LayoutCodepage`],
//! reads the ANSI buffer and decodes it with the layout's legacy codepage,
//! which is kept for compatibility.
//!
//! Everything here runs on the UI thread that owns the watched controls. The
//! native side lives behind the [`Host`] trait; `backend::windows` provides
//! the Win32 implementation.

#![deny(rustdoc::broken_intra_doc_links, unsafe_op_in_unsafe_fn)]

pub mod backend;
mod composition;
mod error;
mod host;
mod interceptor;
pub mod keyboard;
mod languages;
pub mod msgs;
mod registry;
mod surface;
mod text;

#[cfg(test)]
mod test_host;

pub use composition::{
    CompositionCallbacks, CompositionEvent, CompositionHandler, CompositionState,
    CompositionTracker,
};
pub use error::Error;
pub use host::{BufferKind, Host, InputContext};
pub use interceptor::{Interceptor, Message, MessageInterceptor, PreviousHandler};
pub use keyboard::{EncodingName, KeyboardLanguageInfo, KeyboardLayouts};
pub use registry::AttachmentRegistry;
pub use surface::{RawSurface, SurfaceId};
pub use text::{decode_composition, extract_composition_text, DecodeStrategy};
