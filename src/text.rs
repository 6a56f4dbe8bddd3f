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

//! Reading the composition string out of an input context.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::{BufferKind, Host, InputContext, RawSurface};

/// How raw composition buffers are turned into text.
///
/// On Win32, [`DecodeStrategy::Utf16`] reads the wide buffer and is lossless.
/// [`DecodeStrategy::LayoutCodepage`] goes through the ANSI buffer and is kept
/// for compatibility with consumers that expect legacy codepage decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecodeStrategy {
    /// Read the multibyte buffer and decode it with the codepage of the
    /// keyboard layout that is active at the time of the read.
    ///
    /// Layouts without a known codepage decode as UTF-8.
    #[default]
    LayoutCodepage,
    /// Read the wide buffer and decode it as UTF-16LE, ignoring the layout.
    Utf16,
}

impl DecodeStrategy {
    pub fn buffer_kind(self) -> BufferKind {
        match self {
            DecodeStrategy::LayoutCodepage => BufferKind::Multibyte,
            DecodeStrategy::Utf16 => BufferKind::Wide,
        }
    }
}

/// Decode a composition buffer and strip its trailing NUL terminators.
///
/// Bytes that are invalid for `encoding` are decoded as lossy UTF-8 instead
/// (lossy UTF-16 for wide buffers); this never fails.
pub fn decode_composition(bytes: &[u8], encoding: &'static Encoding) -> String {
    let text = match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None if encoding == encoding_rs::UTF_16LE => {
            tracing::debug!("malformed UTF-16 composition buffer, decoding lossily");
            encoding.decode_without_bom_handling(bytes).0
        }
        None => {
            tracing::debug!(
                encoding = encoding.name(),
                "composition buffer is not valid in the layout codepage, falling back to UTF-8"
            );
            String::from_utf8_lossy(bytes)
        }
    };
    match text {
        Cow::Borrowed(text) => text.trim_end_matches('\0').to_owned(),
        Cow::Owned(mut text) => {
            let len = text.trim_end_matches('\0').len();
            text.truncate(len);
            text
        }
    }
}

/// Fetch the current composition string of `surface`.
///
/// Returns an empty string when the surface has no input context, when the
/// context holds no composition, or when reading it fails. The context is
/// released before returning on every path.
pub fn extract_composition_text<H: Host + ?Sized>(
    host: &H,
    surface: RawSurface,
    strategy: DecodeStrategy,
) -> String {
    let Some(context) = host.open_input_context(surface) else {
        return String::new();
    };
    let kind = strategy.buffer_kind();

    let len = context.composition_len(kind);
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let written = context.read_composition(kind, &mut buf);
    if written <= 0 {
        tracing::debug!(?surface, len, written, "reading the composition string failed");
        return String::new();
    }
    buf.truncate(written as usize);

    let encoding = match strategy {
        DecodeStrategy::Utf16 => encoding_rs::UTF_16LE,
        DecodeStrategy::LayoutCodepage => host.current_encoding().encoding(),
    };
    decode_composition(&buf, encoding)
}
