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

//! Keyboard layout resolution.
//!
//! A keyboard layout handle carries the language identifier in its low word.
//! From that identifier we can derive a display name, a locale tag and the
//! legacy codepage the IME uses for multibyte composition buffers.
//!
//! Nothing here is cached: the active layout can change between any two
//! queries, so every `current_*` call reads it afresh.

use std::collections::HashMap;
use std::fmt;

use encoding_rs::Encoding;
use lazy_static::lazy_static;

use crate::languages::LANGUAGES;

/// The language identifier reported when no layout can be resolved.
pub const LANG_NEUTRAL: u16 = 0x0000;

pub const LANG_KOREAN: u16 = 0x0412;
pub const LANG_JAPANESE: u16 = 0x0411;
pub const LANG_CHINESE_SIMPLIFIED: u16 = 0x0804;
pub const LANG_CHINESE_TRADITIONAL: u16 = 0x0404;

const UNKNOWN: &str = "Unknown";

lazy_static! {
    static ref LANGUAGE_MAP: HashMap<u16, (&'static str, &'static str)> = LANGUAGES
        .iter()
        .map(|&(id, name, tag)| (id, (name, tag)))
        .collect();
}

/// What a language identifier means to a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyboardLanguageInfo {
    pub language_id: u16,
    /// English display name, or `"Unknown"`.
    pub language_name: &'static str,
    /// Locale tag such as `ko-KR`, or `"Unknown"`.
    pub locale_tag: &'static str,
}

impl KeyboardLanguageInfo {
    /// Whether the identifier was found in the language table.
    pub fn is_known(&self) -> bool {
        LANGUAGE_MAP.contains_key(&self.language_id)
    }
}

impl fmt::Display for KeyboardLanguageInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.language_name, self.locale_tag)
    }
}

/// The label of a legacy text encoding.
///
/// Labels follow the names the platform historically used for IME
/// codepages; [`EncodingName::encoding`] resolves them to an
/// [`encoding_rs::Encoding`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodingName(&'static str);

impl EncodingName {
    pub const KOREAN: EncodingName = EncodingName("ks_c_5601-1987");
    pub const JAPANESE: EncodingName = EncodingName("shift_jis");
    pub const CHINESE_SIMPLIFIED: EncodingName = EncodingName("gb2312");
    pub const CHINESE_TRADITIONAL: EncodingName = EncodingName("big5");
    pub const UTF_8: EncodingName = EncodingName("utf-8");

    pub fn label(self) -> &'static str {
        self.0
    }

    /// The decoder for this label. Unrecognised labels decode as UTF-8.
    pub fn encoding(self) -> &'static Encoding {
        Encoding::for_label(self.0.as_bytes()).unwrap_or(encoding_rs::UTF_8)
    }
}

impl fmt::Display for EncodingName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Extract the language identifier from a keyboard layout handle.
pub fn language_id(layout: usize) -> u16 {
    (layout & 0xFFFF) as u16
}

/// Look up the name and locale tag of a language identifier.
///
/// Identifiers missing from the table are reported as `"Unknown"`; that is
/// an ordinary result, not an error.
pub fn lookup(language_id: u16) -> KeyboardLanguageInfo {
    let (language_name, locale_tag) = LANGUAGE_MAP
        .get(&language_id)
        .copied()
        .unwrap_or((UNKNOWN, UNKNOWN));
    KeyboardLanguageInfo {
        language_id,
        language_name,
        locale_tag,
    }
}

/// The codepage the IME uses for multibyte composition strings in this
/// language.
pub fn encoding_for(language_id: u16) -> EncodingName {
    match language_id {
        LANG_KOREAN => EncodingName::KOREAN,
        LANG_JAPANESE => EncodingName::JAPANESE,
        LANG_CHINESE_SIMPLIFIED => EncodingName::CHINESE_SIMPLIFIED,
        LANG_CHINESE_TRADITIONAL => EncodingName::CHINESE_TRADITIONAL,
        _ => EncodingName::UTF_8,
    }
}

/// Access to the calling thread's active keyboard layout.
pub trait KeyboardLayouts {
    /// The raw layout handle, or `None` if there is none.
    fn active_layout(&self) -> Option<usize>;

    fn current_language_id(&self) -> u16 {
        self.active_layout()
            .map(language_id)
            .unwrap_or(LANG_NEUTRAL)
    }

    fn current_language(&self) -> KeyboardLanguageInfo {
        lookup(self.current_language_id())
    }

    fn current_encoding(&self) -> EncodingName {
        encoding_for(self.current_language_id())
    }
}

/// The language identifier of the calling thread's keyboard layout.
#[cfg(target_os = "windows")]
pub fn current_language_id() -> u16 {
    crate::backend::windows::Win32Host::new().current_language_id()
}

/// The calling thread's keyboard language.
#[cfg(target_os = "windows")]
pub fn current_language() -> KeyboardLanguageInfo {
    crate::backend::windows::Win32Host::new().current_language()
}

/// The codepage of the calling thread's keyboard layout.
#[cfg(target_os = "windows")]
pub fn current_encoding() -> EncodingName {
    crate::backend::windows::Win32Host::new().current_encoding()
}
