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

//! Message identifiers of the native windowing protocol.

pub const WM_NCDESTROY: u32 = 0x0082;
pub const WM_IME_STARTCOMPOSITION: u32 = 0x010D;
pub const WM_IME_ENDCOMPOSITION: u32 = 0x010E;
pub const WM_IME_COMPOSITION: u32 = 0x010F;

/// `WM_IME_COMPOSITION` flag: the composition string changed.
pub const GCS_COMPSTR: u32 = 0x0008;
/// `WM_IME_COMPOSITION` flag: a result string was committed.
pub const GCS_RESULTSTR: u32 = 0x0800;

/// The IME notifications the interceptor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImeMessage {
    StartComposition,
    Composition,
    EndComposition,
}

impl ImeMessage {
    pub fn classify(msg: u32) -> Option<ImeMessage> {
        match msg {
            WM_IME_STARTCOMPOSITION => Some(ImeMessage::StartComposition),
            WM_IME_COMPOSITION => Some(ImeMessage::Composition),
            WM_IME_ENDCOMPOSITION => Some(ImeMessage::EndComposition),
            _ => None,
        }
    }
}
