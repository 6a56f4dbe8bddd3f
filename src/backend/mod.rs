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

//! Platform backends.
//!
//! IMM32 composition messages only exist on Windows; on other platforms the
//! crate provides the platform-independent core and a [`Host`](crate::Host)
//! must be supplied by the caller.

cfg_if::cfg_if! {
    if #[cfg(target_os = "windows")] {
        pub mod windows;

        /// The host for the current platform.
        pub type DefaultHost = windows::Win32Host;
    }
}
