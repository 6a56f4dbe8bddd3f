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

//! Windows implementation of the IME host.

mod hook;
mod imm;

use std::marker::PhantomData;
use std::rc::Rc;

use winapi::um::processthreadsapi::GetCurrentThreadId;
use winapi::um::winuser::GetKeyboardLayout;

use crate::keyboard::KeyboardLayouts;
use crate::{Error, Host, MessageInterceptor, RawSurface};

pub use imm::Imm32Context;

/// The Win32 windowing system, as seen from the calling UI thread.
///
/// Hooks replace the window procedure of the target control and chain to the
/// previous one with `CallWindowProcW`. Input contexts come from imm32.
#[derive(Debug, Default)]
pub struct Win32Host {
    // Hooks are tracked per thread.
    _not_send: PhantomData<*mut ()>,
}

impl Win32Host {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyboardLayouts for Win32Host {
    fn active_layout(&self) -> Option<usize> {
        let hkl = unsafe { GetKeyboardLayout(GetCurrentThreadId()) };
        if hkl.is_null() {
            None
        } else {
            Some(hkl as usize)
        }
    }
}

impl Host for Win32Host {
    type Context = Imm32Context;

    fn install(
        &self,
        surface: RawSurface,
        interceptor: Rc<dyn MessageInterceptor>,
    ) -> Result<(), Error> {
        hook::install(surface, interceptor)
    }

    fn uninstall(&self, surface: RawSurface) {
        hook::uninstall(surface)
    }

    fn open_input_context(&self, surface: RawSurface) -> Option<Imm32Context> {
        Imm32Context::open(surface)
    }
}
