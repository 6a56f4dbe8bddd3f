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

//! Input method contexts from imm32.

#![allow(non_snake_case)]

use std::ptr;

use winapi::shared::minwindef::{DWORD, LPVOID};
use winapi::shared::windef::HWND;
use winapi::um::imm::{ImmGetContext, ImmReleaseContext, HIMC};
use winapi::um::winnt::LONG;

use crate::msgs::GCS_COMPSTR;
use crate::{BufferKind, InputContext, RawSurface};

// Not bound by winapi.
#[link(name = "imm32")]
extern "system" {
    fn ImmGetCompositionStringW(hIMC: HIMC, dwIndex: DWORD, lpBuf: LPVOID, dwBufLen: DWORD) -> LONG;
    fn ImmGetCompositionStringA(hIMC: HIMC, dwIndex: DWORD, lpBuf: LPVOID, dwBufLen: DWORD) -> LONG;
}

/// The input context of a window, released on drop.
#[derive(Debug)]
pub struct Imm32Context {
    hwnd: HWND,
    himc: HIMC,
}

impl Imm32Context {
    pub fn open(surface: RawSurface) -> Option<Imm32Context> {
        let hwnd = surface.as_raw() as HWND;
        let himc = unsafe { ImmGetContext(hwnd) };
        if himc.is_null() {
            None
        } else {
            Some(Imm32Context { hwnd, himc })
        }
    }

    fn get_composition_string(&self, kind: BufferKind, buf: LPVOID, len: DWORD) -> LONG {
        unsafe {
            match kind {
                BufferKind::Wide => ImmGetCompositionStringW(self.himc, GCS_COMPSTR, buf, len),
                BufferKind::Multibyte => ImmGetCompositionStringA(self.himc, GCS_COMPSTR, buf, len),
            }
        }
    }
}

impl InputContext for Imm32Context {
    fn composition_len(&self, kind: BufferKind) -> i32 {
        self.get_composition_string(kind, ptr::null_mut(), 0)
    }

    fn read_composition(&self, kind: BufferKind, buf: &mut [u8]) -> i32 {
        self.get_composition_string(kind, buf.as_mut_ptr() as LPVOID, buf.len() as DWORD)
    }
}

impl Drop for Imm32Context {
    fn drop(&mut self) {
        unsafe {
            ImmReleaseContext(self.hwnd, self.himc);
        }
    }
}
