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

//! An in-memory [`Host`] for tests.
//!
//! Surfaces are plain integers. Every surface is alive until [`TestHost::destroy`]
//! is called on it, and "sending" a message runs it through the hook exactly
//! like a window procedure chain would.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::keyboard::KeyboardLayouts;
use crate::{
    BufferKind, CompositionCallbacks, Error, Host, InputContext, Message, MessageInterceptor,
    PreviousHandler, RawSurface,
};

/// What the original window procedure returns for every message.
pub(crate) const ORIGINAL_RESULT: isize = 0x42;

pub(crate) fn utf16_bytes(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

#[derive(Default)]
struct Counters {
    opened: Cell<usize>,
    released: Cell<usize>,
}

pub(crate) struct TestContext {
    bytes: Vec<u8>,
    fail_reads: bool,
    counters: Rc<Counters>,
}

impl InputContext for TestContext {
    fn composition_len(&self, _kind: BufferKind) -> i32 {
        self.bytes.len() as i32
    }

    fn read_composition(&self, _kind: BufferKind, buf: &mut [u8]) -> i32 {
        if self.fail_reads {
            return -1;
        }
        let len = buf.len().min(self.bytes.len());
        buf[..len].copy_from_slice(&self.bytes[..len]);
        len as i32
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.counters.released.set(self.counters.released.get() + 1);
    }
}

#[derive(Default)]
pub(crate) struct TestHost {
    layout: Cell<Option<usize>>,
    hooks: RefCell<HashMap<RawSurface, Rc<dyn MessageInterceptor>>>,
    destroyed: RefCell<HashSet<RawSurface>>,
    contexts: RefCell<HashMap<RawSurface, Vec<u8>>>,
    fail_reads: Cell<bool>,
    fail_installs: Cell<bool>,
    installs: Cell<usize>,
    uninstalls: Cell<usize>,
    forwarded: RefCell<Vec<u32>>,
    counters: Rc<Counters>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_layout(&self, layout: Option<usize>) {
        self.layout.set(layout);
    }

    /// Give `surface` an input context holding `bytes`, or take it away.
    pub fn set_context(&self, surface: RawSurface, bytes: Option<Vec<u8>>) {
        let mut contexts = self.contexts.borrow_mut();
        match bytes {
            Some(bytes) => contexts.insert(surface, bytes),
            None => contexts.remove(&surface),
        };
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_installs(&self, fail: bool) {
        self.fail_installs.set(fail);
    }

    pub fn contexts_opened(&self) -> usize {
        self.counters.opened.get()
    }

    pub fn contexts_released(&self) -> usize {
        self.counters.released.get()
    }

    pub fn installs(&self) -> usize {
        self.installs.get()
    }

    pub fn uninstalls(&self) -> usize {
        self.uninstalls.get()
    }

    pub fn is_hooked(&self, surface: RawSurface) -> bool {
        self.hooks.borrow().contains_key(&surface)
    }

    /// Messages that reached the original window procedure.
    pub fn forwarded(&self) -> Vec<u32> {
        self.forwarded.borrow().clone()
    }

    /// Deliver a message to `surface`.
    pub fn send(&self, surface: RawSurface, msg: u32, wparam: usize, lparam: isize) -> isize {
        let message = Message {
            surface,
            msg,
            wparam,
            lparam,
        };
        let mut original = |message: &Message| {
            self.forwarded.borrow_mut().push(message.msg);
            ORIGINAL_RESULT
        };
        let hook = self.hooks.borrow().get(&surface).cloned();
        match hook {
            Some(hook) => hook.intercept(message, PreviousHandler::new(&mut original)),
            None => original(&message),
        }
    }

    /// Destroy `surface` without telling anyone but the hook.
    pub fn destroy(&self, surface: RawSurface) {
        self.destroyed.borrow_mut().insert(surface);
        let hook = self.hooks.borrow_mut().remove(&surface);
        if let Some(hook) = hook {
            hook.surface_destroyed(surface);
        }
    }
}

impl KeyboardLayouts for TestHost {
    fn active_layout(&self) -> Option<usize> {
        self.layout.get()
    }
}

impl Host for TestHost {
    type Context = TestContext;

    fn install(
        &self,
        surface: RawSurface,
        interceptor: Rc<dyn MessageInterceptor>,
    ) -> Result<(), Error> {
        if self.destroyed.borrow().contains(&surface) {
            return Err(Error::InvalidSurface(surface));
        }
        if self.fail_installs.get() {
            return Err(Error::Install {
                surface,
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "refused"),
            });
        }
        let mut hooks = self.hooks.borrow_mut();
        if hooks.contains_key(&surface) {
            return Err(Error::AlreadyHooked(surface));
        }
        hooks.insert(surface, interceptor);
        self.installs.set(self.installs.get() + 1);
        Ok(())
    }

    fn uninstall(&self, surface: RawSurface) {
        let removed = self.hooks.borrow_mut().remove(&surface);
        if removed.is_some() {
            self.uninstalls.set(self.uninstalls.get() + 1);
        }
    }

    fn open_input_context(&self, surface: RawSurface) -> Option<TestContext> {
        let bytes = self.contexts.borrow().get(&surface)?.clone();
        self.counters.opened.set(self.counters.opened.get() + 1);
        Some(TestContext {
            bytes,
            fail_reads: self.fail_reads.get(),
            counters: self.counters.clone(),
        })
    }
}

/// Records composition events as short strings.
#[derive(Clone, Default)]
pub(crate) struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn callbacks(&self) -> CompositionCallbacks {
        let (start, update, end) = (self.clone(), self.clone(), self.clone());
        CompositionCallbacks::new()
            .on_start(move || start.push("start"))
            .on_update(move |text| update.push(format!("update {text}")))
            .on_end(move || end.push("end"))
    }
}
