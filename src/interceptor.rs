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

//! Message interception for a single surface.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::msgs::ImeMessage;
use crate::{
    extract_composition_text, CompositionEvent, CompositionHandler, CompositionState,
    CompositionTracker, DecodeStrategy, Error, Host, RawSurface, SurfaceId,
};

/// A native message, as delivered to a window procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message {
    pub surface: RawSurface,
    pub msg: u32,
    pub wparam: usize,
    pub lparam: isize,
}

/// The message procedure that was installed before the interceptor.
///
/// Forwarding consumes the handle, so a message can reach the previous
/// procedure at most once.
#[must_use = "every message must be forwarded to the previous handler"]
pub struct PreviousHandler<'a> {
    forward: &'a mut dyn FnMut(&Message) -> isize,
}

impl<'a> PreviousHandler<'a> {
    pub fn new(forward: &'a mut dyn FnMut(&Message) -> isize) -> Self {
        PreviousHandler { forward }
    }

    /// Hand `message` to the previous procedure and return its result.
    pub fn forward(self, message: &Message) -> isize {
        (self.forward)(message)
    }
}

/// Something that sits in front of a surface's message procedure.
pub trait MessageInterceptor {
    /// Look at `message`, then pass it on through `previous`.
    ///
    /// Implementations must forward every message, including the ones they
    /// act on, and return the previous procedure's result unless they have a
    /// reason to override it.
    fn intercept(&self, message: Message, previous: PreviousHandler<'_>) -> isize;

    /// The host destroyed `surface` and has already dropped the hook.
    #[allow(unused_variables)]
    fn surface_destroyed(&self, surface: RawSurface) {}
}

/// Watches the IME traffic of one surface and reports it to a
/// [`CompositionHandler`].
///
/// Interceptors are created and owned by an
/// [`AttachmentRegistry`](crate::AttachmentRegistry).
pub struct Interceptor<H: Host> {
    id: SurfaceId,
    host: Rc<H>,
    decode: DecodeStrategy,
    /// The hooked native handle. `None` while installation is deferred and
    /// after the hook has been released.
    target: Cell<Option<RawSurface>>,
    tracker: Cell<CompositionTracker>,
    handler: RefCell<Box<dyn CompositionHandler>>,
}

impl<H: Host + 'static> Interceptor<H> {
    pub(crate) fn new(
        id: SurfaceId,
        host: Rc<H>,
        decode: DecodeStrategy,
        handler: Box<dyn CompositionHandler>,
    ) -> Rc<Self> {
        Rc::new(Interceptor {
            id,
            host,
            decode,
            target: Cell::new(None),
            tracker: Cell::new(CompositionTracker::new()),
            handler: RefCell::new(handler),
        })
    }

    /// Hook `surface`, releasing any hook on a different handle first.
    pub(crate) fn install(self: &Rc<Self>, surface: RawSurface) -> Result<(), Error> {
        if self.target.get() == Some(surface) {
            return Ok(());
        }
        self.release();
        let hook: Rc<dyn MessageInterceptor> = self.clone();
        self.host.install(surface, hook)?;
        self.target.set(Some(surface));
        tracing::debug!(id = %self.id, ?surface, "IME interceptor installed");
        Ok(())
    }

    /// Restore the original message procedure, if hooked.
    ///
    /// A composition in progress is abandoned without an end event.
    pub(crate) fn release(&self) {
        if let Some(surface) = self.target.take() {
            self.host.uninstall(surface);
            self.reset();
            tracing::debug!(id = %self.id, ?surface, "IME interceptor released");
        }
    }
}

impl<H: Host> Interceptor<H> {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn target(&self) -> Option<RawSurface> {
        self.target.get()
    }

    pub fn is_hooked(&self) -> bool {
        self.target.get().is_some()
    }

    pub fn decode_strategy(&self) -> DecodeStrategy {
        self.decode
    }

    pub fn state(&self) -> CompositionState {
        self.tracker.get().state()
    }

    fn reset(&self) {
        let mut tracker = self.tracker.get();
        tracker.reset();
        self.tracker.set(tracker);
    }

    fn on_ime_message(&self, kind: ImeMessage, message: &Message) {
        let mut events = Vec::with_capacity(2);
        let mut tracker = self.tracker.get();
        let emit = |event: CompositionEvent| events.push(event);
        match kind {
            ImeMessage::StartComposition => tracker.start(emit),
            ImeMessage::Composition => {
                tracing::trace!(id = %self.id, flags = message.lparam, "WM_IME_COMPOSITION");
                let text = extract_composition_text(&*self.host, message.surface, self.decode);
                tracker.update(text, emit);
            }
            ImeMessage::EndComposition => tracker.end(emit),
        }
        self.tracker.set(tracker);

        for event in &events {
            // A handler may detach us; nothing is delivered after that.
            if self.target.get() != Some(message.surface) {
                break;
            }
            self.dispatch(event);
        }
    }

    fn dispatch(&self, event: &CompositionEvent) {
        match self.handler.try_borrow_mut() {
            Ok(mut handler) => {
                tracing::trace!(id = %self.id, ?event, "composition event");
                handler.handle_event(event);
            }
            Err(_) => {
                tracing::warn!(id = %self.id, ?event, "composition handler re-entered, dropping event")
            }
        }
    }
}

impl<H: Host> MessageInterceptor for Interceptor<H> {
    fn intercept(&self, message: Message, previous: PreviousHandler<'_>) -> isize {
        if self.target.get() == Some(message.surface) {
            if let Some(kind) = ImeMessage::classify(message.msg) {
                self.on_ime_message(kind, &message);
            }
        }
        previous.forward(&message)
    }

    fn surface_destroyed(&self, surface: RawSurface) {
        if self.target.get() == Some(surface) {
            self.target.set(None);
            self.reset();
            tracing::debug!(id = %self.id, ?surface, "surface destroyed while hooked");
        }
    }
}

impl<H: Host> fmt::Debug for Interceptor<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Interceptor")
            .field("id", &self.id)
            .field("target", &self.target.get())
            .field("decode", &self.decode)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
