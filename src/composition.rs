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

//! Composition lifecycle events and the state machine that produces them.

use std::fmt;

/// A change in the composition session of a surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompositionEvent {
    Started,
    /// The full composition string, not a delta. Empty when the user deleted
    /// every composed character; an [`Ended`] always follows in that case.
    ///
    /// [`Ended`]: CompositionEvent::Ended
    Updated(String),
    Ended,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompositionState {
    #[default]
    Idle,
    Composing,
}

/// Turns raw IME notifications into [`CompositionEvent`]s.
///
/// Some IMEs never send an end notification when a composition is cancelled
/// by deleting all of its characters, so an update carrying an empty string
/// ends the session. A later explicit end is then ignored, as is any end
/// that arrives while idle.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompositionTracker {
    state: CompositionState,
}

impl CompositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CompositionState {
        self.state
    }

    pub fn is_composing(&self) -> bool {
        self.state == CompositionState::Composing
    }

    pub fn start(&mut self, mut emit: impl FnMut(CompositionEvent)) {
        if self.state == CompositionState::Idle {
            self.state = CompositionState::Composing;
            emit(CompositionEvent::Started);
        }
    }

    pub fn update(&mut self, text: String, mut emit: impl FnMut(CompositionEvent)) {
        match (self.state, text.is_empty()) {
            (CompositionState::Composing, false) => emit(CompositionEvent::Updated(text)),
            (CompositionState::Composing, true) => {
                self.state = CompositionState::Idle;
                emit(CompositionEvent::Updated(text));
                emit(CompositionEvent::Ended);
            }
            // The start notification was missed; the first text starts the session.
            (CompositionState::Idle, false) => {
                self.state = CompositionState::Composing;
                emit(CompositionEvent::Started);
                emit(CompositionEvent::Updated(text));
            }
            // Sent alongside a committed result after the session already ended.
            (CompositionState::Idle, true) => {}
        }
    }

    pub fn end(&mut self, mut emit: impl FnMut(CompositionEvent)) {
        if self.state == CompositionState::Composing {
            self.state = CompositionState::Idle;
            emit(CompositionEvent::Ended);
        }
    }

    /// Forget any session in progress without emitting anything.
    pub fn reset(&mut self) {
        self.state = CompositionState::Idle;
    }
}

/// Receives the composition events of one surface.
///
/// Every method has a no-op default, so implement only what you need.
pub trait CompositionHandler {
    /// The user began composing.
    fn composition_started(&mut self) {}

    /// The composition string changed; `text` is the whole string.
    #[allow(unused_variables)]
    fn composition_updated(&mut self, text: &str) {}

    /// The composition was committed or cancelled.
    fn composition_ended(&mut self) {}

    /// Route `event` to the matching method.
    fn handle_event(&mut self, event: &CompositionEvent) {
        match event {
            CompositionEvent::Started => self.composition_started(),
            CompositionEvent::Updated(text) => self.composition_updated(text),
            CompositionEvent::Ended => self.composition_ended(),
        }
    }
}

impl CompositionHandler for Box<dyn CompositionHandler> {
    fn composition_started(&mut self) {
        (**self).composition_started()
    }

    fn composition_updated(&mut self, text: &str) {
        (**self).composition_updated(text)
    }

    fn composition_ended(&mut self) {
        (**self).composition_ended()
    }

    fn handle_event(&mut self, event: &CompositionEvent) {
        (**self).handle_event(event)
    }
}

/// A [`CompositionHandler`] built from closures.
///
/// Each kind of event may have any number of subscribers, including none.
/// Subscribers run in the order they were added.
#[derive(Default)]
pub struct CompositionCallbacks {
    on_start: Vec<Box<dyn FnMut()>>,
    on_update: Vec<Box<dyn FnMut(&str)>>,
    on_end: Vec<Box<dyn FnMut()>>,
}

impl CompositionCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_start.push(Box::new(f));
        self
    }

    pub fn on_update(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_update.push(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_end.push(Box::new(f));
        self
    }
}

impl CompositionHandler for CompositionCallbacks {
    fn composition_started(&mut self) {
        self.on_start.iter_mut().for_each(|f| f());
    }

    fn composition_updated(&mut self, text: &str) {
        self.on_update.iter_mut().for_each(|f| f(text));
    }

    fn composition_ended(&mut self) {
        self.on_end.iter_mut().for_each(|f| f());
    }
}

impl fmt::Debug for CompositionCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CompositionCallbacks")
            .field("on_start", &self.on_start.len())
            .field("on_update", &self.on_update.len())
            .field("on_end", &self.on_end.len())
            .finish()
    }
}
