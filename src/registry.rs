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

//! The table of attached surfaces.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{CompositionHandler, DecodeStrategy, Error, Host, Interceptor, RawSurface, SurfaceId};

/// Maps surfaces to the interceptors watching them.
///
/// A surface has at most one interceptor. Attaching a surface that is
/// already attached replaces the old interceptor, whose hook is released
/// first.
///
/// The registry lives on the UI thread and is neither `Send` nor `Sync`.
/// Dropping it detaches every surface.
pub struct AttachmentRegistry<H: Host + 'static> {
    host: Rc<H>,
    decode: DecodeStrategy,
    entries: RefCell<HashMap<SurfaceId, Rc<Interceptor<H>>>>,
}

impl<H: Host + 'static> AttachmentRegistry<H> {
    pub fn new(host: H) -> Self {
        Self::with_host(Rc::new(host))
    }

    /// Create a registry on a host that is shared with other code.
    pub fn with_host(host: Rc<H>) -> Self {
        AttachmentRegistry {
            host,
            decode: DecodeStrategy::default(),
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Set how composition buffers are decoded for surfaces attached from now on.
    pub fn decode_strategy(mut self, strategy: DecodeStrategy) -> Self {
        self.decode = strategy;
        self
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Start watching the IME traffic of `id`.
    ///
    /// If `native` is `None` the surface has not been realized yet, and the
    /// hook is installed by a later call to [`surface_ready`].
    ///
    /// If installation fails the surface is left detached.
    ///
    /// [`surface_ready`]: AttachmentRegistry::surface_ready
    pub fn attach(
        &self,
        id: SurfaceId,
        native: Option<RawSurface>,
        handler: impl CompositionHandler + 'static,
    ) -> Result<(), Error> {
        let previous = self.entries.borrow_mut().remove(&id);
        if let Some(previous) = previous {
            tracing::debug!(%id, "replacing attached IME interceptor");
            previous.release();
        }

        let interceptor = Interceptor::new(id, self.host.clone(), self.decode, Box::new(handler));
        match native {
            Some(native) => interceptor.install(native)?,
            None => tracing::debug!(%id, "surface not realized, deferring IME hook"),
        }
        self.entries.borrow_mut().insert(id, interceptor);
        Ok(())
    }

    /// The surface `id` acquired the native handle `native`.
    ///
    /// Installs the deferred hook, or moves an existing hook over if the
    /// surface was re-created with a new handle. Unknown ids are ignored.
    pub fn surface_ready(&self, id: SurfaceId, native: RawSurface) -> Result<(), Error> {
        let Some(interceptor) = self.get(id) else {
            tracing::trace!(%id, "surface_ready for a surface that is not attached");
            return Ok(());
        };
        if let Err(err) = interceptor.install(native) {
            self.entries.borrow_mut().remove(&id);
            return Err(err);
        }
        Ok(())
    }

    /// The native handle of `id` is going away.
    ///
    /// The hook is released but the surface stays attached, so the next
    /// [`surface_ready`](AttachmentRegistry::surface_ready) hooks it again.
    pub fn surface_destroyed(&self, id: SurfaceId) {
        if let Some(interceptor) = self.get(id) {
            interceptor.release();
        }
    }

    /// Stop watching `id`. Does nothing if it is not attached.
    pub fn detach(&self, id: SurfaceId) {
        let removed = self.entries.borrow_mut().remove(&id);
        if let Some(interceptor) = removed {
            interceptor.release();
            tracing::debug!(%id, "IME interceptor detached");
        }
    }

    /// Detach every surface.
    pub fn clear(&self) {
        let drained: Vec<_> = self.entries.borrow_mut().drain().map(|(_, i)| i).collect();
        for interceptor in drained {
            interceptor.release();
        }
    }

    pub fn is_attached(&self, id: SurfaceId) -> bool {
        self.entries.borrow().contains_key(&id)
    }

    /// The interceptor watching `id`.
    pub fn get(&self, id: SurfaceId) -> Option<Rc<Interceptor<H>>> {
        self.entries.borrow().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<H: Host + 'static> Drop for AttachmentRegistry<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<H: Host + 'static> fmt::Debug for AttachmentRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AttachmentRegistry")
            .field("decode", &self.decode)
            .field("entries", &self.entries.borrow().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_not_impl_any;

    use super::*;
    use crate::msgs::{WM_IME_COMPOSITION, WM_IME_ENDCOMPOSITION, WM_IME_STARTCOMPOSITION};
    use crate::test_host::{utf16_bytes, EventLog, TestHost};
    use crate::{CompositionCallbacks, CompositionState};

    assert_not_impl_any!(AttachmentRegistry<TestHost>: Send, Sync);

    const HWND: RawSurface = RawSurface::from_raw(0x3000);

    fn registry() -> AttachmentRegistry<TestHost> {
        AttachmentRegistry::new(TestHost::new()).decode_strategy(DecodeStrategy::Utf16)
    }

    fn compose(registry: &AttachmentRegistry<TestHost>, surface: RawSurface, text: &str) {
        let host = registry.host();
        host.set_context(surface, Some(utf16_bytes(text)));
        host.send(surface, WM_IME_COMPOSITION, 0, 0);
    }

    #[test]
    fn detach_unknown_surface_is_a_no_op() {
        let registry = registry();
        registry.detach(SurfaceId::next());
        assert!(registry.is_empty());
        assert_eq!(registry.host().uninstalls(), 0);
    }

    #[test_log::test]
    fn detach_twice() {
        let registry = registry();
        let id = SurfaceId::next();
        registry.attach(id, Some(HWND), CompositionCallbacks::new()).unwrap();
        assert!(registry.host().is_hooked(HWND));

        registry.detach(id);
        registry.detach(id);
        assert!(!registry.is_attached(id));
        assert!(!registry.host().is_hooked(HWND));
        assert_eq!(registry.host().uninstalls(), 1);
    }

    #[test_log::test]
    fn full_session() {
        let registry = registry();
        let log = EventLog::default();
        let id = SurfaceId::next();
        registry.attach(id, Some(HWND), log.callbacks()).unwrap();
        let host = registry.host();

        host.send(HWND, WM_IME_STARTCOMPOSITION, 0, 0);
        compose(&registry, HWND, "ㄱ");
        compose(&registry, HWND, "");
        host.send(HWND, WM_IME_ENDCOMPOSITION, 0, 0);
        compose(&registry, HWND, "가");

        assert_eq!(
            log.take(),
            ["start", "update ㄱ", "update ", "end", "start", "update 가"]
        );
        assert_eq!(registry.get(id).unwrap().state(), CompositionState::Composing);
    }

    #[test]
    fn update_only_subscriber() {
        let registry = registry();
        let log = EventLog::default();
        let updates = log.clone();
        let id = SurfaceId::next();
        registry
            .attach(
                id,
                Some(HWND),
                CompositionCallbacks::new().on_update(move |text| updates.push(text)),
            )
            .unwrap();

        let host = registry.host();
        host.send(HWND, WM_IME_STARTCOMPOSITION, 0, 0);
        assert_eq!(registry.get(id).unwrap().state(), CompositionState::Composing);
        compose(&registry, HWND, "あ");
        host.send(HWND, WM_IME_ENDCOMPOSITION, 0, 0);
        assert_eq!(registry.get(id).unwrap().state(), CompositionState::Idle);

        assert_eq!(log.take(), ["あ"]);
    }

    #[test_log::test]
    fn reattach_replaces() {
        let registry = registry();
        let (first, second) = (EventLog::default(), EventLog::default());
        let id = SurfaceId::next();
        registry.attach(id, Some(HWND), first.callbacks()).unwrap();
        registry.attach(id, Some(HWND), second.callbacks()).unwrap();

        let host = registry.host();
        assert_eq!(host.installs(), 2);
        assert_eq!(host.uninstalls(), 1);
        assert_eq!(registry.len(), 1);

        host.send(HWND, WM_IME_STARTCOMPOSITION, 0, 0);
        assert!(first.take().is_empty());
        assert_eq!(second.take(), ["start"]);
    }

    #[test_log::test]
    fn deferred_install() {
        let registry = registry();
        let log = EventLog::default();
        let id = SurfaceId::next();
        registry.attach(id, None, log.callbacks()).unwrap();
        assert!(registry.is_attached(id));
        assert_eq!(registry.host().installs(), 0);

        registry.host().send(HWND, WM_IME_STARTCOMPOSITION, 0, 0);
        assert!(log.take().is_empty());

        registry.surface_ready(id, HWND).unwrap();
        registry.surface_ready(id, HWND).unwrap();
        assert_eq!(registry.host().installs(), 1);
        registry.host().send(HWND, WM_IME_STARTCOMPOSITION, 0, 0);
        assert_eq!(log.take(), ["start"]);

        // Unknown surfaces are ignored.
        registry.surface_ready(SurfaceId::next(), HWND).unwrap();
    }

    #[test]
    fn recreated_surface_is_rehooked() {
        let registry = registry();
        let log = EventLog::default();
        let id = SurfaceId::next();
        registry.attach(id, Some(HWND), log.callbacks()).unwrap();

        registry.surface_destroyed(id);
        assert!(registry.is_attached(id));
        assert!(!registry.host().is_hooked(HWND));

        let recreated = RawSurface::from_raw(0x3100);
        registry.surface_ready(id, recreated).unwrap();
        registry.host().send(recreated, WM_IME_STARTCOMPOSITION, 0, 0);
        assert_eq!(log.take(), ["start"]);
    }

    #[test]
    fn destroyed_without_notice() {
        let registry = registry();
        let id = SurfaceId::next();
        registry.attach(id, Some(HWND), CompositionCallbacks::new()).unwrap();

        registry.host().destroy(HWND);
        registry.detach(id);
        registry.detach(id);
        assert!(registry.is_empty());
        assert_eq!(registry.host().uninstalls(), 0);
    }

    #[test]
    fn failed_install_leaves_surface_detached() {
        let registry = registry();
        let id = SurfaceId::next();
        registry.host().fail_installs(true);
        let err = registry
            .attach(id, Some(HWND), CompositionCallbacks::new())
            .unwrap_err();
        assert!(matches!(err, Error::Install { surface, .. } if surface == HWND));
        assert!(!registry.is_attached(id));

        registry.attach(id, None, CompositionCallbacks::new()).unwrap();
        assert!(matches!(
            registry.surface_ready(id, HWND),
            Err(Error::Install { .. })
        ));
        assert!(!registry.is_attached(id));
    }

    #[test]
    fn one_hook_per_native_handle() {
        let registry = registry();
        let (a, b) = (SurfaceId::next(), SurfaceId::next());
        registry.attach(a, Some(HWND), CompositionCallbacks::new()).unwrap();
        let err = registry
            .attach(b, Some(HWND), CompositionCallbacks::new())
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyHooked(_)));
        assert_eq!(err.to_string(), "RawSurface(0x3000) already has an IME interceptor installed");
        assert!(registry.is_attached(a));
    }

    #[test_log::test]
    fn handler_may_detach_itself() {
        let registry = Rc::new(registry());
        let log = EventLog::default();
        let id = SurfaceId::next();
        let (inner, ended) = (Rc::downgrade(&registry), log.clone());
        registry
            .attach(
                id,
                Some(HWND),
                CompositionCallbacks::new()
                    .on_update(move |_| {
                        if let Some(registry) = inner.upgrade() {
                            registry.detach(id);
                        }
                    })
                    .on_end(move || ended.push("end")),
            )
            .unwrap();

        registry.host().send(HWND, WM_IME_STARTCOMPOSITION, 0, 0);
        compose(&registry, HWND, "");
        compose(&registry, HWND, "x");
        // Detached inside the update, so the synthesized end is not delivered.
        assert!(log.take().is_empty());
        assert!(!registry.is_attached(id));
        assert_eq!(
            registry.host().forwarded(),
            [WM_IME_STARTCOMPOSITION, WM_IME_COMPOSITION, WM_IME_COMPOSITION]
        );
    }

    #[test]
    fn drop_releases_every_hook() {
        let host = Rc::new(TestHost::new());
        {
            let registry = AttachmentRegistry::with_host(host.clone());
            for raw in 1..=3 {
                registry
                    .attach(
                        SurfaceId::next(),
                        Some(RawSurface::from_raw(raw)),
                        CompositionCallbacks::new(),
                    )
                    .unwrap();
            }
            assert_eq!(registry.len(), 3);
        }
        assert_eq!(host.installs(), 3);
        assert_eq!(host.uninstalls(), 3);
    }
}
