use tracing::{debug, info};

use super::host::{EffectEngine, PointerSource, StateStore};
use super::liveness::Liveness;
use super::pointer::PointerSample;
use super::state::PageState;
use super::view::{render, PageView};
use crate::content::SiteContent;
use crate::theme::ThemeMode;

/// Owns one page instance: its state, its pointer subscription and the
/// effect engine setup.
///
/// Nothing mutates the state after [`PageController::teardown`], including
/// effect callbacks that complete late. A torn-down controller never
/// initializes again.
pub struct PageController<S, P, E>
where
    S: StateStore,
    P: PointerSource,
    E: EffectEngine,
{
    store: S,
    pointer: P,
    engine: E,
    liveness: Option<Liveness>,
    subscription: Option<P::Subscription>,
    torn_down: bool,
}

impl<S, P, E> PageController<S, P, E>
where
    S: StateStore,
    P: PointerSource,
    E: EffectEngine,
{
    pub fn new(store: S, pointer: P, engine: E) -> Self {
        Self {
            store,
            pointer,
            engine,
            liveness: None,
            subscription: None,
            torn_down: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_live(&self) -> bool {
        self.liveness.is_some()
    }

    /// Start effect setup, mark the page mounted and begin observing the
    /// pointer. Calling it again while live, or after teardown, does nothing.
    pub fn initialize(&mut self) {
        if self.liveness.is_some() {
            return;
        }
        if self.torn_down {
            debug!("initialize after teardown, ignoring");
            return;
        }
        let liveness = Liveness::new();

        let guard = liveness.watch();
        let store = self.store.clone();
        self.engine.start(Box::new(move |result| {
            if !guard.is_alive() {
                debug!("effect setup finished after teardown, ignoring");
                return;
            }
            match result {
                Ok(()) => {
                    store.update(PageState::mark_effect_ready);
                    debug!("effect engine ready");
                }
                Err(e) => debug!("effect engine unavailable: {}", e),
            }
        }));

        self.store.update(PageState::mark_mounted);

        let guard = liveness.watch();
        let store = self.store.clone();
        let handler = Box::new(move |sample: PointerSample| {
            if !guard.is_alive() {
                return;
            }
            if let Some(position) = sample.relative_position() {
                store.update(|state| state.pointer = position);
            }
        });
        self.subscription = Some(self.pointer.subscribe(handler));

        self.liveness = Some(liveness);
        info!("page initialized");
    }

    /// Flip the theme. Returns the new mode.
    pub fn toggle_theme(&self) -> ThemeMode {
        let mut theme = ThemeMode::default();
        self.store.update(|state| theme = state.toggle_theme());
        debug!(theme = %theme, "theme toggled");
        theme
    }

    /// Record a pointer sample directly, bypassing the subscription.
    pub fn on_pointer_move(&self, sample: PointerSample) {
        if self.liveness.is_none() {
            return;
        }
        if let Some(position) = sample.relative_position() {
            self.store.update(|state| state.pointer = position);
        }
    }

    pub fn render(&self, content: &SiteContent, year: i32) -> Option<PageView> {
        render(&self.store.get(), content, year)
    }

    /// Stop observing the pointer and disown pending callbacks. Safe to call
    /// more than once.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        let Some(liveness) = self.liveness.take() else {
            return;
        };
        liveness.revoke();
        if let Some(subscription) = self.subscription.take() {
            self.pointer.unsubscribe(subscription);
        }
        info!("page torn down");
    }
}

impl<S, P, E> Drop for PageController<S, P, E>
where
    S: StateStore,
    P: PointerSource,
    E: EffectEngine,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::content::SITE;
    use crate::effects::EffectError;
    use crate::page::host::{EffectCallback, PointerHandler};
    use crate::page::pointer::{Bounds, PointerPosition};

    type Store = Rc<RefCell<PageState>>;

    /// Pointer source that keeps handlers in slots and counts registrations
    #[derive(Clone, Default)]
    struct FakePointer {
        handlers: Rc<RefCell<Vec<Option<PointerHandler>>>>,
        subscribed: Rc<Cell<usize>>,
        unsubscribed: Rc<Cell<usize>>,
    }

    impl FakePointer {
        fn emit(&self, sample: PointerSample) {
            for handler in self.handlers.borrow_mut().iter_mut().flatten() {
                handler(sample);
            }
        }

        fn active(&self) -> usize {
            self.handlers.borrow().iter().flatten().count()
        }
    }

    impl PointerSource for FakePointer {
        type Subscription = usize;

        fn subscribe(&self, handler: PointerHandler) -> usize {
            self.subscribed.set(self.subscribed.get() + 1);
            let mut handlers = self.handlers.borrow_mut();
            handlers.push(Some(handler));
            handlers.len() - 1
        }

        fn unsubscribe(&self, slot: usize) {
            self.unsubscribed.set(self.unsubscribed.get() + 1);
            self.handlers.borrow_mut()[slot] = None;
        }
    }

    /// Engine whose completion the test triggers by hand
    #[derive(Clone, Default)]
    struct ManualEngine {
        pending: Rc<RefCell<Vec<EffectCallback>>>,
    }

    impl ManualEngine {
        fn finish(&self, result: Result<(), EffectError>) {
            let callbacks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for callback in callbacks {
                callback(result.clone());
            }
        }
    }

    impl EffectEngine for ManualEngine {
        fn start(&self, on_done: EffectCallback) {
            self.pending.borrow_mut().push(on_done);
        }
    }

    type TestController = PageController<Store, FakePointer, ManualEngine>;

    fn controller() -> (TestController, FakePointer, ManualEngine) {
        let pointer = FakePointer::default();
        let engine = ManualEngine::default();
        let store: Store = Rc::new(RefCell::new(PageState::default()));
        (
            PageController::new(store, pointer.clone(), engine.clone()),
            pointer,
            engine,
        )
    }

    fn sample(x: f64, y: f64) -> PointerSample {
        PointerSample {
            client_x: x,
            client_y: y,
            bounds: Some(Bounds {
                left: 10.0,
                top: 20.0,
                width: 300.0,
                height: 200.0,
            }),
        }
    }

    #[test]
    fn test_starts_dark_and_unmounted() {
        let (page, _, _) = controller();
        assert_eq!(page.store().get().theme, ThemeMode::Dark);
        assert!(page.render(&SITE, 2025).is_none());
    }

    #[test]
    fn test_initialize_mounts() {
        let (mut page, _, _) = controller();
        page.initialize();
        assert!(page.is_live());
        let view = page.render(&SITE, 2025).unwrap();
        assert!(view.effect_layer.is_none());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (mut page, _, _) = controller();
        page.initialize();
        let before = page.render(&SITE, 2025);
        assert_eq!(page.toggle_theme(), ThemeMode::Light);
        assert_ne!(page.render(&SITE, 2025), before);
        assert_eq!(page.toggle_theme(), ThemeMode::Dark);
        assert_eq!(page.render(&SITE, 2025), before);
    }

    #[test]
    fn test_effect_ready_adds_layer() {
        let (mut page, _, engine) = controller();
        page.initialize();
        engine.finish(Ok(()));
        assert!(page.store().get().effect_ready());
        assert!(page.render(&SITE, 2025).unwrap().effect_layer.is_some());
    }

    #[test]
    fn test_effect_failure_keeps_page() {
        let (mut page, _, engine) = controller();
        page.initialize();
        engine.finish(Err(EffectError::Unavailable("no engine".into())));
        let state = page.store().get();
        assert!(state.is_mounted());
        assert!(!state.effect_ready());
        assert_eq!(page.render(&SITE, 2025).unwrap().links.cards.len(), 5);
    }

    #[test]
    fn test_late_effect_after_teardown_is_ignored() {
        let (mut page, _, engine) = controller();
        page.initialize();
        let store = page.store().clone();
        let before = store.get();
        page.teardown();
        engine.finish(Ok(()));
        assert_eq!(store.get(), before);
        assert!(!store.get().effect_ready());
    }

    #[test]
    fn test_late_effect_after_drop_is_ignored() {
        let (mut page, _, engine) = controller();
        page.initialize();
        let store = page.store().clone();
        drop(page);
        engine.finish(Ok(()));
        assert!(!store.get().effect_ready());
    }

    #[test]
    fn test_pointer_relative_to_container() {
        let (mut page, pointer, _) = controller();
        page.initialize();
        pointer.emit(sample(110.0, 70.0));
        assert_eq!(page.store().get().pointer, PointerPosition { x: 100.0, y: 50.0 });
        pointer.emit(sample(310.0, 220.0));
        assert_eq!(page.store().get().pointer, PointerPosition { x: 300.0, y: 200.0 });
    }

    #[test]
    fn test_pointer_does_not_change_render() {
        let (mut page, pointer, _) = controller();
        page.initialize();
        let before = page.render(&SITE, 2025);
        pointer.emit(sample(42.0, 42.0));
        assert_eq!(page.render(&SITE, 2025), before);
    }

    #[test]
    fn test_single_subscription() {
        let (mut page, pointer, engine) = controller();
        page.initialize();
        page.initialize();
        assert_eq!(pointer.subscribed.get(), 1);
        assert_eq!(pointer.active(), 1);
        assert_eq!(engine.pending.borrow().len(), 1);

        page.teardown();
        page.teardown();
        assert_eq!(pointer.unsubscribed.get(), 1);
        assert_eq!(pointer.active(), 0);
    }

    #[test]
    fn test_teardown_before_initialize_blocks_it() {
        let (mut page, pointer, engine) = controller();
        page.teardown();
        page.initialize();
        assert!(!page.is_live());
        assert_eq!(pointer.subscribed.get(), 0);
        assert_eq!(pointer.active(), 0);
        assert!(engine.pending.borrow().is_empty());
        assert!(page.render(&SITE, 2025).is_none());
    }

    #[test]
    fn test_no_reinitialize_after_teardown() {
        let (mut page, pointer, _) = controller();
        page.initialize();
        page.teardown();
        page.initialize();
        assert!(!page.is_live());
        assert_eq!(pointer.subscribed.get(), 1);
        assert_eq!(pointer.active(), 0);
    }

    #[test]
    fn test_no_pointer_updates_after_teardown() {
        let (mut page, _, _) = controller();
        page.initialize();
        page.on_pointer_move(sample(20.0, 30.0));
        assert_eq!(page.store().get().pointer, PointerPosition { x: 10.0, y: 10.0 });
        page.teardown();
        page.on_pointer_move(sample(200.0, 200.0));
        assert_eq!(page.store().get().pointer, PointerPosition { x: 10.0, y: 10.0 });
    }
}
