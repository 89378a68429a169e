//! Seams between the page controller and its environment
//!
//! The browser frontend implements these over signals, `window` listeners and
//! the particle engine. Tests implement them in memory.

use std::cell::RefCell;
use std::rc::Rc;

use super::pointer::PointerSample;
use super::state::PageState;
use crate::effects::EffectError;

/// Where the page state lives
pub trait StateStore: Clone + 'static {
    fn get(&self) -> PageState;
    fn update(&self, f: impl FnOnce(&mut PageState));
}

impl StateStore for Rc<RefCell<PageState>> {
    fn get(&self) -> PageState {
        *self.borrow()
    }

    fn update(&self, f: impl FnOnce(&mut PageState)) {
        f(&mut self.borrow_mut());
    }
}

pub type PointerHandler = Box<dyn FnMut(PointerSample)>;

/// Pointer-move events over the page container
pub trait PointerSource {
    /// Handle that keeps the observer registered
    type Subscription;

    fn subscribe(&self, handler: PointerHandler) -> Self::Subscription;
    fn unsubscribe(&self, subscription: Self::Subscription);
}

pub type EffectCallback = Box<dyn FnOnce(Result<(), EffectError>)>;

/// Asynchronous setup of the background effect engine
pub trait EffectEngine {
    /// Begin setup and call `on_done` exactly once when it finishes. The
    /// callback may run synchronously, later, or after the page is gone.
    fn start(&self, on_done: EffectCallback);
}
