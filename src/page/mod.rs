//! Page controller
//!
//! The single stateful piece of the site. [`PageController`] owns the
//! [`PageState`] through a [`StateStore`], starts the effect engine, follows
//! the pointer and produces a [`PageView`] on demand. Hosts plug in through
//! the traits in [`host`].
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use linkmee::content::SITE;
//! use linkmee::page::{EffectCallback, EffectEngine, PageController, PageState,
//!     PointerHandler, PointerSource};
//!
//! struct NoPointer;
//! impl PointerSource for NoPointer {
//!     type Subscription = ();
//!     fn subscribe(&self, _: PointerHandler) {}
//!     fn unsubscribe(&self, _: ()) {}
//! }
//!
//! struct InstantEngine;
//! impl EffectEngine for InstantEngine {
//!     fn start(&self, on_done: EffectCallback) {
//!         on_done(Ok(()));
//!     }
//! }
//!
//! let store = Rc::new(RefCell::new(PageState::default()));
//! let mut page = PageController::new(store, NoPointer, InstantEngine);
//! assert!(page.render(&SITE, 2025).is_none());
//!
//! page.initialize();
//! let view = page.render(&SITE, 2025).unwrap();
//! assert!(view.effect_layer.is_some());
//! assert_eq!(view.links.cards.len(), 5);
//! ```

pub mod controller;
pub mod host;
pub mod liveness;
pub mod pointer;
pub mod state;
pub mod view;

pub use controller::PageController;
pub use host::{EffectCallback, EffectEngine, PointerHandler, PointerSource, StateStore};
pub use liveness::{Liveness, LivenessWatch};
pub use pointer::{parallax_offset, Bounds, PointerPosition, PointerSample};
pub use state::{EffectInitState, MountState, PageState, RenderKey};
pub use view::{
    render, AvatarView, EffectLayer, FooterView, HeaderView, IdentityView, LinkCardView,
    LinkListView, PageView, ProfileView, ToggleView, AVATAR_KEYFRAMES,
};
