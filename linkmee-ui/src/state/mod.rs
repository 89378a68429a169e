//! State Management
//!
//! The page controller bound to Leptos signals and browser hosts.

pub mod host;
pub mod page;

pub use host::{TsParticlesEngine, WindowPointerSource};
pub use page::{provide_page, use_page, PageContext, SignalStore};
