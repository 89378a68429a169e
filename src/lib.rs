//! # Linkmee
//!
//! A personal link-in-bio page: a profile card, an ordered list of outbound
//! links, a light/dark theme toggle and a decorative particle background.
//!
//! ## Modules
//!
//! - [`content`]: the fixed profile, links, metadata and footer
//! - [`theme`]: theme modes and their class palettes
//! - [`motion`]: entrance choreography, springs and gestures as CSS
//! - [`effects`]: particle background options and setup errors
//! - [`page`]: the page controller, its state and the render function
//!
//! With the default `server` feature the crate also carries the native host:
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//! - [`server`]: axum router serving the UI bundle or a static rendering
//!
//! The browser frontend lives in the `linkmee-ui` crate and builds this
//! crate with `default-features = false`.

pub mod content;
pub mod effects;
pub mod motion;
pub mod page;
pub mod theme;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

pub use content::{LinkEntry, SiteContent, SITE};
pub use effects::{EffectError, ParticlesOptions};
pub use motion::Choreography;
pub use page::{
    render, EffectInitState, MountState, PageController, PageState, PageView, PointerPosition,
};
pub use theme::ThemeMode;

#[cfg(feature = "server")]
pub use config::{Config, ConfigError};
#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError};
