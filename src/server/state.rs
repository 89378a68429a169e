//! Application State
//!
//! Shared by all handlers behind an `Arc`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::{Config, SiteConfig};
use crate::content::{SiteContent, SITE};

#[derive(Clone)]
pub struct AppState {
    /// Bundle and asset locations
    pub site: Arc<SiteConfig>,
    /// What the fallback page and placeholder image are built from
    pub content: &'static SiteContent,
    pub request_timeout: Duration,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_content(config, &SITE)
    }

    pub fn with_content(config: &Config, content: &'static SiteContent) -> Self {
        Self {
            site: Arc::new(config.site.clone()),
            content,
            request_timeout: config.server.request_timeout(),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether `trunk build` output is present
    pub fn bundle_available(&self) -> bool {
        self.site.index_html().is_file()
    }

    pub fn profile_image_path(&self) -> PathBuf {
        self.site.profile_image(self.content.profile.image_path)
    }
}
