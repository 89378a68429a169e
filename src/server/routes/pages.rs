//! GET / - the browser bundle's `index.html`, or the static rendering when
//! the bundle has not been built.

use axum::{extract::State, response::Html};
use chrono::Datelike;
use std::io::ErrorKind;
use std::sync::Arc;

use crate::content::SiteContent;
use crate::page::{render, PageState};
use crate::server::error::{ServerError, ServerResult};
use crate::server::shell::render_document;
use crate::server::state::AppState;
use crate::theme::ThemeMode;

pub async fn index(State(state): State<Arc<AppState>>) -> ServerResult<Html<String>> {
    let path = state.site.index_html();
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No bundle at {:?}, serving static page", path);
            let year = chrono::Local::now().year();
            static_page(state.content, ThemeMode::default(), year).map(Html)
        }
        Err(e) => Err(e.into()),
    }
}

/// The page as first painted: mounted, no effect layer.
pub fn static_page(content: &SiteContent, theme: ThemeMode, year: i32) -> ServerResult<String> {
    let mut state = PageState {
        theme,
        ..PageState::default()
    };
    state.mark_mounted();
    render(&state, content, year)
        .map(|view| render_document(&view))
        .ok_or_else(|| ServerError::Internal("page did not render after mount".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SITE;

    #[test]
    fn test_static_page() {
        let html = static_page(&SITE, ThemeMode::Dark, 2024).unwrap();
        assert!(html.contains("class=\"dark\""));
        assert!(html.contains("Copyright © 2024 by Syahru"));

        let light = static_page(&SITE, ThemeMode::Light, 2024).unwrap();
        assert!(light.contains("class=\"light\""));
    }
}
