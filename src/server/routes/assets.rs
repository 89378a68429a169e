//! GET /images/me.jpg - the profile picture, or a generated placeholder.

use axum::{
    extract::State,
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::content::placeholder_avatar_svg;
use crate::server::error::ServerResult;
use crate::server::state::AppState;

pub async fn profile_image(State(state): State<Arc<AppState>>) -> ServerResult<Response> {
    let path = state.profile_image_path();
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok((
            [
                (CONTENT_TYPE, content_type_for(&path)),
                (CACHE_CONTROL, "public, max-age=3600".to_string()),
            ],
            bytes,
        )
            .into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No profile image at {:?}, serving placeholder", path);
            Ok((
                [(CONTENT_TYPE, "image/svg+xml"), (CACHE_CONTROL, "no-cache")],
                placeholder_avatar_svg(state.content),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
