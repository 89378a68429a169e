//! Linkmee host
//!
//! Serves the browser bundle, the profile picture and health probes.
//!
//! # Endpoints
//!
//! - `GET /` - bundle `index.html`, or the static rendering without a bundle
//! - `GET /images/me.jpg` - profile picture, or an SVG placeholder
//! - `GET /health/live`, `GET /health/ready`, `GET /health`
//! - anything else - files from the bundle directory
//!
//! # Example
//!
//! ```rust,no_run
//! use linkmee::config::Config;
//! use linkmee::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     serve(AppState::new(&config), &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod shell;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let bundle = ServeDir::new(state.site.dist_dir.clone());
    let timeout = state.request_timeout;
    let image_path = state.content.profile.image_path;

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::pages::index))
        .route("/index.html", get(routes::pages::index))
        .route(image_path, get(routes::assets::profile_image))
        .nest("/health", health_routes)
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .with_state(shared_state)
}

/// Start the host
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    if !state.bundle_available() {
        tracing::warn!(
            "No bundle in {:?}; serving the static page. Run `trunk build` in linkmee-ui.",
            state.site.dist_dir
        );
    }

    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Linkmee listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Linkmee shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
        response::Response,
    };
    use routes::health::HealthResponse;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    const BUNDLE_MARKER: &str = "<!-- trunk bundle -->";

    struct Site {
        dir: TempDir,
    }

    impl Site {
        fn new() -> Self {
            let dir = tempdir().unwrap();
            std::fs::create_dir_all(dir.path().join("dist")).unwrap();
            std::fs::create_dir_all(dir.path().join("public/images")).unwrap();
            Self { dir }
        }

        fn path(&self) -> &Path {
            self.dir.path()
        }

        fn with_bundle(self) -> Self {
            std::fs::write(
                self.path().join("dist/index.html"),
                format!("<html>{}</html>", BUNDLE_MARKER),
            )
            .unwrap();
            std::fs::write(self.path().join("dist/linkmee-ui.js"), "export {}").unwrap();
            self
        }

        fn with_image(self, bytes: &[u8]) -> Self {
            std::fs::write(self.path().join("public/images/me.jpg"), bytes).unwrap();
            self
        }

        fn router(&self) -> Router {
            let mut config = Config::default();
            config.site.dist_dir = self.path().join("dist");
            config.site.assets_dir = self.path().join("public");
            build_router(AppState::new(&config))
        }

        async fn get(&self, uri: &str) -> Response {
            self.router()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap()
        }
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_text(response: Response) -> String {
        String::from_utf8(body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_probes() {
        let site = Site::new();
        for uri in ["/health/live", "/health/ready", "/health"] {
            assert_eq!(site.get(uri).await.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_health_reports_missing_bundle() {
        let site = Site::new();
        let bytes = body_bytes(site.get("/health").await).await;
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "degraded");
        assert_eq!(health.bundle, "missing");
        assert_eq!(health.profile_image, "placeholder");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_reports_bundle_and_image() {
        let site = Site::new().with_bundle().with_image(b"jpeg");
        let bytes = body_bytes(site.get("/health").await).await;
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.bundle, "ok");
        assert_eq!(health.profile_image, "ok");
    }

    #[tokio::test]
    async fn test_index_serves_bundle() {
        let site = Site::new().with_bundle();
        let response = site.get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(BUNDLE_MARKER));
    }

    #[tokio::test]
    async fn test_index_falls_back_to_static_page() {
        let site = Site::new();
        let response = site.get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!html.contains(BUNDLE_MARKER));
        assert!(html.contains("<title>syhru-linkmee</title>"));
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 5);
    }

    #[tokio::test]
    async fn test_bundle_assets() {
        let site = Site::new().with_bundle();
        let response = site.get("/linkmee-ui.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "export {}");

        assert_eq!(site.get("/missing.wasm").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_profile_image() {
        let site = Site::new().with_image(&[0xff, 0xd8, 0xff]);
        let response = site.get("/images/me.jpg").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "image/jpeg");
        assert_eq!(body_bytes(response).await, vec![0xff, 0xd8, 0xff]);
    }

    #[tokio::test]
    async fn test_profile_image_placeholder() {
        let site = Site::new();
        let response = site.get("/images/me.jpg").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "image/svg+xml");
        let svg = body_text(response).await;
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">S</text>"));
    }
}
