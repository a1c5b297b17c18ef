//! HTTP routes served next to the Leptos app

use axum::Router;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::core::config::Config;

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// `302 Found` pointing at the image generation engine
pub fn studio_redirect(studio_url: &str) -> Response {
    found(studio_url)
}

/// Any path without a route of its own goes back to the landing page
pub async fn unknown_page(uri: Uri) -> Response {
    tracing::debug!("No route for {}, redirecting home", uri.path());
    found("/")
}

/// Routes for `/app` (redirected to the engine), `/static` assets, and the
/// redirect home for unknown paths
///
/// The returned router carries the fallback, so it must be merged with a
/// router that has none.
pub fn site_router(config: &Config) -> Router {
    let studio_url = config.studio_url.clone();
    let redirect = get(move || {
        let url = studio_url.clone();
        async move {
            tracing::info!("Redirecting to generation engine at {}", url);
            studio_redirect(&url)
        }
    });

    Router::new()
        .route("/app", redirect.clone())
        .route("/app/", redirect.clone())
        .route("/app/{*rest}", redirect)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(unknown_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn send(config: &Config, uri: &str) -> Response {
        site_router(config)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_app_redirects_to_studio() {
        let response = send(&Config::default(), "/app").await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "http://localhost:7862");
    }

    #[tokio::test]
    async fn test_nested_app_path_redirects() {
        let config = Config::from_values(Some("https://studio.capsule.ai".to_string()), None)
            .unwrap();
        for uri in ["/app/", "/app/gallery/42"] {
            let response = send(&config, uri).await;

            assert_eq!(response.status(), StatusCode::FOUND, "{uri}");
            assert_eq!(response.headers()[header::LOCATION], "https://studio.capsule.ai");
        }
    }

    #[tokio::test]
    async fn test_unknown_page_redirects_home() {
        for uri in ["/nope", "/pricing/old", "/application"] {
            let response = send(&Config::default(), uri).await;

            assert_eq!(response.status(), StatusCode::FOUND, "{uri}");
            assert_eq!(response.headers()[header::LOCATION], "/");
        }
    }

    #[tokio::test]
    async fn test_merges_with_page_routes() {
        let pages: Router = Router::new().route("/", get(|| async { "landing" }));
        let app = site_router(&Config::default()).merge(pages);

        let home = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(home.status(), StatusCode::OK);

        let unknown = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(unknown.status(), StatusCode::FOUND);
        assert_eq!(unknown.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_serves_stylesheet() {
        let response = send(&Config::default(), "/static/css/capsule-ai.css").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn test_missing_static_file() {
        let response = send(&Config::default(), "/static/nope.png").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_studio_redirect_response() {
        let response = studio_redirect("http://gpu-box:7862");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "http://gpu-box:7862");
    }
}
