use std::sync::Arc;
use anyhow::{bail, Context};
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use crate::config::ServeConfig;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::ReservaStore;

pub mod health_check;
pub mod reservas_controller;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReservaStore>,
}

pub async fn serve(
    app_state: AppState,
    config: &ServeConfig,
) -> anyhow::Result<()> {
    let origins = parse_origins(&config.origin_urls)?;
    let application = application(app_state, origins);

    info!("API server listening on: {}", config.listen_addr);
    axum::Server::try_bind(&config.listen_addr)
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn application(app_state: AppState, origins: AllowOrigin) -> Router {
    router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::OPTIONS])
                        .allow_origin(origins)
                        .allow_headers([CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
        )
        .fallback(page_not_found_handler)
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(reservas_controller::router(app_state))
}

/// A lone `*` allows any origin. Mixing it with explicit origins is
/// rejected, tower-http refuses wildcards inside an origin list.
pub fn parse_origins(origin_urls: &str) -> anyhow::Result<AllowOrigin> {
    let origins = parse_origin_list(origin_urls)?;

    if origins.iter().any(|o| o == "*") {
        if origins.len() > 1 {
            bail!("Wildcard origin `*` cannot be combined with other origins: {}", origin_urls);
        }
        return Ok(AllowOrigin::any());
    }
    Ok(AllowOrigin::list(origins))
}

fn parse_origin_list(origin_urls: &str) -> anyhow::Result<Vec<HeaderValue>> {
    origin_urls
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .with_context(|| format!("Invalid origin url: {}", s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use crate::repositories::fixture_repo::FixtureRepo;

    fn app_with_origins(origin_urls: &str) -> Router {
        let app_state = AppState {
            store: Arc::new(ReservaStore::Fixture(FixtureRepo::default())),
        };
        application(app_state, parse_origins(origin_urls).unwrap())
    }

    fn app() -> Router {
        app_with_origins("http://localhost:3000")
    }

    #[test]
    fn splits_origin_list() {
        let origins = parse_origin_list("http://localhost:3000, http://127.0.0.1:5173,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "http://127.0.0.1:5173");
    }

    #[test]
    fn rejects_bad_origin() {
        assert!(parse_origins("http://local\nhost").is_err());
    }

    #[test]
    fn rejects_wildcard_mixed_with_origins() {
        let err = parse_origins("*, http://localhost:3000").unwrap_err();
        assert!(err.to_string().contains("Wildcard origin"));
    }

    #[tokio::test]
    async fn lone_wildcard_allows_any_origin() {
        let res = app_with_origins("*")
            .oneshot(
                Request::builder()
                    .uri("/api/reservas/")
                    .header("origin", "http://elsewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers().get("access-control-allow-origin").unwrap(), "*");
    }

    #[tokio::test]
    async fn unknown_route_hits_teapot() {
        let res = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn empty_store_lists_empty_array() {
        let res = app()
            .oneshot(Request::builder().uri("/api/reservas/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let res = app()
            .oneshot(
                Request::builder()
                    .uri("/api/reservas/")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            res.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:3000"
        );
    }
}
