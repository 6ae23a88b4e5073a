pub mod handlers;
pub mod types;

use crate::{Result, config::Config};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};
use std::{net::SocketAddr, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the application router.
///
/// The CORS layer answers `OPTIONS` preflight requests itself (200, empty
/// body, origin `*`, max-age one day) and stamps the origin header on every
/// other response. Methods other than `POST` and `OPTIONS` hit the
/// method-router fallback.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400));

    Router::new()
        .route(
            "/",
            post(handlers::generate).fallback(handlers::method_not_allowed),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    let app = app();

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
