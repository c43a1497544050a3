use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::path::Path;
use std::sync::Arc;

mod config {
    pub mod app_config;
}
mod handlers {
    pub mod enquiry_handlers;
}
mod utils {
    pub mod mailer;
}

use config::app_config::Config;
use handlers::enquiry_handlers;
use utils::mailer::{Mailer, SmtpMailer};


async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    mailer: Arc<dyn Mailer>,
}

pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(shared::SEND_EMAIL_PATH, post(enquiry_handlers::send_email))
        .with_state(state)
}

/// Built frontend; unknown paths are answered with the single page.
fn static_files(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

fn cors_layer(frontend_url: Option<&str>) -> anyhow::Result<CorsLayer> {
    let origin = match frontend_url {
        Some(url) => AllowOrigin::exact(url.parse::<HeaderValue>()?),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE]))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mailer = SmtpMailer::new(&config)?;
    let state = Arc::new(AppState {
        mailer: Arc::new(mailer),
    });

    let frontend_files = static_files(&config.static_dir);

    let app = api_router(state)
        .fallback_service(frontend_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(config.frontend_url.as_deref())?);

    use tokio::net::TcpListener;

    tracing::info!("Listening on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn unknown_paths_serve_index_with_ok() {
        let dir = std::env::temp_dir().join(format!("omnituple-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>omnituple</html>").unwrap();

        let response = static_files(&dir)
            .oneshot(Request::builder().uri("/pricing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<html>omnituple</html>");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
