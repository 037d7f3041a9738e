//! ExpertLink API Gateway
//!
//! The main entry point for all external API requests.
//! Handles:
//! - Chat pipeline (classification, expert matching, completion)
//! - Expert directory reads
//! - Observability (logging, metrics, tracing)

mod handlers;
mod middleware;

use axum::{
    extract::Request,
    middleware::Next,
    routing::{get, post},
    Router,
};
use expertlink_common::{
    chat::Lexicon,
    completion::{self, CompletionClient},
    config::AppConfig,
    db::DbPool,
    metrics as app_metrics,
};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DbPool,
    pub completion: Arc<dyn CompletionClient>,
    pub lexicon: Arc<Lexicon>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.observability.log_level.clone()));
    if config.observability.json_logging {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }

    info!("Starting ExpertLink API Gateway v{}", expertlink_common::VERSION);

    let config = Arc::new(config);

    // Initialize metrics
    app_metrics::register_metrics();
    if config.observability.metrics_port > 0 {
        let metrics_addr = SocketAddr::from(([0, 0, 0, 0], config.observability.metrics_port));
        PrometheusBuilder::new()
            .with_http_listener(metrics_addr)
            .set_buckets_for_metric(
                Matcher::Full(format!(
                    "{}_completion_duration_seconds",
                    app_metrics::METRICS_PREFIX
                )),
                app_metrics::COMPLETION_BUCKETS,
            )?
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                app_metrics::LATENCY_BUCKETS,
            )?
            .install()?;
        info!("Prometheus exporter listening on {}", metrics_addr);
    }

    // Initialize database connection
    info!("Connecting to database...");
    let db = DbPool::new(&config.database).await?;

    // Completion client and classification tables
    let completion = completion::create_client(&config.completion)?;
    let lexicon = Arc::new(Lexicon::default());

    // Create app state
    let state = AppState {
        config: config.clone(),
        db,
        completion,
        lexicon,
    };

    // Build the router
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    // API routes
    let mut api_routes = Router::new()
        // Chat endpoint
        .route("/chat", post(handlers::chat::chat))
        // Expert directory endpoints
        .route("/experts", get(handlers::experts::list_experts))
        .route("/experts/recommended", get(handlers::experts::recommended))
        .route("/experts/trending", get(handlers::experts::trending))
        .route("/experts/recommendations", post(handlers::experts::recommendations))
        .route("/experts/{id}", get(handlers::experts::get_expert))
        // Domain endpoints
        .route("/domains/trending", get(handlers::domains::trending));

    if state.config.rate_limit.enabled {
        let limiter = middleware::rate_limit::create_rate_limiter(
            state.config.rate_limit.requests_per_second,
            state.config.rate_limit.burst,
        );
        api_routes = api_routes.layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let limiter = limiter.clone();
                async move { middleware::rate_limit::rate_limit_middleware(req, next, limiter).await }
            },
        ));
    }

    // Compose the app
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(request_id)
        .layer(propagate_id)
        .with_state(state)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}
