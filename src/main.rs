mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::actions::{routes as actions_routes, ActionService, JournalActionSink};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::feedback::{routes as feedback_routes, FeedbackService};
use crate::features::profile::{routes as profile_routes, ProfileService};
use crate::features::reports::{routes as reports_routes, ReportService};
use crate::features::technicians::{routes as technicians_routes, TechnicianService};
use crate::modules::store::RecordStore;
use axum::Router;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    // Load and validate the record store
    let store = Arc::new(
        RecordStore::load(&config.store)
            .map_err(|e| anyhow::anyhow!("Failed to load records: {}", e))?,
    );
    tracing::info!(
        "Record store loaded: {} reports, {} technicians, {} feedback entries",
        store.reports().len(),
        store.technicians().len(),
        store.feedback().len()
    );

    // Initialize action handling
    let action_sink = Arc::new(JournalActionSink::new(config.actions.journal_capacity));
    let action_service = Arc::new(ActionService::new(Arc::clone(&store), action_sink));
    tracing::info!(
        "Action journal initialized (capacity {})",
        config.actions.journal_capacity
    );

    // Initialize read services
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&store),
        config.dashboard.recent_reports_limit,
    ));
    let report_service = Arc::new(ReportService::new(Arc::clone(&store)));
    let technician_service = Arc::new(TechnicianService::new(Arc::clone(&store)));
    let feedback_service = Arc::new(FeedbackService::new(Arc::clone(&store)));
    let profile_service = Arc::new(ProfileService::new(Arc::clone(&store)));
    tracing::info!("Dashboard services initialized");

    // Build OpenAPI document with configured info
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };
    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }

    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let api_routes = Router::new()
        .merge(dashboard_routes::routes(dashboard_service))
        .merge(reports_routes::routes(
            report_service,
            Arc::clone(&action_service),
        ))
        .merge(technicians_routes::routes(technician_service))
        .merge(feedback_routes::routes(feedback_service))
        .merge(profile_routes::routes(
            profile_service,
            Arc::clone(&action_service),
        ))
        .merge(actions_routes::routes(action_service));

    let app = middleware::with_http_layers(
        Router::new()
            .merge(swagger)
            .merge(api_routes)
            .merge(health_route),
        config.app.cors_allowed_origins.clone(),
    );

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;
    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
