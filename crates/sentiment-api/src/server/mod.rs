//! Server setup and initialization
//!
//! Wires storage, the classifier and services together, then runs the HTTP
//! server and the annotation worker side by side until a shutdown signal.

use std::sync::Arc;

use axum::Router;
use sentiment_common::{AppConfig, AppError, WorkerConfig};
use sentiment_db::{create_pool, ensure_schema, PgMessageRepository, PgPool, PgSentimentStatsRepository};
use sentiment_service::{AnnotationWorker, HttpClassifier, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router(), &state.config().api);
    router.with_state(state)
}

/// Build the service context on top of an existing pool
pub fn create_service_context(pool: &PgPool, config: &AppConfig) -> Result<ServiceContext, AppError> {
    let message_repo = Arc::new(PgMessageRepository::new(pool.clone()));
    let stats_repo = Arc::new(PgSentimentStatsRepository::new(pool.clone()));
    let classifier = Arc::new(HttpClassifier::new(&config.classifier)?);

    ServiceContextBuilder::new()
        .message_repo(message_repo)
        .stats_repo(stats_repo)
        .classifier(classifier)
        .summary(config.summary.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = sentiment_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.ensure_schema {
        ensure_schema(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let service_context = create_service_context(&pool, &config)?;

    Ok(AppState::new(service_context, pool, config))
}

/// Start the annotation worker on its own task
///
/// Returns `None` when the worker is disabled. A worker that stops on a
/// failed pass only logs; the HTTP server keeps serving reads.
pub fn spawn_worker(
    ctx: &ServiceContext,
    config: WorkerConfig,
    shutdown: watch::Receiver<bool>,
) -> Option<JoinHandle<()>> {
    if !config.enabled {
        info!("Annotation worker disabled");
        return None;
    }

    let worker = AnnotationWorker::new(ctx.message_repo_handle(), ctx.classifier(), config);
    Some(tokio::spawn(async move {
        if let Err(e) = worker.run(shutdown).await {
            error!(error = %e, "Annotation worker exited; messages will stay unlabeled until restart");
        }
    }))
}

/// Run the HTTP server until `shutdown` resolves
pub async fn run_server(
    app: Router,
    listener: TcpListener,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let host = config.api.host.clone();
    let port = config.api.port;
    let worker_config = config.worker.clone();

    let state = create_app_state(config).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = spawn_worker(state.service_context(), worker_config, shutdown_rx);

    info!("Starting HTTP server on {}:{}", host, port);
    let listener = TcpListener::bind((host.as_str(), port)).await.map_err(|e| {
        error!(error = %e, "Failed to bind to {}:{}", host, port);
        AppError::Server(e)
    })?;

    let app = create_app(state);
    let served = run_server(app, listener, async move {
        shutdown_signal().await;
        shutdown_tx.send_replace(true);
    })
    .await;

    if let Some(handle) = worker {
        info!("Waiting for the annotation worker to finish its pass");
        if let Err(e) = handle.await {
            error!(error = %e, "Annotation worker task panicked");
        }
    }

    info!("Server stopped");
    served
}

/// Resolve on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        () = terminate => {
            info!("Received terminate signal");
        }
    }
}
