//! Process bootstrap: pool, router, listener and graceful shutdown.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::openapi::openapi_json;
use crate::repository::PgAdminRepository;
use crate::routes::{admin_routes, common_routes};
use crate::state::AppState;
use crate::store;
use axum::{routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router. Shared by `run` and the HTTP tests.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(admin_routes(state.clone()))
        .merge(common_routes(state))
        .route("/openapi.json", get(openapi_json))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
}

/// Connects the pool, serves until SIGINT/SIGTERM, then closes the pool.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let pool = store::connect(&config).await?;
    let state = AppState::new(Arc::new(PgAdminRepository::new(pool.clone())));
    let app = build_router(state, config.max_body_bytes);

    let listener = TcpListener::bind(&config.server_address).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    let result = serve(listener, app, shutdown_signal(), config.shutdown_grace()).await;
    pool.close().await;
    tracing::info!("database pool closed");
    result
}

/// Serves `app` until `signal` resolves, then stops accepting and gives in-flight
/// requests up to `grace` before aborting the server task.
pub async fn serve<S>(listener: TcpListener, app: Router, signal: S, grace: Duration) -> Result<(), AppError>
where
    S: Future<Output = ()> + Send,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        joined = &mut server => return flatten(joined),
        () = signal => {}
    }

    tracing::info!(grace_secs = grace.as_secs(), "shutting down, draining in-flight requests");
    let _ = stop_tx.send(());
    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => flatten(joined),
        Err(_) => {
            tracing::warn!("grace period elapsed, aborting remaining requests");
            server.abort();
            Ok(())
        }
    }
}

fn flatten(joined: Result<std::io::Result<()>, tokio::task::JoinError>) -> Result<(), AppError> {
    joined.map_err(|e| AppError::Internal(format!("server task failed: {}", e)))??;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, starting graceful shutdown"),
        () = terminate => tracing::info!("received SIGTERM, starting graceful shutdown"),
    }
}
