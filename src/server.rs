use anyhow::Context;
use tokio::net::TcpListener;

use crate::app_state::AppState;
use crate::config::SinkConfig;
use crate::dispatcher::build_router;

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: SinkConfig) -> anyhow::Result<()> {
    config.validate()?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let app = build_router(AppState::from_config(&config));

    println!("Logging server running on port {}", config.port);
    println!(
        "Debug logs will be written to {}",
        config.log_file_path.display()
    );
    tracing::info!(
        %addr,
        log_file = %config.log_file_path.display(),
        serve_static = config.serve_static,
        "log sink listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("log sink stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
