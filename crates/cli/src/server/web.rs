use dns_lookup_api::{create_app, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    static_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        app_url = format!("http://{}", bind_addr),
        api_url = format!("http://{}/api", bind_addr),
        static_dir = ?static_dir,
        "Starting web server"
    );

    let app = create_app(state, static_dir);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Could not listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
