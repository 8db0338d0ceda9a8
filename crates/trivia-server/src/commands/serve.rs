//! Serve command
//!
//! Usage: trivia-server serve [--config <PATH>]

use anyhow::Context;
use clap::Args;
use trivia_core::logging_facility;

use super::ConfigArgs;

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute serve command
pub fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let settings = args.config.load()?;
    logging_facility::init(settings.logging.profile);

    let service = trivia_server::open_service(&settings)
        .with_context(|| format!("opening database {}", settings.database.path.display()))?;
    let app = trivia_server::create_router(service);
    let addr = settings.server.bind_addr();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("binding {}", addr))?;
        tracing::info!(addr = %addr, "trivia server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("serving HTTP")
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
