use clap::Parser;
use miette::{IntoDiagnostic, Result};
use receipt_processor::application::engine::ReceiptProcessor;
use receipt_processor::config::ServerConfig;
use receipt_processor::domain::ports::ReceiptStoreRef;
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_processor::interfaces::http::create_router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "receipt_processor=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Scores live only as long as the process
    let store: ReceiptStoreRef = Arc::new(InMemoryReceiptStore::new());
    let router = create_router(ReceiptProcessor::new(store));

    let address = config.socket_addr();
    let listener = TcpListener::bind(address).await.into_diagnostic()?;
    tracing::info!(%address, "Receipt processor listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    tracing::info!("Receipt processor stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
