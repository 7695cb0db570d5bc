//! Todo page host.
//!
//! Serves the embedded page, the health probe and, by default, the in-memory
//! development API. See `--help` for configuration.

use clap::Parser;
use todo_server::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::parse();
    let app = todo_server::app(&config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Server running on http://{}", config.addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET    /api/ping            - Health probe");
    if !config.no_dev_api {
        tracing::info!("  GET    /api/todos           - List todos");
        tracing::info!("  POST   /api/todos           - Create a todo");
        tracing::info!("  PATCH  /api/todos/{{id}}/done - Mark a todo as done");
        tracing::info!("  DELETE /api/todos/{{id}}      - Delete a todo");
    }

    axum::serve(listener, app).await
}
