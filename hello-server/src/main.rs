use hello_server::{server, Config, Server};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let server = Server::bind(config).await?;
    server.serve(server::shutdown_signal()).await?;

    tracing::info!("server stopped");
    Ok(())
}
