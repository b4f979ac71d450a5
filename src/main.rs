//! blog-admin server binary.

use blog_admin::{config, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("blog_admin=info,tower_http=info")),
        )
        .init();

    let config = config::load_from_env()?;
    tracing::info!(addr = %config.server_address, "starting blog-admin");
    server::run(config).await?;
    Ok(())
}
