use dotenvy::{dotenv, from_filename};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    core::domain::models::AppError,
    infrastructure::{config::RouterConfig, di::RingRouterModule, line_server::serve_lines},
};

pub mod core;
pub mod infrastructure;


fn load_env_for_workspace() {
    let _ = from_filename(concat!(env!("CARGO_MANIFEST_DIR"), "/.env"));
    let _ = from_filename(".env");
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();

    load_env_for_workspace();

    // stdout carries the protocol
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RouterConfig::from_env()?;
    info!(
        replication_factor = config.ring.replication_factor,
        hasher = config.ring.hasher.name(),
        bootstrap = config.bootstrap.len(),
        "ring router starting"
    );

    let module = RingRouterModule::build_from_config(&config)?;

    serve_lines(
        module.request_controller_service.clone(),
        tokio::io::stdin(),
        tokio::io::stdout(),
    )
    .await?;

    info!("ring router stopped");
    Ok(())
}
