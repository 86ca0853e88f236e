mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        return Err(e);
    }

    Ok(())
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let configs = startup::load_reaction_config(&config.reaction_config_path)?;
    tracing::info!(
        "Loaded {} tracked messages from {}",
        configs.len(),
        config.reaction_config_path.display()
    );

    let client = bot::start::init_bot(&config, configs).await?;

    bot::start::start_bot(client).await
}
