mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, error::AppError, service::sorting::allocator::normalize_bag_size,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Arc::new(Config::from_env()?);
    normalize_bag_size(config.sorting_bag_size)?;

    let db = startup::connect_to_database(&config).await?;
    let self_roles = startup::load_self_roles(&config)?;

    tracing::info!("Starting HOV Assistant");

    bot::start::start_bot(config, db, self_roles).await
}
