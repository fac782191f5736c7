mod model;
mod server;

use crate::server::{config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = startup::build_state(&config, db);
    let app = startup::build_app(&config, state)?;

    tracing::info!("Starting server");

    startup::serve(&config, app).await
}
