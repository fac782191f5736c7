use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    error::AppError,
    model::queue::QueuePolicy,
    router::{self, ApiDoc},
    service::queue::PairingQueue,
    state::AppState,
    util::jwt::JwtService,
};

/// Initializes the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared application state.
///
/// # Arguments
/// - `config` - Supplies the JWT secret and queue policy
/// - `db` - Connected database
///
/// # Returns
/// - `AppState` - State with an empty pairing queue
pub fn build_state(config: &Config, db: sea_orm::DatabaseConnection) -> AppState {
    let policy = QueuePolicy {
        capacity: config.queue_capacity,
        allow_duplicates: config.queue_allow_duplicates,
    };

    AppState::new(db, JwtService::new(&config.jwt_secret), PairingQueue::new(policy))
}

/// Builds the served application: routes, OpenAPI docs and middleware layers.
///
/// Rate limiting is keyed by peer IP, so the app must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Returns
/// - `Ok(Router)` - Ready-to-serve router
/// - `Err(AppError::InternalError)` - Invalid rate limit configuration
pub fn build_app(config: &Config, state: AppState) -> Result<Router, AppError> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_per_second)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    Ok(router::router()
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(GovernorLayer::new(Arc::new(governor_conf)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}

/// Binds the configured address and serves until the process exits.
pub async fn serve(config: &Config, app: Router) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_addr, e)))?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}
