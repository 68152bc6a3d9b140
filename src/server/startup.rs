use crate::server::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions are stored in SQLite through the same pool SeaORM uses. The session
/// table is created on startup if missing. Sessions expire after seven days of
/// inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool also stores sessions
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<tower_sessions::SessionManagerLayer<tower_sessions_sqlx_store::SqliteStore>, AppError> {
    use time::Duration;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::SqliteStore;

    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Creates the HTTP client used for outbound e-mail API calls.
///
/// Redirects are disabled so a misconfigured provider URL cannot bounce
/// requests to arbitrary hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Builds the event bus and registers the notification listener.
///
/// # Arguments
/// - `config` - Application configuration with the optional e-mail settings
/// - `db` - Database connection the listener writes notifications with
/// - `http_client` - Client the mailer sends requests with
///
/// # Returns
/// - `EventBus` - Bus ready to be shared through `AppState`
pub fn setup_event_bus(
    config: &Config,
    db: &sea_orm::DatabaseConnection,
    http_client: reqwest::Client,
) -> crate::server::service::event::EventBus {
    use crate::server::service::{
        event::EventBus, mailer::Mailer, notification::NotificationListener,
    };

    let mailer = Mailer::new(http_client, config.email.clone());
    if !mailer.is_enabled() {
        tracing::debug!("EMAIL_API_URL or EMAIL_API_KEY not set, e-mail delivery disabled");
    }

    let mut events = EventBus::new();
    events.register(Box::new(NotificationListener::new(
        db.clone(),
        mailer,
        config.app_url.clone(),
    )));

    events
}

/// CORS policy allowing the frontend at `APP_URL` to call the API with cookies.
pub fn setup_cors(config: &Config) -> Result<tower_http::cors::CorsLayer, AppError> {
    use axum::http::{header, HeaderValue, Method};
    use tower_http::cors::CorsLayer;

    let origin = config
        .app_url
        .trim_end_matches('/')
        .parse::<HeaderValue>()
        .map_err(|e| crate::server::error::config::ConfigError::InvalidValue {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
