use bookmarks_api::api;
use bookmarks_api::config::Config;
use bookmarks_api::infrastructure::database;
use bookmarks_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration (.env + environment)
    let config = Config::from_env()?;

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = database::connect(&config).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("Database connected and migrated");

    let app = api::router(AppState::postgres(pool, config.jwt.clone()));

    // Start server
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
