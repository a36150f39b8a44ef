use std::net::SocketAddr;

use employees_api::api;
use employees_api::config::AppConfig;
use employees_api::infrastructure::db;
use employees_api::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = db::connect(&config)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected successfully");

    // Apply schema and seed the admin credential
    db::init_schema(&pool).await.expect("Failed to apply schema");
    db::seed_admin(&pool, &config)
        .await
        .expect("Failed to seed admin user");

    if !config.auth_required {
        tracing::warn!("AUTH_REQUIRED is off, employee routes accept unauthenticated requests");
    }

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .expect("Invalid BIND_ADDR");

    let state = AppState::new(pool, config);
    let app = api::router(state);

    // Start server
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
