use guestbook::config::{AppConfig, load_environment};
use guestbook::db::run_migrations;
use guestbook::init_rocket;
use guestbook::mail::Mailer;
use guestbook::telemetry::init_tracing;
use rocket::{Build, Rocket};
use sqlx::SqlitePool;
use tracing::{error, info};

#[rocket::launch]
async fn rocket() -> Rocket<Build> {
    init_tracing();

    if let Err(e) = load_environment() {
        error!("Failed to load environment files: {}", e);
    }

    let config = AppConfig::from_env();
    let mailer = Mailer::from_config(&config);

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:data.sqlite?mode=rwc".to_string());

    let pool = SqlitePool::connect(&database_url)
        .await
        .expect("Failed to connect to SQLite database");

    info!("Running database migrations...");
    match run_migrations(&pool).await {
        Ok(_) => info!("Migrations completed successfully"),
        Err(e) => {
            error!("Failed to run migrations: {}", e);
            panic!("Database migration failed: {}", e);
        }
    }

    init_rocket(pool, config, mailer)
}
