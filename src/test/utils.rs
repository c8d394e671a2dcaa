#[cfg(test)]
pub mod test_utils {
    use std::sync::Once;

    use rocket::local::asynchronous::Client;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::{Pool, Sqlite};

    use crate::config::AppConfig;
    use crate::db::{insert_user, run_migrations};
    use crate::init_rocket;
    use crate::mail::Mailer;

    static INIT: Once = Once::new();

    pub fn test_config() -> AppConfig {
        AppConfig {
            mail_api_key: "test-key".to_string(),
            mail_domain: "mail.test".to_string(),
        }
    }

    /// Mailer pointed at an unreachable loopback endpoint: every dispatch is
    /// counted, and the detached send fails fast without leaving the host.
    pub fn test_mailer() -> Mailer {
        Mailer::new(
            "http://127.0.0.1:9/messages".to_string(),
            "mail.test",
            "test-key".to_string(),
        )
    }

    pub async fn setup_test_db() -> Pool<Sqlite> {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("info")
                .with_test_writer()
                .try_init();
        });

        // A single connection keeps every query on the same in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    pub async fn setup_test_client(pool: Pool<Sqlite>) -> Client {
        let rocket = init_rocket(pool, test_config(), test_mailer());
        Client::tracked(rocket)
            .await
            .expect("Failed to build test client")
    }

    pub async fn seed_user(pool: &Pool<Sqlite>, username: &str) {
        insert_user(pool, username)
            .await
            .expect("Failed to seed user");
    }

    pub async fn user_count(pool: &Pool<Sqlite>) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
            .expect("Failed to count users")
    }
}
