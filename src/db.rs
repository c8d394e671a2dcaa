use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::{Role, User};

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[instrument(skip(pool))]
pub async fn find_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, AppError> {
    info!("Looking up user by username");
    let row = sqlx::query_as::<_, User>(
        "SELECT id, username, role_id FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Inserts a new user row. Uniqueness of `username` is enforced by the
/// storage-layer unique index; a concurrent duplicate insert surfaces here
/// as a database error.
#[instrument(skip(pool))]
pub async fn insert_user(pool: &SqlitePool, username: &str) -> Result<User, AppError> {
    info!("Inserting new user");
    let row = sqlx::query_as::<_, User>(
        "INSERT INTO users (username) VALUES (?) RETURNING id, username, role_id",
    )
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// All user rows in insertion order. No ordering is promised to callers.
#[instrument(skip(pool))]
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
    let rows = sqlx::query_as::<_, User>("SELECT id, username, role_id FROM users")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

#[instrument(skip(pool))]
pub async fn create_role(pool: &SqlitePool, name: &str) -> Result<Role, AppError> {
    info!("Creating role");
    let row = sqlx::query_as::<_, Role>("INSERT INTO roles (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok(row)
}

#[instrument(skip(pool))]
pub async fn find_role_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Role>, AppError> {
    let row = sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}
