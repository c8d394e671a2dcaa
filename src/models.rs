use serde::Serialize;

/// A registered visitor. Rows are created once per distinct username and
/// never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role_id: Option<i64>,
}

/// Roles exist in the schema with a one-to-many link to users, but nothing
/// in the request flow assigns or creates them.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Role {
    pub id: i64,
    pub name: String,
}
