#[macro_use]
extern crate rocket;

pub mod config;
pub mod db;
pub mod error;
pub mod mail;
pub mod models;
pub mod routes;
pub mod session;
pub mod telemetry;
#[cfg(test)]
mod test;

use config::AppConfig;
use mail::Mailer;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;
use sqlx::SqlitePool;
use telemetry::RequestTimer;
use tracing::info;

pub fn init_rocket(pool: SqlitePool, config: AppConfig, mailer: Mailer) -> Rocket<Build> {
    info!("Starting guestbook");

    rocket::build()
        .manage(pool)
        .manage(config)
        .manage(mailer)
        .mount("/", routes![routes::index, routes::submit])
        .register("/", catchers![routes::not_found, routes::internal_error])
        .attach(Template::fairing())
        .attach(RequestTimer)
}
