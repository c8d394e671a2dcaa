use std::path::Path;

use tracing::{info, warn};

/// Process configuration for the outbound mail relay. Missing values are
/// not a startup error: sends proceed and fail at the relay instead.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mail_api_key: String,
    pub mail_domain: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mail_api_key = std::env::var("API_KEY").unwrap_or_default();
        let mail_domain = std::env::var("DOMAIN").unwrap_or_default();

        if mail_api_key.is_empty() || mail_domain.is_empty() {
            warn!("API_KEY or DOMAIN is not set; registration mail will not reach the relay");
        }

        Self {
            mail_api_key,
            mail_domain,
        }
    }
}

pub fn load_environment() -> anyhow::Result<()> {
    let is_production =
        dotenvy::var("ROCKET_PROFILE").unwrap_or("development".to_string()) == "production";

    let env_files = if is_production {
        vec!["config/common.env", "config/prod.env", ".secrets.env"]
    } else {
        vec!["config/common.env", "config/dev.env", ".secrets.env"]
    };

    for env_file in env_files {
        load_env_file(env_file)?;
    }

    Ok(())
}

fn load_env_file(path: &str) -> anyhow::Result<()> {
    if !Path::new(path).exists() {
        warn!("Environment file {} not found, skipping", path);
        return Ok(());
    }

    dotenvy::from_filename_override(path)?;
    info!("Loaded environment from: {}", path);
    Ok(())
}
