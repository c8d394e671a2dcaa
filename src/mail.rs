use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;

const RECIPIENTS: [&str; 3] = [
    "guestbook-admin@zohomail.com",
    "notifications@guestbook.app",
    "owner@guestbook.app",
];

const SUBJECT: &str = "New user registered!";

/// Client for the transactional mail relay. Sends are dispatched on a
/// detached task: the request handler never waits on the relay, and the
/// outcome is logged instead of surfaced to the visitor.
pub struct Mailer {
    http: reqwest::Client,
    messages_url: String,
    sender: String,
    api_key: String,
    attempts: AtomicUsize,
}

impl Mailer {
    pub fn new(messages_url: String, domain: &str, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            messages_url,
            sender: format!("Guestbook <mailgun@{}>", domain),
            api_key,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let messages_url = format!(
            "https://api.mailgun.net/v3/{}/messages",
            config.mail_domain
        );
        Self::new(messages_url, &config.mail_domain, config.mail_api_key.clone())
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    /// Number of sends attempted since construction, regardless of outcome.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Fires the "new user registered" mail for `username` without blocking
    /// the caller. Fires on both first-time and returning submissions.
    pub fn dispatch_registration(&self, username: &str) {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let text = format!("A new user has registered: {}", username);
        let request = self
            .http
            .post(&self.messages_url)
            .basic_auth("api", Some(self.api_key.clone()))
            .form(&[
                ("from", self.sender.as_str()),
                ("to", RECIPIENTS[0]),
                ("to", RECIPIENTS[1]),
                ("to", RECIPIENTS[2]),
                ("subject", SUBJECT),
                ("text", text.as_str()),
            ]);

        let username = username.to_owned();
        tokio::spawn(async move {
            match request.send().await {
                Ok(response) if response.status().is_success() => {
                    info!(username = %username, "Registration notification accepted by mail relay");
                }
                Ok(response) => {
                    AppError::Notification(format!("mail relay returned {}", response.status()))
                        .log_and_record("registration notification");
                }
                Err(e) => {
                    AppError::from(e).log_and_record("registration notification");
                }
            }
        });
    }
}
