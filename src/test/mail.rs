#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::mail::Mailer;
    use crate::test::utils::test_utils::test_mailer;

    #[test]
    fn messages_url_is_built_from_domain() {
        let config = AppConfig {
            mail_api_key: "key".to_string(),
            mail_domain: "mg.example.com".to_string(),
        };

        let mailer = Mailer::from_config(&config);
        assert_eq!(
            mailer.messages_url(),
            "https://api.mailgun.net/v3/mg.example.com/messages"
        );
    }

    #[rocket::async_test]
    async fn dispatch_counts_attempts_and_never_blocks() {
        let mailer = test_mailer();
        assert_eq!(mailer.attempts(), 0);

        // The endpoint is unreachable; dispatch still returns immediately
        // and each attempt is counted.
        mailer.dispatch_registration("alice");
        mailer.dispatch_registration("bob");

        assert_eq!(mailer.attempts(), 2);
    }
}
