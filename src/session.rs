use rand::Rng;
use rand::distr::Alphanumeric;
use rocket::http::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

pub const VISIT_COOKIE: &str = "visit";
pub const CSRF_COOKIE: &str = "csrf_token";

const CSRF_TOKEN_LEN: usize = 32;

/// Per-browser session state, serialized as JSON into a private cookie.
/// Both fields are overwritten on every successful form submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Visit {
    pub known: bool,
    pub name: Option<String>,
}

pub fn current(cookies: &CookieJar<'_>) -> Visit {
    cookies
        .get_private(VISIT_COOKIE)
        .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
        .unwrap_or_default()
}

pub fn remember(cookies: &CookieJar<'_>, name: &str, known: bool) {
    let visit = Visit {
        known,
        name: Some(name.to_string()),
    };

    let value = serde_json::to_string(&visit).unwrap_or_default();
    let cookie = Cookie::build((VISIT_COOKIE, value))
        .same_site(SameSite::Lax)
        .http_only(true);

    cookies.add_private(cookie);
}

/// Returns the session's anti-forgery token, minting one into a private
/// cookie on first use. The form embeds the same value in a hidden field.
pub fn issue_csrf_token(cookies: &CookieJar<'_>) -> String {
    if let Some(cookie) = cookies.get_private(CSRF_COOKIE) {
        return cookie.value().to_string();
    }

    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_TOKEN_LEN)
        .map(char::from)
        .collect();

    let cookie = Cookie::build((CSRF_COOKIE, token.clone()))
        .same_site(SameSite::Lax)
        .http_only(true);
    cookies.add_private(cookie);

    token
}

pub fn verify_csrf_token(cookies: &CookieJar<'_>, submitted: &str) -> bool {
    if submitted.is_empty() {
        return false;
    }

    cookies
        .get_private(CSRF_COOKIE)
        .map(|cookie| cookie.value() == submitted)
        .unwrap_or(false)
}
