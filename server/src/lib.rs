mod auth_routes;
mod config;
mod session;

use axum::Router;
use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use tracing_subscriber::EnvFilter;
use types::{Result, SESSION_COOKIE_NAME, UserSession, err};

use crate::auth_routes::{AuthState, auth_router};
pub use crate::config::{Config, config};
pub use crate::session::SessionSigner;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // The dev server may have installed a subscriber already.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn init() -> Result<Router> {
    let config = config::init()?;
    tracing::info!(
        session_ttl_hours = config.session_ttl_hours,
        demo_login = config.demo_login,
        "configuration loaded"
    );

    Ok(auth_router(AuthState::new(config), config.demo_login))
}

/// Extract the user session from the request cookie.
pub async fn get_session_from_cookie() -> Result<UserSession> {
    let headers: HeaderMap = FullstackContext::extract()
        .await
        .map_err(|e| err!("failed to read request headers: {e}"))?;

    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| err!("no cookies in request"))?;

    let token = session_token(cookie_header).ok_or_else(|| err!("session cookie not found"))?;

    SessionSigner::new(config()?.session_secret.clone()).decode(token)
}

fn session_token(cookie_header: &str) -> Option<&str> {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(SESSION_COOKIE_NAME)?.strip_prefix('='))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_session_among_other_cookies() {
        let header = "theme=dark; recruitops_session=abc.def; other=1";
        assert_eq!(session_token(header), Some("abc.def"));
    }

    #[test]
    fn similarly_named_cookie_is_ignored() {
        assert_eq!(session_token("recruitops_session_old=zzz"), None);
        assert_eq!(session_token(""), None);
    }
}
