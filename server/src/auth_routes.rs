use std::time::Duration;

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use cookie::Cookie;
use serde::Deserialize;
use std::sync::Arc;
use types::{Role, SESSION_COOKIE_NAME, User};
use uuid::Uuid;

use crate::{config::Config, session::SessionSigner};

#[derive(Clone)]
pub struct AuthState {
    signer: Arc<SessionSigner>,
    session_ttl: Duration,
}

impl AuthState {
    pub fn new(config: &Config) -> Self {
        Self {
            signer: Arc::new(SessionSigner::new(config.session_secret.clone())),
            session_ttl: config.session_ttl(),
        }
    }
}

pub fn auth_router(state: AuthState, demo_login: bool) -> Router {
    let router = Router::new().route("/auth/logout", get(logout));

    let router = if demo_login {
        tracing::warn!("demo login is enabled, anyone can sign in with any role");
        router.route("/auth/demo-login", get(demo_login_handler))
    } else {
        router
    };

    router.with_state(state)
}

#[derive(Deserialize)]
struct DemoLogin {
    #[serde(default)]
    role: Option<String>,
}

fn demo_user(role: Role) -> User {
    let name = format!("Demo {}", role.label());
    let email = format!("{}@demo.recruitops.local", role.as_str());

    User {
        id: Uuid::now_v7(),
        name,
        email,
        role,
    }
}

async fn demo_login_handler(
    State(state): State<AuthState>,
    Query(params): Query<DemoLogin>,
) -> Response {
    let role = Role::from(params.role);
    let user = demo_user(role);
    tracing::info!(user_id = %user.id, role = %user.role, "demo sign-in");

    let token = match state.signer.issue(user, state.session_ttl) {
        Ok(token) => token,
        Err(error) => {
            tracing::error!(%error, "failed to issue session");
            return (StatusCode::INTERNAL_SERVER_ERROR, "failed to issue session").into_response();
        }
    };

    let cookie = Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .build();

    with_cookie(Redirect::to("/dashboard"), cookie)
}

async fn logout() -> Response {
    tracing::info!("sign-out");

    // Clear the session cookie
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    with_cookie(Redirect::to("/login"), cookie)
}

fn with_cookie(redirect: Redirect, cookie: Cookie<'_>) -> Response {
    let mut response = redirect.into_response();
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(error) => tracing::error!(%error, "session cookie is not a valid header value"),
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_user_carries_the_role() {
        let user = demo_user(Role::from_tag("talent_manager"));

        assert_eq!(user.role, Role::TalentManager);
        assert_eq!(user.name, "Demo Talent Manager");
        assert_eq!(user.email, "talent_manager@demo.recruitops.local");
    }

    #[test]
    fn missing_role_signs_in_a_candidate() {
        assert_eq!(demo_user(Role::from(None)).role, Role::Candidate);
    }
}
