use dioxus::prelude::*;
use types::User;

/// The signed-in user, or `None` when there is no valid session cookie.
#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<User>> {
    match server::get_session_from_cookie().await {
        Ok(session) => Ok(Some(session.user)),
        Err(error) => {
            tracing::debug!(%error, "no usable session");
            Ok(None)
        }
    }
}
