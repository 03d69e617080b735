use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Role;

pub const SESSION_COOKIE_NAME: &str = "recruitops_session";

/// The signed-in user, as handed to the dashboard by the session layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

/// What the session cookie carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user: User,
    pub expires_at: Timestamp,
}

impl UserSession {
    pub fn is_expired(&self) -> bool {
        Timestamp::now() >= self.expires_at
    }
}
