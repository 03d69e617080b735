use std::time::Duration;

use anyhow::Context;
use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use types::{Result, User, UserSession, err};

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies session cookies: `<base64url json>.<base64url hmac>`.
pub struct SessionSigner {
    secret: SecretString,
}

impl SessionSigner {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| err!("invalid session secret"))
    }

    pub fn issue(&self, user: User, ttl: Duration) -> Result<String> {
        let expires_at = Timestamp::now()
            .checked_add(ttl)
            .context("session lifetime out of range")?;
        let session = UserSession { user, expires_at };
        self.encode(&session)
    }

    pub fn encode(&self, session: &UserSession) -> Result<String> {
        let json = serde_json::to_string(session).context("failed to serialize session")?;
        let payload = BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes());

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", payload, signature))
    }

    pub fn decode(&self, token: &str) -> Result<UserSession> {
        let (payload, signature_b64) = token
            .split_once('.')
            .ok_or_else(|| err!("invalid token format"))?;

        let signature = BASE64_URL_SAFE_NO_PAD
            .decode(signature_b64)
            .context("failed to decode signature")?;
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| err!("session signature mismatch"))?;

        let bytes = BASE64_URL_SAFE_NO_PAD
            .decode(payload)
            .context("failed to decode base64")?;
        let json = String::from_utf8(bytes).context("invalid UTF-8 in session")?;
        let session: UserSession =
            serde_json::from_str(&json).context("failed to parse session JSON")?;

        if session.is_expired() {
            return Err(err!("session expired at {}", session.expires_at));
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::Role;
    use uuid::Uuid;

    fn signer(secret: &str) -> SessionSigner {
        SessionSigner::new(secret.to_string().into())
    }

    fn user() -> User {
        User {
            id: Uuid::nil(),
            name: "Sarah Recruiter".into(),
            email: "sarah@recruitops.com".into(),
            role: Role::TalentManager,
        }
    }

    #[test]
    fn issued_token_verifies() {
        let signer = signer("s3cret");
        let token = signer.issue(user(), Duration::from_secs(3600)).unwrap();

        let session = signer.decode(&token).unwrap();
        assert_eq!(session.user, user());
    }

    #[test]
    fn other_secret_is_rejected() {
        let token = signer("one").issue(user(), Duration::from_secs(3600)).unwrap();
        assert!(signer("two").decode(&token).is_err());
    }

    #[test]
    fn edited_payload_is_rejected() {
        let signer = signer("s3cret");
        let token = signer.issue(user(), Duration::from_secs(3600)).unwrap();
        let (_, signature) = token.split_once('.').unwrap();

        let mut admin = user();
        admin.role = Role::Admin;
        let forged_json = serde_json::to_string(&UserSession {
            user: admin,
            expires_at: Timestamp::now() + Duration::from_secs(3600),
        })
        .unwrap();
        let forged = format!(
            "{}.{}",
            BASE64_URL_SAFE_NO_PAD.encode(forged_json.as_bytes()),
            signature
        );

        assert!(signer.decode(&forged).is_err());
    }

    #[test]
    fn expired_session_is_rejected() {
        let signer = signer("s3cret");
        let token = signer
            .encode(&UserSession {
                user: user(),
                expires_at: Timestamp::UNIX_EPOCH,
            })
            .unwrap();

        let error = signer.decode(&token).unwrap_err();
        assert!(error.message.contains("expired"), "{error}");
    }

    #[test]
    fn lifetime_past_the_calendar_is_an_error() {
        let error = signer("s3cret").issue(user(), Duration::MAX).unwrap_err();
        assert!(error.message.contains("out of range"), "{error}");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(signer("s3cret").decode("not-a-token").is_err());
        assert!(signer("s3cret").decode("a.b.c").is_err());
    }
}
