use std::{sync::OnceLock, time::Duration};

use secrecy::SecretString;
use serde::Deserialize;
use types::{Result, err};

static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(with = "secret_string")]
    pub session_secret: SecretString,
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u64,
    /// Mount `/auth/demo-login`, which signs anyone in with the role they ask for.
    #[serde(default)]
    pub demo_login: bool,
}

fn default_session_ttl_hours() -> u64 {
    12
}

/// One year.
const MAX_SESSION_TTL_HOURS: u64 = 24 * 365;

impl Config {
    /// Read `recruitops.toml` (optional) overlaid with `RECRUITOPS_*` variables.
    pub fn load() -> Result<Self> {
        ::config::Config::builder()
            .add_source(::config::File::with_name("recruitops").required(false))
            .add_source(::config::Environment::with_prefix("RECRUITOPS"))
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| err!("failed to load configuration: {e}"))?
            .validate()
    }

    fn validate(self) -> Result<Self> {
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&self.session_ttl_hours) {
            return Err(err!(
                "session_ttl_hours must be between 1 and {MAX_SESSION_TTL_HOURS}, got {}",
                self.session_ttl_hours
            ));
        }
        Ok(self)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_hours * 3600)
    }
}

/// Load the configuration once; later calls return the first result.
pub(crate) fn init() -> Result<&'static Config> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }

    let config = Config::load()?;
    Ok(CONFIG.get_or_init(|| config))
}

pub fn config() -> Result<&'static Config> {
    CONFIG.get().ok_or_else(|| err!("configuration not loaded"))
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}
