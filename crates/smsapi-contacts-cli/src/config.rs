/*
[INPUT]:  YAML configuration file and command line overrides
[OUTPUT]: Server settings and credentials for the CLI
[POS]:    Configuration layer - connection setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use smsapi_contacts::ClientConfig;

/// Top-level CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// API base URL; the client default when absent
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Plaintext password, hashed before it is sent
    #[serde(default)]
    pub password: Option<String>,
    /// MD5 hex digest of the password
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub oauth_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub oauth_token: Option<String>,
}

/// How the CLI logs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Password { username: String, password: String },
    PasswordHash { username: String, password_hash: String },
    OAuth { token: String },
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server: None,
            username: None,
            password: None,
            password_hash: None,
            oauth_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("read config file {path}"))?;
        let config: Self =
            serde_yaml::from_str(&content).with_context(|| format!("parse config file {path}"))?;
        Ok(config)
    }

    /// Command line and environment values win over the file
    pub fn apply(&mut self, overrides: Overrides) {
        if overrides.server.is_some() {
            self.server = overrides.server;
        }
        if overrides.username.is_some() {
            self.username = overrides.username;
        }
        if overrides.password.is_some() {
            self.password = overrides.password;
            self.password_hash = None;
        }
        if overrides.oauth_token.is_some() {
            self.oauth_token = overrides.oauth_token;
        }
    }

    /// Pick the credentials to log in with; an OAuth token takes precedence
    pub fn credentials(&self) -> Result<Credentials> {
        if let Some(token) = non_blank(&self.oauth_token) {
            return Ok(Credentials::OAuth {
                token: token.to_string(),
            });
        }

        let Some(username) = non_blank(&self.username) else {
            bail!("no credentials configured: set oauth_token or username with password");
        };
        if let Some(password) = non_blank(&self.password) {
            return Ok(Credentials::Password {
                username: username.to_string(),
                password: password.to_string(),
            });
        }
        if let Some(hash) = non_blank(&self.password_hash) {
            return Ok(Credentials::PasswordHash {
                username: username.to_string(),
                password_hash: hash.to_string(),
            });
        }
        bail!("username {username} has no password or password_hash configured")
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        let mut config = match non_blank(&self.server) {
            Some(server) => ClientConfig::with_server(server),
            None => ClientConfig::default(),
        };
        config.timeout = Duration::from_secs(self.timeout_secs);
        Ok(config)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
