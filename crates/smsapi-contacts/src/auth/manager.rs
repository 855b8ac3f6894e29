/*
[INPUT]:  Account credentials (username/password, password hash or OAuth token)
[OUTPUT]: Verified session stored on the shared client
[POS]:    Auth layer - orchestrates the login flow
[UPDATE]: When auth endpoints or flow steps change
*/

use md5::{Digest, Md5};
use reqwest::Method;
use tracing::info;

use crate::http::{ApiStyle, Result, SmsapiClient, SmsapiError};
use crate::types::{AccountInfo, Profile};

use super::{Session, SessionManager};

const LOGIN_ENDPOINT: &str = "user.do";
const PROFILE_ENDPOINT: &str = "profile";

/// MD5 hex digest the API expects in place of a plaintext password
pub fn hash_password(password: &str) -> String {
    hex::encode(Md5::digest(password.as_bytes()))
}

impl SmsapiClient {
    /// Login operations bound to this client's session
    pub fn authentication(&self) -> AuthManager {
        AuthManager::new(self.clone())
    }
}

/// Manages the login flow for a client and every clone of it
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: SmsapiClient,
}

impl AuthManager {
    pub fn new(client: SmsapiClient) -> Self {
        Self { client }
    }

    /// Get the session manager
    pub fn session(&self) -> &SessionManager {
        self.client.session()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_authenticated()
    }

    /// Log in with a plaintext password
    pub async fn login(&self, username: &str, password: &str) -> Result<AccountInfo> {
        self.login_hashed(username, &hash_password(password)).await
    }

    /// Log in with an already hashed password
    ///
    /// POST user.do (credits=1, details=1)
    pub async fn login_hashed(&self, username: &str, password_hash: &str) -> Result<AccountInfo> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SmsapiError::InvalidParams("username is empty".to_string()));
        }
        if password_hash.trim().is_empty() {
            return Err(SmsapiError::InvalidParams("password is empty".to_string()));
        }

        let session = Session::Password {
            username: username.to_string(),
            password_hash: password_hash.trim().to_ascii_lowercase(),
        };

        let params = vec![
            ("credits".to_string(), "1".to_string()),
            ("details".to_string(), "1".to_string()),
            ("format".to_string(), "json".to_string()),
        ];
        let builder = self.client.build_request_with_session(
            &session,
            Method::POST,
            &[LOGIN_ENDPOINT],
            ApiStyle::Legacy,
            params,
        )?;
        let account: AccountInfo = self.client.send_json(builder, ApiStyle::Legacy).await?;

        self.session().set(session);
        info!(username, points = %account.points, "logged in");

        Ok(account)
    }

    /// Log in with an OAuth bearer token
    ///
    /// GET profile
    pub async fn login_oauth(&self, token: &str) -> Result<Profile> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SmsapiError::InvalidParams("token is empty".to_string()));
        }

        let session = Session::OAuth {
            token: token.to_string(),
        };
        let builder = self.client.build_request_with_session(
            &session,
            Method::GET,
            &[PROFILE_ENDPOINT],
            ApiStyle::Rest,
            Vec::new(),
        )?;
        let profile: Profile = self.client.send_json(builder, ApiStyle::Rest).await?;

        self.session().set(session);
        info!(username = %profile.username, "logged in with oauth token");

        Ok(profile)
    }

    /// Drop the stored session
    pub fn logout(&self) {
        if self.is_logged_in() {
            info!("logged out");
        }
        self.session().clear();
    }
}
