/*
[INPUT]:  Sub-user names, passwords and limits
[OUTPUT]: Sub-user accounts
[POS]:    HTTP layer - legacy user.do sub-user endpoints (require login)
[UPDATE]: When sub-user attributes change
*/

use rust_decimal::Decimal;
use serde::Serialize;

use crate::auth::hash_password;
use crate::http::{Action, Result, SmsapiClient};
use crate::types::User;

const USERS: &str = "user.do";

impl SmsapiClient {
    /// Sub-user operations on the legacy `user.do` endpoint
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }
}

/// Entry point for sub-user actions
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a SmsapiClient,
}

impl<'a> Users<'a> {
    pub fn add(&self) -> UserAdd<'a> {
        UserAdd {
            action: Action::legacy(self.client, USERS),
        }
    }

    pub fn get(&self, username: &str) -> UserGet<'a> {
        UserGet {
            action: Action::legacy(self.client, USERS).param("get_user", username),
        }
    }

    pub fn list(&self) -> UserList<'a> {
        UserList {
            action: Action::legacy(self.client, USERS).param("list", 1),
        }
    }
}

/// Sub-user creation
#[derive(Debug, Clone)]
pub struct UserAdd<'a> {
    action: Action<'a>,
}

impl<'a> UserAdd<'a> {
    /// Login of the new sub-user, without the owner prefix
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.action.set_param("add_user", name.into());
        self
    }

    /// Plaintext panel password; sent as its MD5 digest
    pub fn pass(mut self, password: &str) -> Self {
        self.action.set_param("pass", hash_password(password));
        self
    }

    /// Plaintext API password; sent as its MD5 digest
    pub fn pass_api(mut self, password: &str) -> Self {
        self.action.set_param("pass_api", hash_password(password));
        self
    }

    /// Points limit
    pub fn limit(mut self, limit: Decimal) -> Self {
        self.action.set_param("limit", limit.to_string());
        self
    }

    /// Points renewed at the start of every month
    pub fn month_limit(mut self, limit: Decimal) -> Self {
        self.action.set_param("month_limit", limit.to_string());
        self
    }

    /// Allow the sub-user to use the owner's sender names
    pub fn senders(mut self, shared: bool) -> Self {
        self.action.set_param("senders", shared);
        self
    }

    /// Allow the sub-user to use the owner's phonebook
    pub fn phonebook(mut self, shared: bool) -> Self {
        self.action.set_param("phonebook", shared);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.action.set_param("active", active);
        self
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.action.set_param("info", info.into());
        self
    }

    pub fn get_name(&self) -> Option<&str> {
        self.action.get_str("add_user")
    }

    pub fn params<S: Serialize + ?Sized>(self, params: &S) -> Result<Self> {
        Ok(Self {
            action: self.action.params(params)?,
        })
    }

    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<User> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct UserGet<'a> {
    action: Action<'a>,
}

impl<'a> UserGet<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<User> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct UserList<'a> {
    action: Action<'a>,
}

impl<'a> UserList<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Vec<User>> {
        self.action.execute_json().await
    }
}
