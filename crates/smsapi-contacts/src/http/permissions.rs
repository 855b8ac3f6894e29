/*
[INPUT]:  Group id, grantee username and permission flags
[OUTPUT]: Group permission grants
[POS]:    HTTP layer - group permission endpoints (require login)
[UPDATE]: When permission flags change
*/

use reqwest::Method;
use serde::Serialize;

use crate::http::contacts::CONTACTS;
use crate::http::groups::GROUPS;
use crate::http::{Action, Result, SmsapiClient};
use crate::types::{Collection, Permission, PermissionFlags};

const PERMISSIONS: &str = "permissions";

/// Entry point for group permission actions
#[derive(Debug, Clone, Copy)]
pub struct Permissions<'a> {
    client: &'a SmsapiClient,
}

impl<'a> Permissions<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    /// GET /contacts/groups/{group_id}/permissions
    pub fn list(&self, group_id: &str) -> PermissionList<'a> {
        PermissionList {
            action: Action::rest(
                self.client,
                Method::GET,
                [CONTACTS, GROUPS, group_id, PERMISSIONS],
            ),
        }
    }

    /// GET /contacts/groups/{group_id}/permissions/{username}
    pub fn get(&self, group_id: &str, username: &str) -> PermissionGet<'a> {
        PermissionGet {
            action: Action::rest(
                self.client,
                Method::GET,
                [CONTACTS, GROUPS, group_id, PERMISSIONS, username],
            ),
        }
    }

    /// POST /contacts/groups/{group_id}/permissions
    pub fn add(&self, group_id: &str, username: &str) -> PermissionEdit<'a> {
        let mut action = Action::rest(
            self.client,
            Method::POST,
            [CONTACTS, GROUPS, group_id, PERMISSIONS],
        );
        action.set_param("username", username);
        PermissionEdit { action }
    }

    /// PUT /contacts/groups/{group_id}/permissions/{username}
    pub fn update(&self, group_id: &str, username: &str) -> PermissionEdit<'a> {
        PermissionEdit {
            action: Action::rest(
                self.client,
                Method::PUT,
                [CONTACTS, GROUPS, group_id, PERMISSIONS, username],
            ),
        }
    }

    /// DELETE /contacts/groups/{group_id}/permissions/{username}
    pub fn delete(&self, group_id: &str, username: &str) -> PermissionDelete<'a> {
        PermissionDelete {
            action: Action::rest(
                self.client,
                Method::DELETE,
                [CONTACTS, GROUPS, group_id, PERMISSIONS, username],
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PermissionList<'a> {
    action: Action<'a>,
}

impl<'a> PermissionList<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Collection<Permission>> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct PermissionGet<'a> {
    action: Action<'a>,
}

impl<'a> PermissionGet<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Permission> {
        self.action.execute_json().await
    }
}

/// Grant or change a user's permission on a group
#[derive(Debug, Clone)]
pub struct PermissionEdit<'a> {
    action: Action<'a>,
}

impl<'a> PermissionEdit<'a> {
    pub fn read(mut self, read: bool) -> Self {
        self.action.set_param("read", read);
        self
    }

    pub fn write(mut self, write: bool) -> Self {
        self.action.set_param("write", write);
        self
    }

    pub fn send(mut self, send: bool) -> Self {
        self.action.set_param("send", send);
        self
    }

    /// Apply every flag that is set
    pub fn flags(mut self, flags: PermissionFlags) -> Self {
        for (key, value) in [("read", flags.read), ("write", flags.write), ("send", flags.send)] {
            if let Some(value) = value {
                self.action.set_param(key, value);
            }
        }
        self
    }

    pub fn params<S: Serialize + ?Sized>(self, params: &S) -> Result<Self> {
        Ok(Self {
            action: self.action.params(params)?,
        })
    }

    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Permission> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct PermissionDelete<'a> {
    action: Action<'a>,
}

impl<'a> PermissionDelete<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<()> {
        self.action.execute_empty().await
    }
}
