/*
[INPUT]:  Group attributes and filters
[OUTPUT]: Contact group records and listings
[POS]:    HTTP layer - contact group endpoints (require login)
[UPDATE]: When adding group attributes or sub-resources
*/

use reqwest::Method;
use serde::Serialize;

use crate::http::assignments::Assignments;
use crate::http::contacts::CONTACTS;
use crate::http::members::Members;
use crate::http::permissions::Permissions;
use crate::http::{Action, Result, SmsapiClient};
use crate::types::{Collection, Group};

pub(crate) const GROUPS: &str = "groups";

/// Entry point for contact group actions
#[derive(Debug, Clone, Copy)]
pub struct Groups<'a> {
    client: &'a SmsapiClient,
}

impl<'a> Groups<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    /// GET /contacts/groups
    pub fn list(&self) -> GroupList<'a> {
        GroupList {
            action: Action::rest(self.client, Method::GET, [CONTACTS, GROUPS]),
        }
    }

    /// GET /contacts/groups/{id}
    pub fn get(&self, id: &str) -> GroupGet<'a> {
        GroupGet {
            action: Action::rest(self.client, Method::GET, [CONTACTS, GROUPS, id]),
        }
    }

    /// POST /contacts/groups
    pub fn add(&self) -> GroupEdit<'a> {
        GroupEdit {
            action: Action::rest(self.client, Method::POST, [CONTACTS, GROUPS]),
        }
    }

    /// PUT /contacts/groups/{id}
    pub fn update(&self, id: &str) -> GroupEdit<'a> {
        GroupEdit {
            action: Action::rest(self.client, Method::PUT, [CONTACTS, GROUPS, id]),
        }
    }

    /// DELETE /contacts/groups/{id}
    pub fn delete(&self, id: &str) -> GroupDelete<'a> {
        GroupDelete {
            action: Action::rest(self.client, Method::DELETE, [CONTACTS, GROUPS, id]),
        }
    }

    /// Per-user access grants on groups
    pub fn permissions(&self) -> Permissions<'a> {
        Permissions::new(self.client)
    }

    /// Group-side view of membership
    pub fn members(&self) -> Members<'a> {
        Members::new(self.client)
    }

    /// Contact-side view of membership
    pub fn assignments(&self) -> Assignments<'a> {
        Assignments::new(self.client)
    }
}

#[derive(Debug, Clone)]
pub struct GroupList<'a> {
    action: Action<'a>,
}

impl<'a> GroupList<'a> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.action.set_param("id", id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.action.set_param("name", name.into());
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

    pub async fn execute(self) -> Result<Collection<Group>> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct GroupGet<'a> {
    action: Action<'a>,
}

impl<'a> GroupGet<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Group> {
        self.action.execute_json().await
    }
}

/// Group creation or update
#[derive(Debug, Clone)]
pub struct GroupEdit<'a> {
    action: Action<'a>,
}

impl<'a> GroupEdit<'a> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.action.set_param("name", name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.action.set_param("description", description.into());
        self
    }

    /// Caller-defined external identifier
    pub fn idx(mut self, idx: impl Into<String>) -> Self {
        self.action.set_param("idx", idx.into());
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

    pub async fn execute(self) -> Result<Group> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct GroupDelete<'a> {
    action: Action<'a>,
}

impl<'a> GroupDelete<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<()> {
        self.action.execute_empty().await
    }
}
