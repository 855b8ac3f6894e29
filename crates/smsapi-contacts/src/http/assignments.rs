/*
[INPUT]:  Contact id and group id
[OUTPUT]: Groups a contact belongs to, assignment changes
[POS]:    HTTP layer - contact group assignment endpoints (require login)
[UPDATE]: When assignment endpoints change
*/

use reqwest::Method;

use crate::http::contacts::CONTACTS;
use crate::http::groups::GROUPS;
use crate::http::{Action, Result, SmsapiClient};
use crate::types::{Collection, Group};

/// Contact-side membership: which groups a contact is assigned to
#[derive(Debug, Clone, Copy)]
pub struct Assignments<'a> {
    client: &'a SmsapiClient,
}

impl<'a> Assignments<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    /// GET /contacts/{contact_id}/groups
    pub fn list(&self, contact_id: &str) -> AssignmentList<'a> {
        AssignmentList {
            action: Action::rest(self.client, Method::GET, [CONTACTS, contact_id, GROUPS]),
        }
    }

    /// GET /contacts/{contact_id}/groups/{group_id}
    pub fn get(&self, contact_id: &str, group_id: &str) -> AssignmentGet<'a> {
        AssignmentGet {
            action: Action::rest(
                self.client,
                Method::GET,
                [CONTACTS, contact_id, GROUPS, group_id],
            ),
        }
    }

    /// PUT /contacts/{contact_id}/groups/{group_id}
    pub fn add(&self, contact_id: &str, group_id: &str) -> AssignmentAdd<'a> {
        AssignmentAdd {
            action: Action::rest(
                self.client,
                Method::PUT,
                [CONTACTS, contact_id, GROUPS, group_id],
            ),
        }
    }

    /// DELETE /contacts/{contact_id}/groups/{group_id}
    pub fn delete(&self, contact_id: &str, group_id: &str) -> AssignmentDelete<'a> {
        AssignmentDelete {
            action: Action::rest(
                self.client,
                Method::DELETE,
                [CONTACTS, contact_id, GROUPS, group_id],
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssignmentList<'a> {
    action: Action<'a>,
}

impl<'a> AssignmentList<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Collection<Group>> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct AssignmentGet<'a> {
    action: Action<'a>,
}

impl<'a> AssignmentGet<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Group> {
        self.action.execute_json().await
    }
}

/// Assign a contact to a group; the server answers with the contact's groups
#[derive(Debug, Clone)]
pub struct AssignmentAdd<'a> {
    action: Action<'a>,
}

impl<'a> AssignmentAdd<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Collection<Group>> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct AssignmentDelete<'a> {
    action: Action<'a>,
}

impl<'a> AssignmentDelete<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<()> {
        self.action.execute_empty().await
    }
}
