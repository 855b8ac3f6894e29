/*
[INPUT]:  Group id and contact id
[OUTPUT]: Membership changes and member lookups
[POS]:    HTTP layer - group member endpoints (require login)
[UPDATE]: When membership endpoints change
*/

use reqwest::Method;

use crate::http::contacts::CONTACTS;
use crate::http::groups::GROUPS;
use crate::http::{Action, Result, SmsapiClient};
use crate::types::Contact;

const MEMBERS: &str = "members";

/// Group-side membership: pin, check or unpin a contact
#[derive(Debug, Clone, Copy)]
pub struct Members<'a> {
    client: &'a SmsapiClient,
}

impl<'a> Members<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    fn action(&self, method: Method, group_id: &str, contact_id: &str) -> Action<'a> {
        Action::rest(
            self.client,
            method,
            [CONTACTS, GROUPS, group_id, MEMBERS, contact_id],
        )
    }

    /// PUT /contacts/groups/{group_id}/members/{contact_id}
    pub fn add(&self, group_id: &str, contact_id: &str) -> MemberAdd<'a> {
        MemberAdd {
            action: self.action(Method::PUT, group_id, contact_id),
        }
    }

    /// GET /contacts/groups/{group_id}/members/{contact_id}
    pub fn get(&self, group_id: &str, contact_id: &str) -> MemberGet<'a> {
        MemberGet {
            action: self.action(Method::GET, group_id, contact_id),
        }
    }

    /// DELETE /contacts/groups/{group_id}/members/{contact_id}
    pub fn delete(&self, group_id: &str, contact_id: &str) -> MemberDelete<'a> {
        MemberDelete {
            action: self.action(Method::DELETE, group_id, contact_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemberAdd<'a> {
    action: Action<'a>,
}

impl<'a> MemberAdd<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    /// The added contact, or `None` when the server answers without a body
    pub async fn execute(self) -> Result<Option<Contact>> {
        self.action.execute_optional_json().await
    }
}

#[derive(Debug, Clone)]
pub struct MemberGet<'a> {
    action: Action<'a>,
}

impl<'a> MemberGet<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Contact> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct MemberDelete<'a> {
    action: Action<'a>,
}

impl<'a> MemberDelete<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<()> {
        self.action.execute_empty().await
    }
}
