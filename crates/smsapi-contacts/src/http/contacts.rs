/*
[INPUT]:  Contact attributes and search filters
[OUTPUT]: Contact records and listings
[POS]:    HTTP layer - contact endpoints (require login)
[UPDATE]: When adding contact attributes or filters
*/

use reqwest::Method;
use serde::Serialize;

use crate::http::{Action, Result, SmsapiClient};
use crate::http::fields::Fields;
use crate::http::groups::Groups;
use crate::types::{Collection, Contact, Gender};

pub(crate) const CONTACTS: &str = "contacts";

impl SmsapiClient {
    /// Contact operations
    pub fn contacts(&self) -> Contacts<'_> {
        Contacts { client: self }
    }
}

/// Entry point for contact actions
#[derive(Debug, Clone, Copy)]
pub struct Contacts<'a> {
    client: &'a SmsapiClient,
}

impl<'a> Contacts<'a> {
    /// GET /contacts
    pub fn list(&self) -> ContactList<'a> {
        ContactList {
            action: Action::rest(self.client, Method::GET, [CONTACTS]),
        }
    }

    /// GET /contacts/{id}
    pub fn get(&self, id: &str) -> ContactGet<'a> {
        ContactGet {
            action: Action::rest(self.client, Method::GET, [CONTACTS, id]),
        }
    }

    /// POST /contacts
    pub fn add(&self) -> ContactEdit<'a> {
        ContactEdit {
            action: Action::rest(self.client, Method::POST, [CONTACTS]),
        }
    }

    /// PUT /contacts/{id}
    pub fn update(&self, id: &str) -> ContactEdit<'a> {
        ContactEdit {
            action: Action::rest(self.client, Method::PUT, [CONTACTS, id]),
        }
    }

    /// DELETE /contacts/{id}
    pub fn delete(&self, id: &str) -> ContactDelete<'a> {
        ContactDelete {
            action: Action::rest(self.client, Method::DELETE, [CONTACTS, id]),
        }
    }

    /// Contact group operations
    pub fn groups(&self) -> Groups<'a> {
        Groups::new(self.client)
    }

    /// Custom field operations
    pub fn fields(&self) -> Fields<'a> {
        Fields::new(self.client)
    }
}

/// Contact search
#[derive(Debug, Clone)]
pub struct ContactList<'a> {
    action: Action<'a>,
}

impl<'a> ContactList<'a> {
    /// Free-text search
    pub fn q(mut self, query: impl Into<String>) -> Self {
        self.action.set_param("q", query.into());
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.action.set_param("offset", offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.action.set_param("limit", limit);
        self
    }

    /// Sort field, e.g. `first_name`
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.action.set_param("order_by", field.into());
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.action.set_param("phone_number", phone_number.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.action.set_param("email", email.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.action.set_param("first_name", first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.action.set_param("last_name", last_name.into());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.action.set_param("gender", gender.as_str());
        self
    }

    /// Birthday in `YYYY-MM-DD`
    pub fn birthday_date(mut self, date: impl Into<String>) -> Self {
        self.action.set_param("birthday_date", date.into());
        self
    }

    pub fn birthday(self, date: impl Into<String>) -> Self {
        self.birthday_date(date)
    }

    /// Only contacts assigned to this group
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.action.set_param("group_id", group_id.into());
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

    pub async fn execute(self) -> Result<Collection<Contact>> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct ContactGet<'a> {
    action: Action<'a>,
}

impl<'a> ContactGet<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Contact> {
        self.action.execute_json().await
    }
}

/// Contact creation or update
#[derive(Debug, Clone)]
pub struct ContactEdit<'a> {
    action: Action<'a>,
}

impl<'a> ContactEdit<'a> {
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.action.set_param("phone_number", phone_number.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.action.set_param("email", email.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.action.set_param("first_name", first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.action.set_param("last_name", last_name.into());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.action.set_param("gender", gender.as_str());
        self
    }

    /// Birthday in `YYYY-MM-DD`
    pub fn birthday_date(mut self, date: impl Into<String>) -> Self {
        self.action.set_param("birthday_date", date.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.action.set_param("description", description.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.action.set_param("city", city.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.action.set_param("source", source.into());
        self
    }

    /// Set a custom field value
    pub fn custom_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.action.set_param(name, value.into());
        self
    }

    /// Bulk assignment, e.g. from [`ContactParams`](crate::types::ContactParams)
    pub fn params<S: Serialize + ?Sized>(self, params: &S) -> Result<Self> {
        Ok(Self {
            action: self.action.params(params)?,
        })
    }

    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Contact> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct ContactDelete<'a> {
    action: Action<'a>,
}

impl<'a> ContactDelete<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<()> {
        self.action.execute_empty().await
    }
}
