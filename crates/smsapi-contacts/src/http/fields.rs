/*
[INPUT]:  Custom field names and types
[OUTPUT]: Custom contact field definitions
[POS]:    HTTP layer - custom field endpoints (require login)
[UPDATE]: When field types or attributes change
*/

use reqwest::Method;
use serde::Serialize;

use crate::http::contacts::CONTACTS;
use crate::http::{Action, Result, SmsapiClient};
use crate::types::{Collection, Field, FieldType};

const FIELDS: &str = "fields";

/// Entry point for custom field actions
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    client: &'a SmsapiClient,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    /// GET /contacts/fields
    pub fn list(&self) -> FieldList<'a> {
        FieldList {
            action: Action::rest(self.client, Method::GET, [CONTACTS, FIELDS]),
        }
    }

    /// POST /contacts/fields
    pub fn add(&self) -> FieldAdd<'a> {
        FieldAdd {
            action: Action::rest(self.client, Method::POST, [CONTACTS, FIELDS]),
        }
    }

    /// PUT /contacts/fields/{id}
    pub fn update(&self, id: &str) -> FieldUpdate<'a> {
        FieldUpdate {
            action: Action::rest(self.client, Method::PUT, [CONTACTS, FIELDS, id]),
        }
    }

    /// DELETE /contacts/fields/{id}
    pub fn delete(&self, id: &str) -> FieldDelete<'a> {
        FieldDelete {
            action: Action::rest(self.client, Method::DELETE, [CONTACTS, FIELDS, id]),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldList<'a> {
    action: Action<'a>,
}

impl<'a> FieldList<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Collection<Field>> {
        self.action.execute_json().await
    }
}

/// Field creation
#[derive(Debug, Clone)]
pub struct FieldAdd<'a> {
    action: Action<'a>,
}

impl<'a> FieldAdd<'a> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.action.set_param("name", name.into());
        self
    }

    /// Value type; the server assumes `TEXT` when unset
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.action.set_param("type", field_type.as_str());
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

    pub async fn execute(self) -> Result<Field> {
        self.action.execute_json().await
    }
}

/// Field rename; the type of an existing field is fixed
#[derive(Debug, Clone)]
pub struct FieldUpdate<'a> {
    action: Action<'a>,
}

impl<'a> FieldUpdate<'a> {
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

    pub async fn execute(self) -> Result<Field> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct FieldDelete<'a> {
    action: Action<'a>,
}

impl<'a> FieldDelete<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<()> {
        self.action.execute_empty().await
    }
}
