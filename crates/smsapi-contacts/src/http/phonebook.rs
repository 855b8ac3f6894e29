/*
[INPUT]:  Group names and descriptions
[OUTPUT]: Legacy phonebook groups
[POS]:    HTTP layer - legacy phonebook.do group endpoints (require login)
[UPDATE]: When legacy phonebook parameters change
*/

use serde::Serialize;

use crate::http::{Action, Result, SmsapiClient};
use crate::types::LegacyGroup;

const PHONEBOOK: &str = "phonebook.do";

impl SmsapiClient {
    /// Legacy phonebook (`phonebook.do`) operations
    pub fn phonebook(&self) -> Phonebook<'_> {
        Phonebook { client: self }
    }
}

/// Entry point for legacy phonebook actions
#[derive(Debug, Clone, Copy)]
pub struct Phonebook<'a> {
    client: &'a SmsapiClient,
}

impl<'a> Phonebook<'a> {
    pub fn group_add(&self) -> PhonebookGroupAdd<'a> {
        PhonebookGroupAdd {
            action: Action::legacy(self.client, PHONEBOOK),
        }
    }

    /// Rename or re-describe the group currently called `old_name`
    pub fn group_update(&self, old_name: &str) -> PhonebookGroupUpdate<'a> {
        PhonebookGroupUpdate {
            action: Action::legacy(self.client, PHONEBOOK),
        }
        .old_name(old_name)
    }

    pub fn group_get(&self, name: &str) -> PhonebookGroupGet<'a> {
        PhonebookGroupGet {
            action: Action::legacy(self.client, PHONEBOOK).param("get_group", name),
        }
    }

    pub fn group_list(&self) -> PhonebookGroupList<'a> {
        PhonebookGroupList {
            action: Action::legacy(self.client, PHONEBOOK).param("list_groups", 1),
        }
    }

    pub fn group_delete(&self, name: &str) -> PhonebookGroupDelete<'a> {
        PhonebookGroupDelete {
            action: Action::legacy(self.client, PHONEBOOK).param("delete_group", name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhonebookGroupAdd<'a> {
    action: Action<'a>,
}

impl<'a> PhonebookGroupAdd<'a> {
    /// Name of the new group
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.action.set_param("add_group", name.into());
        self
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.action.set_param("info", info.into());
        self
    }

    pub fn get_name(&self) -> Option<&str> {
        self.action.get_str("add_group")
    }

    pub fn get_info(&self) -> Option<&str> {
        self.action.get_str("info")
    }

    pub fn params<S: Serialize + ?Sized>(self, params: &S) -> Result<Self> {
        Ok(Self {
            action: self.action.params(params)?,
        })
    }

    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<LegacyGroup> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct PhonebookGroupUpdate<'a> {
    action: Action<'a>,
}

impl<'a> PhonebookGroupUpdate<'a> {
    /// Current name of the group being edited
    pub fn old_name(mut self, old_name: impl Into<String>) -> Self {
        self.action.set_param("edit_group", old_name.into());
        self
    }

    /// New group name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.action.set_param("name", name.into());
        self
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.action.set_param("info", info.into());
        self
    }

    pub fn get_old_name(&self) -> Option<&str> {
        self.action.get_str("edit_group")
    }

    pub fn get_name(&self) -> Option<&str> {
        self.action.get_str("name")
    }

    pub fn get_info(&self) -> Option<&str> {
        self.action.get_str("info")
    }

    pub fn params<S: Serialize + ?Sized>(self, params: &S) -> Result<Self> {
        Ok(Self {
            action: self.action.params(params)?,
        })
    }

    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<LegacyGroup> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct PhonebookGroupGet<'a> {
    action: Action<'a>,
}

impl<'a> PhonebookGroupGet<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<LegacyGroup> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct PhonebookGroupList<'a> {
    action: Action<'a>,
}

impl<'a> PhonebookGroupList<'a> {
    pub fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub async fn execute(self) -> Result<Vec<LegacyGroup>> {
        self.action.execute_json().await
    }
}

#[derive(Debug, Clone)]
pub struct PhonebookGroupDelete<'a> {
    action: Action<'a>,
}

impl<'a> PhonebookGroupDelete<'a> {
    /// Also delete the contacts that belong to the group
    pub fn remove_contacts(mut self, remove: bool) -> Self {
        self.action.set_param("remove_contacts", remove);
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

    pub async fn execute(self) -> Result<()> {
        self.action.execute_empty().await
    }
}
