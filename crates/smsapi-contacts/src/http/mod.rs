/*
[INPUT]:  HTTP client configuration, session and action parameters
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST and legacy API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod action;
pub mod assignments;
pub mod client;
pub mod contacts;
pub mod error;
pub mod fields;
pub mod groups;
pub mod members;
pub mod permissions;
pub mod phonebook;
pub mod users;

pub use action::{Action, Params};
pub use assignments::{AssignmentAdd, AssignmentDelete, AssignmentGet, AssignmentList, Assignments};
pub use client::{ApiStyle, ClientConfig, SmsapiClient};
pub use contacts::{ContactDelete, ContactEdit, ContactGet, ContactList, Contacts};
pub use error::{Result, SmsapiError};
pub use fields::{FieldAdd, FieldDelete, FieldList, FieldUpdate, Fields};
pub use groups::{GroupDelete, GroupEdit, GroupGet, GroupList, Groups};
pub use members::{MemberAdd, MemberDelete, MemberGet, Members};
pub use permissions::{PermissionDelete, PermissionEdit, PermissionGet, PermissionList, Permissions};
pub use phonebook::{
    Phonebook, PhonebookGroupAdd, PhonebookGroupDelete, PhonebookGroupGet, PhonebookGroupList,
    PhonebookGroupUpdate,
};
pub use users::{UserAdd, UserGet, UserList, Users};
