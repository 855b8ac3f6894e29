/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SMSAPI contacts crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{AuthManager, Session, SessionManager, hash_password};

// Re-export commonly used types from http
pub use http::{Action, ApiStyle, ClientConfig, Params, Result, SmsapiClient, SmsapiError};

// Re-export all types
pub use types::*;
