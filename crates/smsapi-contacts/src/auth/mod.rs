/*
[INPUT]:  Account credentials
[OUTPUT]: Stored session and login results
[POS]:    Auth layer - handles SMSAPI authentication
[UPDATE]: When auth flow or credential kinds change
*/

pub mod manager;
pub mod session;

pub use manager::{AuthManager, hash_password};
pub use session::{Session, SessionData, SessionManager};
