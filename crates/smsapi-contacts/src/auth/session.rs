/*
[INPUT]:  Credentials accepted by a successful login
[OUTPUT]: Shared session lookup and login status
[POS]:    Auth layer - session storage shared by all client clones
[UPDATE]: When adding credential kinds or changing storage strategy
*/

use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

/// Credentials a session authenticates with
#[derive(Clone, PartialEq, Eq)]
pub enum Session {
    /// Username plus MD5 hex digest of the account password
    Password {
        username: String,
        password_hash: String,
    },
    /// OAuth bearer token
    OAuth { token: String },
}

impl Session {
    /// Username, when the session carries one
    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Password { username, .. } => Some(username),
            Session::OAuth { .. } => None,
        }
    }
}

// Keep secrets out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Session::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password_hash", &"<redacted>")
                .finish(),
            Session::OAuth { .. } => f
                .debug_struct("OAuth")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

/// Stored session with metadata
#[derive(Debug, Clone)]
pub struct SessionData {
    pub session: Session,
    pub logged_in_at: DateTime<Utc>,
}

/// Thread-safe session manager
#[derive(Debug, Clone)]
pub struct SessionManager {
    data: Arc<RwLock<Option<SessionData>>>,
}

impl SessionManager {
    /// Create a new empty session manager
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store a new session, replacing any previous one
    pub fn set(&self, session: Session) {
        let data = SessionData {
            session,
            logged_in_at: Utc::now(),
        };

        let mut guard = self.data.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(data);
    }

    /// Get the current session if available
    pub fn get(&self) -> Option<Session> {
        let guard = self.data.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|data| data.session.clone())
    }

    /// Get the session together with its metadata
    pub fn session_data(&self) -> Option<SessionData> {
        let guard = self.data.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    /// Check whether a session is present
    pub fn is_authenticated(&self) -> bool {
        let guard = self.data.read().unwrap_or_else(|e| e.into_inner());
        guard.is_some()
    }

    /// Username of the logged in account, if known
    pub fn username(&self) -> Option<String> {
        self.get()
            .and_then(|session| session.username().map(str::to_string))
    }

    /// Clear the stored session
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_session() -> Session {
        Session::Password {
            username: "user".to_string(),
            password_hash: "5f4dcc3b5aa765d61d8327deb882cf99".to_string(),
        }
    }

    #[test]
    fn test_new_manager_is_empty() {
        let manager = SessionManager::new();
        assert!(manager.get().is_none());
        assert!(!manager.is_authenticated());
        assert!(manager.username().is_none());
    }

    #[test]
    fn test_set_and_get_session() {
        let manager = SessionManager::new();
        manager.set(password_session());

        assert_eq!(manager.get(), Some(password_session()));
        assert!(manager.is_authenticated());
        assert_eq!(manager.username().as_deref(), Some("user"));
    }

    #[test]
    fn test_clones_share_state() {
        let manager = SessionManager::new();
        let clone = manager.clone();
        clone.set(Session::OAuth {
            token: "token".to_string(),
        });

        assert!(manager.is_authenticated());
        assert!(manager.username().is_none());
    }

    #[test]
    fn test_clear_session() {
        let manager = SessionManager::new();
        manager.set(password_session());

        manager.clear();
        assert!(manager.get().is_none());
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", password_session());
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("5f4dcc3b"));

        let rendered = format!(
            "{:?}",
            Session::OAuth {
                token: "secret-token".to_string()
            }
        );
        assert!(!rendered.contains("secret-token"));
    }
}
