use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Public user profile. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Stored credential record of the mock user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user: User,
    pub password: String,
}

/// Persisted auth state (`auth-storage`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: Option<User>,
    pub is_authenticated: bool,
}
