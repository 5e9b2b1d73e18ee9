use chrono::NaiveDateTime;

use crate::models::{User, UserRecord};

/// Where user credentials live. The dashboard ships only the in-memory
/// directory; a real backend would implement this over its own store.
pub trait UserRepository: Send {
    /// Record whose username or email equals `identifier`.
    fn find_by_identifier(&self, identifier: &str) -> Option<&UserRecord>;

    fn find_by_email(&self, email: &str) -> Option<&UserRecord>;

    /// True if either the username or the email is taken.
    fn exists(&self, username: &str, email: &str) -> bool;

    fn insert(&mut self, record: UserRecord);
}

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_EMAIL: &str = "demo@firstaid.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Process-local user directory. Signups are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    records: Vec<UserRecord>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding only the demo account.
    pub fn seeded(created_at: NaiveDateTime) -> Self {
        Self {
            records: vec![UserRecord {
                user: User {
                    id: "1".to_string(),
                    username: DEMO_USERNAME.to_string(),
                    email: DEMO_EMAIL.to_string(),
                    created_at,
                },
                password: DEMO_PASSWORD.to_string(),
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_identifier(&self, identifier: &str) -> Option<&UserRecord> {
        self.records
            .iter()
            .find(|r| r.user.username == identifier || r.user.email == identifier)
    }

    fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.user.email == email)
    }

    fn exists(&self, username: &str, email: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.user.username == username || r.user.email == email)
    }

    fn insert(&mut self, record: UserRecord) {
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    fn seeded() -> InMemoryUserRepository {
        InMemoryUserRepository::seeded(ManualClock::fixed().now())
    }

    #[test]
    fn demo_user_found_by_username_or_email() {
        let repo = seeded();
        assert_eq!(repo.find_by_identifier("demo").unwrap().user.id, "1");
        assert_eq!(
            repo.find_by_identifier("demo@firstaid.com").unwrap().user.id,
            "1"
        );
        assert!(repo.find_by_identifier("Demo").is_none());
    }

    #[test]
    fn find_by_email_ignores_username() {
        let repo = seeded();
        assert!(repo.find_by_email("demo").is_none());
        assert!(repo.find_by_email(DEMO_EMAIL).is_some());
    }

    #[test]
    fn exists_checks_either_field() {
        let repo = seeded();
        assert!(repo.exists("demo", "other@x.com"));
        assert!(repo.exists("other", "demo@firstaid.com"));
        assert!(!repo.exists("other", "other@x.com"));
    }

    #[test]
    fn insert_adds_record() {
        let mut repo = InMemoryUserRepository::new();
        assert!(repo.is_empty());
        repo.insert(UserRecord {
            user: User {
                id: "7".into(),
                username: "asha".into(),
                email: "asha@example.com".into(),
                created_at: ManualClock::fixed().now(),
            },
            password: "pw".into(),
        });
        assert_eq!(repo.len(), 1);
        assert!(repo.exists("asha", ""));
    }
}
