//! Mock authentication.
//!
//! Credentials are checked against a `UserRepository` (plain-text passwords,
//! no backend). The signed-in user, without password, is persisted under
//! `auth-storage` and restored when the store is opened.

pub mod repository;

pub use repository::{InMemoryUserRepository, UserRepository};

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::clock::{Clock, IdGenerator, SystemClock, UuidIds};
use crate::db::{DatabaseError, LocalStorage, AUTH_SESSION_KEY};
use crate::models::{AuthSession, User, UserRecord};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username/email or password")]
    InvalidCredentials,

    #[error("Username or email already registered")]
    AlreadyExists,

    #[error("No account with email {0}")]
    UnknownEmail(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub struct AuthStore<R: UserRepository = InMemoryUserRepository> {
    repository: R,
    session: AuthSession,
    latency: Duration,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl AuthStore<InMemoryUserRepository> {
    /// Store over the demo directory on the wall clock.
    pub fn open_default(storage: &LocalStorage, latency: Duration) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let repository = InMemoryUserRepository::seeded(clock.now());
        Self::open(repository, storage, latency, clock, Arc::new(UuidIds))
    }
}

impl<R: UserRepository> AuthStore<R> {
    /// Restore the persisted session. An unreadable session starts signed out.
    pub fn open(
        repository: R,
        storage: &LocalStorage,
        latency: Duration,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let session = match storage.load::<AuthSession>(AUTH_SESSION_KEY) {
            Ok(Some(session)) if session.is_authenticated == session.user.is_some() => session,
            Ok(Some(_)) => {
                tracing::warn!("Inconsistent auth session, starting signed out");
                AuthSession::default()
            }
            Ok(None) => AuthSession::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable auth session");
                AuthSession::default()
            }
        };
        if let Some(user) = &session.user {
            tracing::info!(username = %user.username, "Restored auth session");
        }

        Self {
            repository,
            session,
            latency,
            clock,
            ids,
        }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Sign in with a username or email and the exact password.
    pub fn login(
        &mut self,
        storage: &LocalStorage,
        identifier: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        self.simulate_latency();

        let user = match self.repository.find_by_identifier(identifier) {
            Some(record) if record.password == password => record.user.clone(),
            _ => {
                tracing::info!("Login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        tracing::info!(username = %user.username, "Logged in");
        self.commit(storage, Some(user.clone()))?;
        Ok(user)
    }

    /// Register a new account and sign it in.
    pub fn signup(
        &mut self,
        storage: &LocalStorage,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let username = username.trim();
        let email = email.trim();
        if username.is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        self.simulate_latency();

        if self.repository.exists(username, email) {
            return Err(AuthError::AlreadyExists);
        }

        let user = User {
            id: self.ids.next_id(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: self.clock.now(),
        };
        // Register only once the signed-in session is stored
        self.commit(storage, Some(user.clone()))?;
        self.repository.insert(UserRecord {
            user: user.clone(),
            password: password.to_string(),
        });

        tracing::info!(username = %user.username, "Signed up");
        Ok(user)
    }

    pub fn logout(&mut self, storage: &LocalStorage) -> Result<(), AuthError> {
        if let Some(user) = &self.session.user {
            tracing::info!(username = %user.username, "Logged out");
        }
        self.commit(storage, None)
    }

    /// Simulated reset: succeeds when the email belongs to an account.
    pub fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        self.simulate_latency();

        match self.repository.find_by_email(email.trim()) {
            Some(record) => {
                tracing::info!(email = %record.user.email, "Password reset email sent");
                Ok(())
            }
            None => Err(AuthError::UnknownEmail(email.trim().to_string())),
        }
    }

    /// Persist the new session first, then adopt it.
    fn commit(&mut self, storage: &LocalStorage, user: Option<User>) -> Result<(), AuthError> {
        let next = AuthSession {
            is_authenticated: user.is_some(),
            user,
        };
        storage.save(AUTH_SESSION_KEY, &next)?;
        self.session = next;
        Ok(())
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }
}
