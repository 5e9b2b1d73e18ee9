//! Shared dashboard state for a host process.
//!
//! `DashboardState` owns one of each widget behind a `Mutex` so a host
//! (terminal loop, desktop shell, web view bridge) can share it through an
//! `Arc`. Lock order when two are needed: storage first, then the widget.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::auth::{AuthError, AuthStore, InMemoryUserRepository};
use crate::catalog;
use crate::chat::{build_provider, ChatError, ChatSession};
use crate::clock::{Clock, IdGenerator, SystemClock, UuidIds};
use crate::config::DashboardConfig;
use crate::contacts::{ContactError, PersonalContactBook};
use crate::db::{self, LocalStorage};
use crate::directory::HospitalLocator;
use crate::emergency::EmergencyPanel;
use crate::location::{
    build_geocoder, resolve_label, GeolocationError, LocationTracker, ReverseGeocoder,
};
use crate::models::{ChatMessage, Coordinates, HospitalRecord, PersonalContact, Tutorial, User};
use crate::quiz::{QuizEngine, QuizError};
use crate::tutorials;

/// Errors from DashboardState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Cannot create data directory: {0}")]
    DataDir(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(#[from] db::DatabaseError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, CoreError> {
    mutex.lock().map_err(|_| CoreError::LockPoisoned)
}

// ═══════════════════════════════════════════════════════════
// DashboardState
// ═══════════════════════════════════════════════════════════

pub struct DashboardState {
    config: DashboardConfig,
    storage: Mutex<LocalStorage>,
    quiz: Mutex<QuizEngine>,
    chat: Mutex<ChatSession>,
    contacts: Mutex<PersonalContactBook>,
    auth: Mutex<AuthStore>,
    location: Mutex<LocationTracker>,
    emergency: Mutex<EmergencyPanel<'static>>,
    geocoder: Box<dyn ReverseGeocoder>,
}

impl DashboardState {
    /// Open the storage file named by `config` (creating its directory) and
    /// build every widget on the wall clock.
    pub fn open(config: DashboardConfig) -> Result<Self, CoreError> {
        if let Some(parent) = config.storage_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let storage = LocalStorage::open(&config.storage_path)?;
        Self::with_parts(config, storage, Arc::new(SystemClock), Arc::new(UuidIds))
    }

    /// Build from an already-open storage and injected time/id sources.
    pub fn with_parts(
        config: DashboardConfig,
        storage: LocalStorage,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<Self, CoreError> {
        let quiz = QuizEngine::with_clock(catalog::quiz_questions().to_vec(), Arc::clone(&clock))?;

        let chat = ChatSession::with_parts(build_provider(&config), Arc::clone(&clock), Arc::clone(&ids))
            .with_failure_reply(config.failure_reply);

        let contacts = PersonalContactBook::load(&storage);
        let auth = AuthStore::open(
            InMemoryUserRepository::seeded(clock.now()),
            &storage,
            config.auth_latency,
            clock,
            ids,
        );

        tracing::info!(
            provider = chat.provider_name(),
            contacts = contacts.len(),
            signed_in = auth.is_authenticated(),
            "Dashboard state ready"
        );

        Ok(Self {
            geocoder: build_geocoder(&config),
            config,
            storage: Mutex::new(storage),
            quiz: Mutex::new(quiz),
            chat: Mutex::new(chat),
            contacts: Mutex::new(contacts),
            auth: Mutex::new(auth),
            location: Mutex::new(LocationTracker::new()),
            emergency: Mutex::new(EmergencyPanel::new(catalog::emergency_contacts())),
        })
    }

    /// Replace the geocoder chosen from config.
    pub fn with_geocoder(mut self, geocoder: Box<dyn ReverseGeocoder>) -> Self {
        self.geocoder = geocoder;
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // ── Quiz ────────────────────────────────────────────────

    pub fn quiz(&self) -> Result<MutexGuard<'_, QuizEngine>, CoreError> {
        lock(&self.quiz)
    }

    // ── Chat ────────────────────────────────────────────────

    pub fn chat(&self) -> Result<MutexGuard<'_, ChatSession>, CoreError> {
        lock(&self.chat)
    }

    /// Send a message and return the assistant's reply.
    pub fn send_chat(&self, text: &str) -> Result<ChatMessage, CoreError> {
        let mut chat = lock(&self.chat)?;
        let reply = chat.send(text)?;
        Ok(reply.clone())
    }

    pub fn quick_topics(&self) -> &'static [&'static str] {
        catalog::QUICK_TOPICS
    }

    // ── Directory & location ────────────────────────────────

    /// Hospitals matching `query`, nearest first once the device is located.
    pub fn hospitals(&self, query: &str) -> Result<Vec<HospitalRecord>, CoreError> {
        let located = lock(&self.location)?.is_located();
        let mut locator = HospitalLocator::new(catalog::hospitals());
        locator.set_query(query);
        locator.set_located(located);
        Ok(locator.visible().into_iter().cloned().collect())
    }

    pub fn begin_locating(&self) -> Result<(), CoreError> {
        lock(&self.location)?.begin();
        Ok(())
    }

    /// Geocoding can block for the whole request timeout, so it runs before
    /// the location lock is taken.
    pub fn report_position(&self, coordinates: Coordinates) -> Result<(), CoreError> {
        let label = resolve_label(self.geocoder.as_ref(), coordinates);
        lock(&self.location)?.set_located(coordinates, label);
        Ok(())
    }

    pub fn report_geolocation_error(&self, error: GeolocationError) -> Result<(), CoreError> {
        lock(&self.location)?.on_error(error);
        Ok(())
    }

    pub fn location_status(&self) -> Result<String, CoreError> {
        Ok(lock(&self.location)?.status().to_string())
    }

    // ── Emergency panel ─────────────────────────────────────

    pub fn emergency(&self) -> Result<MutexGuard<'_, EmergencyPanel<'static>>, CoreError> {
        lock(&self.emergency)
    }

    // ── Tutorials ───────────────────────────────────────────

    pub fn tutorials(&self, category: &str) -> Vec<Tutorial> {
        tutorials::filter_by_category(catalog::tutorials(), category)
            .into_iter()
            .cloned()
            .collect()
    }

    // ── Personal contacts ───────────────────────────────────

    pub fn personal_contacts(&self) -> Result<Vec<PersonalContact>, CoreError> {
        Ok(lock(&self.contacts)?.contacts().to_vec())
    }

    pub fn add_contact(&self, contact: PersonalContact) -> Result<PersonalContact, CoreError> {
        let storage = lock(&self.storage)?;
        let mut contacts = lock(&self.contacts)?;
        Ok(contacts.add(&storage, contact)?.clone())
    }

    pub fn remove_contact(&self, index: usize) -> Result<PersonalContact, CoreError> {
        let storage = lock(&self.storage)?;
        let mut contacts = lock(&self.contacts)?;
        Ok(contacts.remove(&storage, index)?)
    }

    // ── Auth ────────────────────────────────────────────────

    pub fn login(&self, identifier: &str, password: &str) -> Result<User, CoreError> {
        let storage = lock(&self.storage)?;
        let mut auth = lock(&self.auth)?;
        Ok(auth.login(&storage, identifier, password)?)
    }

    pub fn signup(&self, username: &str, email: &str, password: &str) -> Result<User, CoreError> {
        let storage = lock(&self.storage)?;
        let mut auth = lock(&self.auth)?;
        Ok(auth.signup(&storage, username, email, password)?)
    }

    pub fn logout(&self) -> Result<(), CoreError> {
        let storage = lock(&self.storage)?;
        let mut auth = lock(&self.auth)?;
        Ok(auth.logout(&storage)?)
    }

    pub fn forgot_password(&self, email: &str) -> Result<(), CoreError> {
        Ok(lock(&self.auth)?.forgot_password(email)?)
    }

    pub fn current_user(&self) -> Result<Option<User>, CoreError> {
        Ok(lock(&self.auth)?.current_user().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ManualClock, SequentialIds};
    use crate::config::ProviderKind;
    use crate::models::enums::Sender;
    use crate::quiz::Advance;
    use std::sync::Barrier;
    use std::time::{Duration, Instant};

    fn local_config() -> DashboardConfig {
        DashboardConfig {
            provider: ProviderKind::Local,
            auth_latency: Duration::ZERO,
            ..DashboardConfig::default()
        }
    }

    fn state() -> DashboardState {
        DashboardState::with_parts(
            local_config(),
            LocalStorage::open_in_memory().unwrap(),
            Arc::new(ManualClock::fixed()),
            Arc::new(SequentialIds::new("id")),
        )
        .unwrap()
    }

    #[test]
    fn chat_uses_local_rules_when_configured() {
        let state = state();
        assert_eq!(state.chat().unwrap().provider_name(), "local-rules");

        let reply = state.send_chat("my hand has a burn").unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert!(reply.content.contains("Burn"));
        assert_eq!(state.chat().unwrap().len(), 3);
    }

    #[test]
    fn blank_chat_surfaces_chat_error() {
        let state = state();
        assert!(matches!(
            state.send_chat("  "),
            Err(CoreError::Chat(ChatError::EmptyMessage))
        ));
    }

    #[test]
    fn quiz_runs_over_catalog() {
        let state = state();
        let mut quiz = state.quiz().unwrap();
        quiz.start();
        let total = quiz.total_questions();
        let mut last = None;
        for _ in 0..total {
            last = Some(quiz.advance().unwrap());
        }
        match last {
            Some(Advance::Completed(result)) => {
                assert_eq!(result.total_questions, total);
                assert_eq!(result.score, 0);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn hospitals_sorted_only_after_locating() {
        let state = state();
        let unsorted = state.hospitals("").unwrap();
        assert_eq!(unsorted[0].id, "1");
        assert_eq!(unsorted[5].id, "6");

        state.begin_locating().unwrap();
        assert_eq!(state.location_status().unwrap(), "📍 Getting your location...");
        state
            .report_position(Coordinates {
                lat: 13.0,
                lng: 80.1,
            })
            .unwrap();
        assert_eq!(state.location_status().unwrap(), "📍 13.0000, 80.1000");

        let sorted = state.hospitals("").unwrap();
        let ids: Vec<_> = sorted.iter().take(3).map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "6", "2"]);
    }

    struct SlowGeocoder {
        started: Arc<Barrier>,
        delay: Duration,
    }

    impl ReverseGeocoder for SlowGeocoder {
        fn name(&self) -> &'static str {
            "slow"
        }

        fn reverse(
            &self,
            _coordinates: Coordinates,
        ) -> Result<Option<String>, crate::location::LocationError> {
            self.started.wait();
            std::thread::sleep(self.delay);
            Ok(Some("Adyar, Chennai".into()))
        }
    }

    #[test]
    fn slow_geocoding_does_not_block_readers() {
        let started = Arc::new(Barrier::new(2));
        let state = Arc::new(state().with_geocoder(Box::new(SlowGeocoder {
            started: Arc::clone(&started),
            delay: Duration::from_millis(800),
        })));

        let worker = {
            let state = Arc::clone(&state);
            std::thread::spawn(move || {
                state
                    .report_position(Coordinates {
                        lat: 13.0,
                        lng: 80.25,
                    })
                    .unwrap()
            })
        };

        started.wait();
        let begin = Instant::now();
        assert_eq!(state.hospitals("").unwrap().len(), 10);
        assert_eq!(state.location_status().unwrap(), "Location access required");
        assert!(begin.elapsed() < Duration::from_millis(400));

        worker.join().unwrap();
        assert_eq!(state.location_status().unwrap(), "📍 Adyar, Chennai");
    }

    #[test]
    fn geolocation_error_keeps_default_order() {
        let state = state();
        state
            .report_geolocation_error(GeolocationError::PermissionDenied)
            .unwrap();
        assert!(state.location_status().unwrap().contains("denied"));
        assert_eq!(state.hospitals("").unwrap()[1].id, "2");
    }

    #[test]
    fn hospital_query_filters() {
        let state = state();
        let icu = state.hospitals("icu").unwrap();
        assert_eq!(icu.len(), 3);
    }

    #[test]
    fn contacts_round_trip_through_state() {
        let state = state();
        let added = state
            .add_contact(PersonalContact {
                name: "Meena".into(),
                relation: "Neighbour".into(),
                number: "+91 98400 22222".into(),
            })
            .unwrap();
        assert_eq!(added.name, "Meena");
        assert_eq!(state.personal_contacts().unwrap().len(), 1);

        assert!(matches!(
            state.add_contact(PersonalContact {
                name: "X".into(),
                relation: String::new(),
                number: "108".into(),
            }),
            Err(CoreError::Contact(ContactError::MissingField("relation")))
        ));
        assert_eq!(state.personal_contacts().unwrap().len(), 1);

        state.remove_contact(0).unwrap();
        assert!(state.personal_contacts().unwrap().is_empty());
    }

    #[test]
    fn auth_flow_through_state() {
        let state = state();
        assert!(state.current_user().unwrap().is_none());
        assert!(matches!(
            state.login("demo", "nope"),
            Err(CoreError::Auth(AuthError::InvalidCredentials))
        ));
        state.login("demo", "demo123").unwrap();
        assert_eq!(state.current_user().unwrap().unwrap().username, "demo");
        state.logout().unwrap();
        assert!(state.current_user().unwrap().is_none());

        state.signup("ravi", "ravi@example.com", "pw").unwrap();
        assert!(state.forgot_password("ravi@example.com").is_ok());
    }

    #[test]
    fn emergency_panel_shared() {
        let state = state();
        state.emergency().unwrap().activate();
        let link = state.emergency().unwrap().call(0);
        assert_eq!(link.as_deref(), Some("tel:+91-11-2692-5858"));
        assert!(!state.emergency().unwrap().is_active());
    }

    #[test]
    fn tutorials_by_category() {
        let state = state();
        assert_eq!(state.tutorials("").len(), 6);
        assert_eq!(state.tutorials("asthma").len(), 1);
    }

    #[test]
    fn open_creates_storage_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig {
            storage_path: dir.path().join("nested").join("local_storage.db"),
            ..local_config()
        };
        let state = DashboardState::open(config).unwrap();
        state
            .add_contact(PersonalContact {
                name: "A".into(),
                relation: "B".into(),
                number: "108".into(),
            })
            .unwrap();
        assert!(dir.path().join("nested").join("local_storage.db").exists());
    }

    #[test]
    fn state_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DashboardState>();
    }
}
