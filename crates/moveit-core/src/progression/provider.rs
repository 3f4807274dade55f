//! Challenges provider.
//!
//! Wraps the pure [`ProgressionState`] with the catalog, an RNG, the
//! side-effect ports and a list of subscribers. Every operation runs the
//! pure transition first, then persists, then dispatches sound and
//! notifications, then notifies subscribers. Port failures are logged and
//! never roll back the in-memory state.
//!
//! ## Usage
//!
//! ```ignore
//! let mut provider = ChallengesProvider::builder(Progress::load(&store))
//!     .store(store)
//!     .build()?;
//! provider.start_new_challenge()?;
//! provider.complete_challenge();
//! ```

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::session::SessionState;
use super::state::{LevelChange, ProgressionState};
use crate::challenge::{ActiveChallenge, ChallengeCatalog};
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::ports::{
    new_challenge_body, MemoryStore, NoopNotifier, Notifier, Permission, Progress,
    ProgressStore, SilentPlayer, SoundPlayer, NEW_CHALLENGE_TITLE, NOTIFICATION_SOUND,
};

/// Callback invoked with every event the provider produces.
pub type Listener = Box<dyn FnMut(&Event)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ProviderBuilder {
    progress: Progress,
    catalog: Option<ChallengeCatalog>,
    store: Option<Box<dyn ProgressStore>>,
    notifier: Option<Box<dyn Notifier>>,
    sound: Option<Box<dyn SoundPlayer>>,
    rng: Option<Box<dyn RngCore>>,
}

impl ProviderBuilder {
    pub fn catalog(mut self, catalog: ChallengeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn store(mut self, store: impl ProgressStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn sound(mut self, sound: impl SoundPlayer + 'static) -> Self {
        self.sound = Some(Box::new(sound));
        self
    }

    pub fn rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the provider.
    ///
    /// Requests notification permission once and writes the initial
    /// counters to the store.
    ///
    /// # Errors
    /// Fails only when no catalog was given and the built-in one cannot be
    /// loaded.
    pub fn build(self) -> Result<ChallengesProvider> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => ChallengeCatalog::builtin()?,
        };
        let notifier = self.notifier.unwrap_or_else(|| Box::new(NoopNotifier));
        let permission = notifier.request_permission();
        tracing::debug!(?permission, "notification permission resolved");

        let provider = ChallengesProvider {
            state: ProgressionState::new(self.progress),
            catalog,
            store: self.store.unwrap_or_else(|| Box::new(MemoryStore::new())),
            notifier,
            sound: self.sound.unwrap_or_else(|| Box::new(SilentPlayer)),
            rng: self.rng.unwrap_or_else(|| Box::new(StdRng::from_entropy())),
            permission,
            listeners: Vec::new(),
            next_subscription: 0,
        };
        provider.persist();
        Ok(provider)
    }
}

pub struct ChallengesProvider {
    state: ProgressionState,
    catalog: ChallengeCatalog,
    store: Box<dyn ProgressStore>,
    notifier: Box<dyn Notifier>,
    sound: Box<dyn SoundPlayer>,
    rng: Box<dyn RngCore>,
    permission: Permission,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for ChallengesProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChallengesProvider")
            .field("state", &self.state)
            .field("catalog_size", &self.catalog.size())
            .field("permission", &self.permission)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ChallengesProvider {
    /// Start building a provider from rehydrated counters.
    pub fn builder(progress: Progress) -> ProviderBuilder {
        ProviderBuilder {
            progress,
            catalog: None,
            store: None,
            notifier: None,
            sound: None,
            rng: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn level(&self) -> u32 {
        self.state.level()
    }

    pub fn current_experience(&self) -> u32 {
        self.state.current_experience()
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.state.experience_to_next_level()
    }

    pub fn challenges_completed(&self) -> u32 {
        self.state.challenges_completed()
    }

    pub fn active_challenge(&self) -> Option<&ActiveChallenge> {
        self.state.active_challenge()
    }

    pub fn is_level_up_modal_open(&self) -> bool {
        self.state.is_level_up_modal_open()
    }

    pub fn catalog(&self) -> &ChallengeCatalog {
        &self.catalog
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            level: self.state.level(),
            current_experience: self.state.current_experience(),
            experience_to_next_level: self.state.experience_to_next_level(),
            challenges_completed: self.state.challenges_completed(),
            progress_percent: self.state.progress_percent(),
            active_challenge: self.state.active_challenge().cloned(),
            is_level_up_modal_open: self.state.is_level_up_modal_open(),
            at: Utc::now(),
        }
    }

    /// The non-persisted part of the session.
    pub fn session(&self) -> SessionState {
        SessionState {
            active_challenge: self.state.active_challenge().cloned(),
            level_up_modal_open: self.state.is_level_up_modal_open(),
        }
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe(&mut self, listener: impl FnMut(&Event) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Assign a uniformly random challenge from the catalog, then play the
    /// sound cue and show a notification if permitted.
    ///
    /// # Errors
    /// Returns a validation error if the catalog is empty.
    pub fn start_new_challenge(&mut self) -> Result<Event> {
        let (index, challenge) = self
            .catalog
            .pick(&mut self.rng)
            .ok_or_else(|| ValidationError::EmptyCollection("challenge catalog".into()))?;
        let active = ActiveChallenge {
            index,
            challenge: challenge.clone(),
        };

        self.state.assign(active.clone());
        tracing::debug!(index, amount = active.challenge.amount, "challenge started");

        self.announce(&active);

        let event = Event::ChallengeStarted {
            index,
            kind: active.challenge.kind,
            description: active.challenge.description,
            amount: active.challenge.amount,
            at: Utc::now(),
        };
        self.emit(&event);
        Ok(event)
    }

    /// Restore a previously saved session on top of the counters.
    ///
    /// The saved challenge is kept only if the catalog still holds the same
    /// entry at the same index; otherwise it is dropped.
    pub fn restore_session(&mut self, session: &SessionState) {
        match &session.active_challenge {
            Some(active) if self.catalog.contains_at(active.index, &active.challenge) => {
                self.state.assign(active.clone());
            }
            Some(active) => {
                tracing::warn!(
                    index = active.index,
                    size = self.catalog.size(),
                    "dropping stale active challenge"
                );
                self.state.reset();
            }
            None => {
                self.state.reset();
            }
        }
        self.state.set_level_up_modal(session.level_up_modal_open);
    }

    /// Drop the active challenge, if any.
    pub fn reset_challenge(&mut self) -> Event {
        if let Some(dropped) = self.state.reset() {
            tracing::debug!(index = dropped.index, "challenge reset");
        }
        let event = Event::ChallengeReset { at: Utc::now() };
        self.emit(&event);
        event
    }

    /// Award the active challenge.
    ///
    /// Returns no events when nothing is active. Otherwise returns the
    /// completion event followed by a level-up event if the threshold was
    /// crossed.
    pub fn complete_challenge(&mut self) -> Vec<Event> {
        let Some(completion) = self.state.complete() else {
            tracing::debug!("complete requested without an active challenge");
            return Vec::new();
        };
        self.persist();

        let now = Utc::now();
        let mut events = vec![Event::ChallengeCompleted {
            amount: completion.challenge.challenge.amount,
            current_experience: self.state.current_experience(),
            challenges_completed: self.state.challenges_completed(),
            at: now,
        }];
        if let Some(change) = completion.level_change {
            events.push(self.level_up_event(change));
        }
        for event in &events {
            self.emit(event);
        }
        events
    }

    pub fn level_up(&mut self) -> Event {
        let change = self.state.level_up();
        self.persist();
        let event = self.level_up_event(change);
        self.emit(&event);
        event
    }

    /// Clear the level-up flag. Returns an event only if it was raised.
    pub fn close_level_up_modal(&mut self) -> Option<Event> {
        if !self.state.close_level_up_modal() {
            return None;
        }
        let event = Event::LevelUpDismissed { at: Utc::now() };
        self.emit(&event);
        Some(event)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn level_up_event(&self, change: LevelChange) -> Event {
        tracing::info!(
            old_level = change.old_level,
            new_level = change.new_level,
            "level up"
        );
        Event::LevelUp {
            old_level: change.old_level,
            new_level: change.new_level,
            at: Utc::now(),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.state.progress().save(self.store.as_ref()) {
            tracing::warn!(error = %e, "failed to persist progress");
        }
    }

    fn announce(&self, active: &ActiveChallenge) {
        if let Err(e) = self.sound.play(NOTIFICATION_SOUND) {
            tracing::warn!(error = %e, "failed to play notification sound");
        }
        if self.permission == Permission::Granted {
            let body = new_challenge_body(active.challenge.amount);
            if let Err(e) = self.notifier.notify(NEW_CHALLENGE_TITLE, &body) {
                tracing::warn!(error = %e, "failed to show notification");
            }
        }
    }

    fn emit(&mut self, event: &Event) {
        tracing::trace!(event = event.name(), listeners = self.listeners.len(), "emit");
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
