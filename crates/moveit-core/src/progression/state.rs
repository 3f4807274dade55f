//! Pure progression transitions.
//!
//! `ProgressionState` knows nothing about catalogs, stores or notifications.
//! Every method is a plain state change and reports what happened so the
//! caller can dispatch side effects afterwards.
//!
//! ## State Transitions
//!
//! ```text
//! Idle --assign--> Active --complete--> Idle (maybe level-up)
//!                  Active --reset-----> Idle
//! ```

use serde::{Deserialize, Serialize};

use crate::challenge::ActiveChallenge;
use crate::ports::Progress;

/// Experience needed to leave `level`: `((level + 1) * 4)^2`.
///
/// Saturates at `u32::MAX` for absurd levels.
pub fn experience_to_next_level(level: u32) -> u32 {
    let base = level.saturating_add(1).saturating_mul(4);
    base.saturating_mul(base)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub old_level: u32,
    pub new_level: u32,
}

/// Outcome of a successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub challenge: ActiveChallenge,
    pub level_change: Option<LevelChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionState {
    level: u32,
    current_experience: u32,
    challenges_completed: u32,
    active_challenge: Option<ActiveChallenge>,
    /// UI acknowledgment flag raised by a level-up; not part of the
    /// persisted counters.
    level_up_modal_open: bool,
}

impl ProgressionState {
    pub fn new(progress: Progress) -> Self {
        Self {
            level: progress.level,
            current_experience: progress.current_experience,
            challenges_completed: progress.challenges_completed,
            active_challenge: None,
            level_up_modal_open: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn current_experience(&self) -> u32 {
        self.current_experience
    }

    pub fn experience_to_next_level(&self) -> u32 {
        experience_to_next_level(self.level)
    }

    pub fn challenges_completed(&self) -> u32 {
        self.challenges_completed
    }

    pub fn active_challenge(&self) -> Option<&ActiveChallenge> {
        self.active_challenge.as_ref()
    }

    pub fn is_level_up_modal_open(&self) -> bool {
        self.level_up_modal_open
    }

    pub fn phase(&self) -> Phase {
        if self.active_challenge.is_some() {
            Phase::Active
        } else {
            Phase::Idle
        }
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.level, self.current_experience, self.challenges_completed)
    }

    /// 0.0 .. 100.0 progress towards the next level.
    pub fn progress_percent(&self) -> f64 {
        let threshold = self.experience_to_next_level();
        if threshold == 0 {
            return 0.0;
        }
        (self.current_experience as f64 / threshold as f64 * 100.0).min(100.0)
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Make `challenge` the active one, replacing any previous assignment.
    pub fn assign(&mut self, challenge: ActiveChallenge) {
        self.active_challenge = Some(challenge);
    }

    /// Drop the active challenge. Returns it if there was one.
    pub fn reset(&mut self) -> Option<ActiveChallenge> {
        self.active_challenge.take()
    }

    pub fn level_up(&mut self) -> LevelChange {
        let old_level = self.level;
        self.level = self.level.saturating_add(1);
        self.level_up_modal_open = true;
        LevelChange {
            old_level,
            new_level: self.level,
        }
    }

    /// Clear the level-up flag. Returns whether it was raised.
    pub fn close_level_up_modal(&mut self) -> bool {
        std::mem::replace(&mut self.level_up_modal_open, false)
    }

    pub(crate) fn set_level_up_modal(&mut self, open: bool) {
        self.level_up_modal_open = open;
    }

    /// Award the active challenge.
    ///
    /// Crossing the threshold subtracts it once and levels up once, even
    /// when the reward spans more than one level.
    pub fn complete(&mut self) -> Option<Completion> {
        let challenge = self.active_challenge.take()?;

        let threshold = self.experience_to_next_level();
        let mut final_experience = self
            .current_experience
            .saturating_add(challenge.challenge.amount);

        let mut level_change = None;
        if final_experience >= threshold {
            final_experience -= threshold;
            level_change = Some(self.level_up());
        }

        self.current_experience = final_experience;
        self.challenges_completed = self.challenges_completed.saturating_add(1);

        Some(Completion {
            challenge,
            level_change,
        })
    }
}
