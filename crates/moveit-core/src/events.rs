use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::challenge::{ActiveChallenge, ChallengeKind};

/// Every state change of the progression produces an Event.
/// Operations return them; subscribers receive them as they happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    ChallengeStarted {
        index: usize,
        kind: ChallengeKind,
        description: String,
        amount: u32,
        at: DateTime<Utc>,
    },
    ChallengeReset {
        at: DateTime<Utc>,
    },
    ChallengeCompleted {
        amount: u32,
        current_experience: u32,
        challenges_completed: u32,
        at: DateTime<Utc>,
    },
    LevelUp {
        old_level: u32,
        new_level: u32,
        at: DateTime<Utc>,
    },
    LevelUpDismissed {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        level: u32,
        current_experience: u32,
        experience_to_next_level: u32,
        challenges_completed: u32,
        progress_percent: f64,
        active_challenge: Option<ActiveChallenge>,
        is_level_up_modal_open: bool,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Stable name of the event variant, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Event::ChallengeStarted { .. } => "challenge_started",
            Event::ChallengeReset { .. } => "challenge_reset",
            Event::ChallengeCompleted { .. } => "challenge_completed",
            Event::LevelUp { .. } => "level_up",
            Event::LevelUpDismissed { .. } => "level_up_dismissed",
            Event::StateSnapshot { .. } => "state_snapshot",
        }
    }
}
