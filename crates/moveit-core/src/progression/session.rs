use serde::{Deserialize, Serialize};

use crate::challenge::ActiveChallenge;

/// The part of a session the counters do not capture.
///
/// Front ends that outlive a single process (the CLI) store this next to
/// the counters so the active challenge and the level-up flag survive. The
/// challenge is stored whole so a restore against a different catalog can
/// tell that the entry at its index changed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub active_challenge: Option<ActiveChallenge>,
    #[serde(default)]
    pub level_up_modal_open: bool,
}
