mod catalog;

pub use catalog::ChallengeCatalog;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Body,
    Eye,
}

impl ChallengeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeKind::Body => "body",
            ChallengeKind::Eye => "eye",
        }
    }
}

impl std::fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit task with a fixed experience reward.
///
/// Serialized with a `type` field to stay compatible with the
/// `challenges.json` catalog format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    #[serde(rename = "type")]
    pub kind: ChallengeKind,
    pub description: String,
    /// Experience points awarded on completion.
    pub amount: u32,
}

impl Challenge {
    pub fn new(kind: ChallengeKind, description: impl Into<String>, amount: u32) -> Self {
        Self {
            kind,
            description: description.into(),
            amount,
        }
    }
}

/// The challenge currently assigned to the player, together with its
/// position in the catalog it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveChallenge {
    pub index: usize,
    pub challenge: Challenge,
}
