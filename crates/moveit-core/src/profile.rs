//! Player profile card: who is playing and at which level.

use serde::{Deserialize, Serialize};

use crate::storage::ProfileConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub avatar_url: String,
    pub level: u32,
}

impl Profile {
    pub fn new(config: &ProfileConfig, level: u32) -> Self {
        Self {
            name: config.name.clone(),
            avatar_url: config.avatar_url.clone(),
            level,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        if !self.avatar_url.is_empty() {
            writeln!(f, "  avatar: {}", self.avatar_url)?;
        }
        write!(f, "  Level {}", self.level)
    }
}
