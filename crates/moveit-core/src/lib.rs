//! # Move.it Core Library
//!
//! This library provides the core logic of the Move.it break-challenge game:
//! a player earns experience by completing short body and eye challenges
//! and levels up along the way. The CLI binary is a thin layer over it.
//!
//! ## Architecture
//!
//! - **Challenge Catalog**: immutable list of challenges, embedded from
//!   `challenges.json` or loaded from a configured file
//! - **Progression**: pure level/experience transitions wrapped by a
//!   provider that owns the catalog, the RNG and the side-effect ports
//! - **Ports**: persistence, notification and sound traits; failures are
//!   logged and never affect the in-memory state
//! - **Storage**: SQLite key-value store and TOML configuration
//!
//! ## Key Components
//!
//! - [`ChallengesProvider`]: the progression state machine
//! - [`ChallengeCatalog`]: challenge source
//! - [`Database`]: persistence of the counters
//! - [`Config`]: application configuration management

pub mod challenge;
pub mod error;
pub mod events;
pub mod ports;
pub mod profile;
pub mod progression;
pub mod storage;

pub use challenge::{ActiveChallenge, Challenge, ChallengeCatalog, ChallengeKind};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use ports::{Notifier, Permission, Progress, ProgressStore, SoundPlayer};
pub use profile::Profile;
pub use progression::{
    experience_to_next_level, ChallengesProvider, ProgressionState, SessionState,
};
pub use storage::{Config, Database};
