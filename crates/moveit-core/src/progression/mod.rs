mod provider;
mod session;
mod state;

pub use provider::{ChallengesProvider, Listener, ProviderBuilder, SubscriptionId};
pub use session::SessionState;
pub use state::{experience_to_next_level, Completion, LevelChange, Phase, ProgressionState};
