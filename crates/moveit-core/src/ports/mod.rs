//! Side-effect ports of the progression state machine.
//!
//! The state machine never talks to a concrete store, notification system or
//! audio device. It calls these traits after each pure transition and treats
//! every failure as best-effort: the error is logged and dropped.

mod store;

pub use store::{
    MemoryStore, Progress, ProgressStore, CHALLENGES_COMPLETED_KEY, CURRENT_EXPERIENCE_KEY,
    LEVEL_KEY,
};

use serde::{Deserialize, Serialize};

/// Error type returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Title of the notification fired when a challenge starts.
pub const NEW_CHALLENGE_TITLE: &str = "New challenge 🎉";

/// Sound asset played when a challenge starts.
pub const NOTIFICATION_SOUND: &str = "notification.mp3";

/// Body of the notification fired when a challenge starts.
pub fn new_challenge_body(amount: u32) -> String {
    format!("Worth {amount}xp!")
}

/// Result of a notification permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
    #[default]
    Default,
}

/// System notification sink.
pub trait Notifier {
    /// Ask the user for permission to show notifications.
    /// Called once when a session is built.
    fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    /// Show a notification. Only called after permission was granted.
    fn notify(&self, title: &str, body: &str) -> Result<(), PortError>;
}

/// Audio cue sink.
pub trait SoundPlayer {
    fn play(&self, asset: &str) -> Result<(), PortError>;
}

/// Notifier that never asks for permission and drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _body: &str) -> Result<(), PortError> {
        Ok(())
    }
}

/// Sound player that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _asset: &str) -> Result<(), PortError> {
        Ok(())
    }
}
