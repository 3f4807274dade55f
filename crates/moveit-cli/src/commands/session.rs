//! Loads and saves the progression between CLI invocations.
//!
//! The counters live under their own keys in the kv table; the active
//! challenge and the level-up flag are kept as JSON under `session`.

use moveit_core::{ChallengesProvider, Config, Database, Progress, SessionState};

use crate::effects::{TerminalBell, TerminalNotifier};

const SESSION_KEY: &str = "session";

fn load_session(db: &Database) -> SessionState {
    if let Ok(Some(json)) = db.kv_get(SESSION_KEY) {
        match serde_json::from_str::<SessionState>(&json) {
            Ok(session) => return session,
            Err(e) => tracing::warn!(error = %e, "discarding unreadable session"),
        }
    }
    SessionState::default()
}

fn save_session(db: &Database, session: &SessionState) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(session)?;
    db.kv_set(SESSION_KEY, &json)?;
    Ok(())
}

/// Open the database and rebuild the provider with the saved session.
pub fn open() -> Result<ChallengesProvider, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    let progress = Progress::load(&db);
    let session = load_session(&db);

    let mut provider = ChallengesProvider::builder(progress)
        .catalog(config.catalog()?)
        .store(db)
        .notifier(TerminalNotifier::new(config.notifications.enabled))
        .sound(TerminalBell::new(config.notifications.sound))
        .build()?;
    provider.restore_session(&session);
    Ok(provider)
}

/// Persist the non-counter part of the session.
pub fn close(provider: &ChallengesProvider) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    save_session(&db, &provider.session())
}
