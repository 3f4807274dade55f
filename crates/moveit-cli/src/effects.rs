//! Terminal adapters for the notification and sound ports.

use std::io::Write;

use moveit_core::ports::PortError;
use moveit_core::{Notifier, Permission, SoundPlayer};

/// Prints notifications to stderr. Permission follows the
/// `notifications.enabled` setting.
pub struct TerminalNotifier {
    enabled: bool,
}

impl TerminalNotifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Notifier for TerminalNotifier {
    fn request_permission(&self) -> Permission {
        if self.enabled {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn notify(&self, title: &str, body: &str) -> Result<(), PortError> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{title} {body}")?;
        Ok(())
    }
}

/// Rings the terminal bell in place of the notification sound.
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl SoundPlayer for TerminalBell {
    fn play(&self, asset: &str) -> Result<(), PortError> {
        if !self.enabled {
            return Ok(());
        }
        tracing::debug!(asset, "ringing terminal bell");
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(b"\x07")?;
        stderr.flush()?;
        Ok(())
    }
}
