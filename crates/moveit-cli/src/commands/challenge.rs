use clap::Subcommand;

use super::session;

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Draw a random challenge and make it active
    Start,
    /// Complete the active challenge and collect its experience
    Complete,
    /// Give up the active challenge
    Reset,
    /// Print current progression state as JSON
    Status,
}

pub fn run(action: ChallengeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut provider = session::open()?;

    match action {
        ChallengeAction::Start => {
            let event = provider.start_new_challenge()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ChallengeAction::Complete => {
            let events = provider.complete_challenge();
            if events.is_empty() {
                eprintln!("no active challenge");
                let snapshot = provider.snapshot();
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            for event in &events {
                println!("{}", serde_json::to_string_pretty(event)?);
            }
        }
        ChallengeAction::Reset => {
            let event = provider.reset_challenge();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ChallengeAction::Status => {
            let snapshot = provider.snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    session::close(&provider)?;
    Ok(())
}
