use clap::Subcommand;

use super::session;

#[derive(Subcommand)]
pub enum LevelAction {
    /// Acknowledge the last level-up
    Dismiss,
}

pub fn run(action: LevelAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut provider = session::open()?;

    match action {
        LevelAction::Dismiss => match provider.close_level_up_modal() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => eprintln!("no pending level-up"),
        },
    }

    session::close(&provider)?;
    Ok(())
}
