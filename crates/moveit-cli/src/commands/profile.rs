use clap::Subcommand;
use moveit_core::{Config, Database, Profile, Progress};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the player card
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show { json } => {
            let config = Config::load()?;
            let db = Database::open()?;
            let progress = Progress::load(&db);
            let profile = Profile::new(&config.profile, progress.level);
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{profile}");
            }
        }
    }
    Ok(())
}
