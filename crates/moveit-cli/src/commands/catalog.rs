use clap::Subcommand;
use moveit_core::Config;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List every challenge in the configured catalog
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::List { json } => {
            let catalog = Config::load()?.catalog()?;
            if json {
                let challenges: Vec<_> = catalog.iter().collect();
                println!("{}", serde_json::to_string_pretty(&challenges)?);
            } else {
                for (index, challenge) in catalog.iter().enumerate() {
                    println!(
                        "{index:>3}  {:<4}  {:>4}xp  {}",
                        challenge.kind.as_str(), challenge.amount, challenge.description
                    );
                }
            }
        }
    }
    Ok(())
}
