use clap::Subcommand;
use opptime_core::Config;

#[derive(Subcommand)]
pub enum ActivityAction {
    /// List the configured activities
    List,
    /// List the configured roles
    Roles,
}

pub fn run(action: ActivityAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let names = match action {
        ActivityAction::List => &config.tracker.activities,
        ActivityAction::Roles => &config.tracker.roles,
    };
    println!("{}", serde_json::to_string_pretty(names)?);
    Ok(())
}
