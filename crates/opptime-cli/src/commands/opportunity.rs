use clap::Subcommand;
use opptime_core::OpportunityDirectory;

use crate::context::Context;

#[derive(Subcommand)]
pub enum OpportunityAction {
    /// List opportunities in the directory
    List,
    /// Show one opportunity
    Show {
        /// Record id
        id: String,
    },
}

pub fn run(action: OpportunityAction) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open()?;
    let directory = ctx.tracker.directory();

    match action {
        OpportunityAction::List => {
            let all: Vec<_> = directory.iter().collect();
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
        OpportunityAction::Show { id } => {
            let opportunity = directory
                .lookup(&id)
                .ok_or_else(|| format!("opportunity not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&opportunity)?);
        }
    }
    Ok(())
}
