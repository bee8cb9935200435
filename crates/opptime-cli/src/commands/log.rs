use chrono::{Local, NaiveDate};
use clap::Subcommand;
use opptime_core::select_period;

use super::PeriodArg;
use crate::context::Context;

#[derive(Subcommand)]
pub enum LogAction {
    /// List saved time logs as JSON
    List {
        /// Only records of this period
        #[arg(long, value_enum)]
        period: Option<PeriodArg>,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Number of saved time logs
    Count,
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open()?;
    let records = ctx.tracker.store().all();

    match action {
        LogAction::List { period, date } => {
            let reference = date.unwrap_or_else(|| Local::now().date_naive());
            let json = match period {
                Some(period) => serde_json::to_string_pretty(&select_period(
                    records,
                    period.into(),
                    reference,
                ))?,
                None => serde_json::to_string_pretty(records)?,
            };
            println!("{json}");
        }
        LogAction::Count => {
            println!("{}", serde_json::json!({ "count": records.len() }));
        }
    }
    Ok(())
}
