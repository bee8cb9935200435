use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use opptime_core::export::default_file_name;
use opptime_core::{week_bounds, ExportFormat, ExportOutcome, ExportRequest, Period};

use super::{FormatArg, PeriodArg};
use crate::context::Context;

#[derive(Args)]
pub struct ExportArgs {
    /// Output format; defaults to export.default_format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Records of one day or of one Monday..Sunday week
    #[arg(long, value_enum, default_value = "daily")]
    period: PeriodArg,
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Destination file; defaults to the standard name in export.output_dir
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open()?;
    let format: ExportFormat = args
        .format
        .map(Into::into)
        .unwrap_or(ctx.config.export.default_format);
    let period: Period = args.period.into();
    let reference = args.date.unwrap_or_else(|| Local::now().date_naive());

    let destination = match args.output {
        Some(path) => path,
        None => {
            let dir = ctx
                .config
                .export
                .output_dir
                .as_deref()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            dir.join(default_file_name(period, reference, format))
        }
    };

    let outcome = ctx.tracker.export(&ExportRequest {
        format,
        period,
        reference,
        destination,
    })?;

    if let ExportOutcome::NothingToExport { period, reference } = &outcome {
        let scope = match period {
            Period::Daily => format!("on {reference}"),
            Period::Weekly => {
                let (start, end) = week_bounds(*reference);
                format!("in the week {start} to {end}")
            }
        };
        eprintln!("nothing to export: no time logs {scope}");
    }
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
