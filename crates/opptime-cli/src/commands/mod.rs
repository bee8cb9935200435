pub mod activity;
pub mod config;
pub mod export;
pub mod log;
pub mod opportunity;
pub mod timer;

use clap::ValueEnum;
use opptime_core::{ExportFormat, Period};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PeriodArg {
    /// Today (or --date) only
    Daily,
    /// Monday..Sunday week containing today (or --date)
    Weekly,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Daily => Period::Daily,
            PeriodArg::Weekly => Period::Weekly,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Xlsx,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Xlsx => ExportFormat::Xlsx,
        }
    }
}
