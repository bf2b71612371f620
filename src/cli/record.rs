use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::{
    storage::usage_log::{JsonUsageLog, UsageLogStore},
    utils::clock::Clock,
};

use super::{resolve_day, DateStyle};

#[derive(Debug, Parser)]
pub struct RecordCommand {
    #[arg(
        required = true,
        help = "File paths to record for the day. Replaces the day's previous entry"
    )]
    files: Vec<String>,
    #[arg(
        long = "day",
        short,
        help = "Day to record for. Examples are \"yesterday\", \"15/03/2025\". Defaults to today"
    )]
    day: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

/// Command to process `record` command. Overwrites the day's entry in the
/// usage log with the given paths.
pub async fn process_record_command(
    RecordCommand {
        files,
        day,
        date_style,
    }: RecordCommand,
    app_dir: &Path,
    clock: &dyn Clock,
) -> Result<()> {
    let day = resolve_day(day, date_style, clock, clock.now().date_naive())?;

    let store = JsonUsageLog::new(app_dir.to_owned())?;
    let count = files.len();
    debug!("Recording {count} files for {day}");
    store.record(day, files).await?;

    println!("Recorded {count} files for {day}");
    Ok(())
}
