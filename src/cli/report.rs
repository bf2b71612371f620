use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use crate::{
    mood::{classifier::classify, tables::MoodTables},
    storage::usage_log::{JsonUsageLog, UsageLogStore},
    utils::{clock::Clock, time::previous_day},
};

use super::{mood::choose_message, resolve_day, DateStyle};

#[derive(Debug, Parser)]
pub struct ReportCommand {
    #[arg(
        long = "day",
        short,
        help = "Day to report on. Examples are \"yesterday\", \"15/03/2025\". Defaults to yesterday"
    )]
    day: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(long, short, help = "Write the report to this path instead of stdout")]
    out: Option<PathBuf>,
    #[arg(long, help = "Seed for the message picker. Pins the reported message")]
    seed: Option<u64>,
}

/// Command to process `report` command. Renders a Markdown mood report for a
/// day and writes it to a file or stdout.
pub async fn process_report_command(
    ReportCommand {
        day,
        date_style,
        out,
        seed,
    }: ReportCommand,
    app_dir: &Path,
    tables: &MoodTables,
    clock: &dyn Clock,
) -> Result<()> {
    let day = resolve_day(day, date_style, clock, previous_day(clock.now().date_naive()))?;

    let store = JsonUsageLog::new(app_dir.to_owned())?;
    let files = store.load(day).await?;

    let category = classify(&files, tables);
    let mood = choose_message(seed, category, tables);
    let report = render_report(day, mood, &files);

    match out {
        Some(path) => {
            tokio::fs::write(&path, &report)
                .await
                .with_context(|| format!("Failed to write report to {path:?}"))?;
            println!("Report exported to {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}

/// Markdown rendering of a day's mood and file list.
fn render_report(day: NaiveDate, mood: &str, files: &[String]) -> String {
    let mut report = format!("# Moodline Report\n\n**Date:** {day}\n\n## Mood:\n{mood}\n\n## Files:\n");
    for file in files {
        report.push_str("- ");
        report.push_str(file);
        report.push('\n');
    }
    report
}
