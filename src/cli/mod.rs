pub mod mood;
pub mod record;
pub mod report;

use std::{fmt::Display, path::PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use mood::{process_mood_command, MoodCommand};
use record::{process_record_command, RecordCommand};
use report::{process_report_command, ReportCommand};
use tracing::level_filters::LevelFilter;

use crate::{
    mood::tables::MoodTables,
    utils::{
        clock::{Clock, DefaultClock},
        dir::{create_application_default_path, ensure_dir},
        logging::enable_logging,
    },
};

#[derive(Parser, Debug)]
#[command(name = "Moodline", version, long_about = None)]
#[command(about = "Classifies a day of file activity into a mood", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Show the mood for a day of file activity")]
    Mood {
        #[command(flatten)]
        command: MoodCommand,
    },
    #[command(about = "Record the files used on a day, replacing the day's previous entry")]
    Record {
        #[command(flatten)]
        command: RecordCommand,
    },
    #[command(about = "Export a Markdown mood report for a day")]
    Report {
        #[command(flatten)]
        command: ReportCommand,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };

    let app_dir = match args.dir {
        Some(dir) => ensure_dir(dir)?,
        None => create_application_default_path()?,
    };
    enable_logging(&app_dir, logging_level, args.log)?;

    let tables = MoodTables::standard();
    let clock = DefaultClock;

    match args.commands {
        Commands::Mood { command } => {
            process_mood_command(command, &app_dir, &tables, &clock).await
        }
        Commands::Record { command } => process_record_command(command, &app_dir, &clock).await,
        Commands::Report { command } => {
            process_report_command(command, &app_dir, &tables, &clock).await
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

/// Turns a user supplied day into a date, falling back to the command's
/// default day when none was given.
pub(crate) fn resolve_day(
    day: Option<String>,
    date_style: DateStyle,
    clock: &dyn Clock,
    default: NaiveDate,
) -> Result<NaiveDate> {
    let Some(day) = day else {
        return Ok(default);
    };
    match parse_date_string(&day, clock.now(), date_style.into()) {
        Ok(v) => Ok(v.date_naive()),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate day {e}"),
            )
            .into()),
    }
}
