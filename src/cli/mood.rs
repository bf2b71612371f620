use std::path::Path;

use ansi_term::{Colour, Style};
use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::{
    mood::{
        classifier::{classify, pick_message},
        tables::{MoodCategory, MoodTables},
    },
    storage::usage_log::{JsonUsageLog, UsageLogStore},
    utils::{clock::Clock, time::previous_day},
};

use super::{resolve_day, DateStyle};

#[derive(Debug, Parser)]
pub struct MoodCommand {
    #[arg(
        long = "day",
        short,
        help = "Day to classify. Examples are \"yesterday\", \"15/03/2025\". Defaults to yesterday"
    )]
    day: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(long, help = "Seed for the message picker. Pins the printed message")]
    seed: Option<u64>,
}

/// Command to process `mood` command. Loads the files recorded for a day and
/// prints the mood they classify into, together with the file list.
pub async fn process_mood_command(
    MoodCommand {
        day,
        date_style,
        seed,
    }: MoodCommand,
    app_dir: &Path,
    tables: &MoodTables,
    clock: &dyn Clock,
) -> Result<()> {
    let day = resolve_day(day, date_style, clock, previous_day(clock.now().date_naive()))?;

    let store = JsonUsageLog::new(app_dir.to_owned())?;
    let files = store.load(day).await?;

    let category = classify(&files, tables);
    debug!("Classified {} files for {day} as {category}", files.len());
    let message = choose_message(seed, category, tables);

    println!(
        "{} {day}",
        Style::new().bold().paint("Your mood for"),
    );
    println!("{}", Colour::Yellow.italic().paint(message));

    if files.is_empty() {
        println!("No files recorded for {day}");
    } else {
        println!();
        println!("{}", Style::new().bold().paint("Files you used:"));
        for file in &files {
            println!("  {file}");
        }
    }
    Ok(())
}

/// An explicit seed pins the rng so runs become reproducible.
pub(super) fn choose_message<'a>(
    seed: Option<u64>,
    category: MoodCategory,
    tables: &'a MoodTables,
) -> &'a str {
    match seed {
        Some(seed) => pick_message(category, tables, &mut StdRng::seed_from_u64(seed)),
        None => pick_message(category, tables, &mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use crate::mood::tables::{MoodCategory, MoodTables};

    use super::choose_message;

    #[test]
    fn seeded_choice_is_stable() {
        let tables = MoodTables::standard();

        let first = choose_message(Some(7), MoodCategory::Web, &tables);
        let second = choose_message(Some(7), MoodCategory::Web, &tables);

        assert_eq!(first, second);
        assert!(tables
            .messages_for(MoodCategory::Web)
            .iter()
            .any(|m| m == first));
    }

    #[test]
    fn unseeded_choice_stays_in_the_catalog() {
        let tables = MoodTables::standard();

        let message = choose_message(None, MoodCategory::Mixed, &tables);

        assert!(tables
            .messages_for(MoodCategory::Mixed)
            .iter()
            .any(|m| m == message));
    }
}
