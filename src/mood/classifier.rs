use rand::seq::IndexedRandom;
use rand::Rng;

use super::tables::{MoodCategory, MoodTables};

/// Determines the dominant category for a day worth of files.
///
/// Counts how many files match each rule category by extension and returns
/// the category with the most matches. A file may count toward several
/// categories if its extension appears in more than one rule. Ties go to the
/// category listed first in the rule table. When nothing matched at all,
/// including empty input, the result is [MoodCategory::Mixed].
pub fn classify(files: &[String], tables: &MoodTables) -> MoodCategory {
    let mut counts = vec![0usize; tables.rules().len()];

    for file in files {
        let Some(extension) = extension_of(file) else {
            continue;
        };
        for (index, (_, extensions)) in tables.rules().iter().enumerate() {
            if extensions.contains(&extension) {
                counts[index] += 1;
            }
        }
    }

    let mut top: Option<(usize, usize)> = None;
    for (index, &count) in counts.iter().enumerate() {
        match top {
            Some((_, best)) if count <= best => {}
            _ => top = Some((index, count)),
        }
    }

    match top {
        Some((index, count)) if count > 0 => tables.rules()[index].0,
        _ => MoodCategory::Mixed,
    }
}

/// Picks one of the category's messages at random. Randomness is confined to
/// this step, classification itself is deterministic.
pub fn pick_message<'a, R: Rng + ?Sized>(
    category: MoodCategory,
    tables: &'a MoodTables,
    rng: &mut R,
) -> &'a str {
    tables
        .messages_for(category)
        .choose(rng)
        .map(String::as_str)
        .expect("Tables are validated to have messages for every category")
}

/// A path without a `.` has no extension and matches nothing.
fn extension_of(path: &str) -> Option<String> {
    let (_, extension) = path.rsplit_once('.')?;
    Some(extension.to_lowercase())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::mood::tables::{MoodCategory, MoodTables};

    use super::{classify, extension_of, pick_message};

    fn paths(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_input_falls_back_to_mixed() {
        let tables = MoodTables::standard();
        assert_eq!(classify(&[], &tables), MoodCategory::Mixed);
    }

    #[test]
    fn unrecognized_extensions_fall_back_to_mixed() {
        let tables = MoodTables::standard();
        let files = paths(&["/tmp/archive.zip", "/tmp/image.png", "/tmp/noext"]);
        assert_eq!(classify(&files, &tables), MoodCategory::Mixed);
    }

    #[test]
    fn python_files_classify_as_code() {
        let tables = MoodTables::standard();
        let files = paths(&["a.py", "b.py", "/home/user/c.py"]);
        assert_eq!(classify(&files, &tables), MoodCategory::Code);
    }

    #[test]
    fn majority_category_wins() {
        let tables = MoodTables::standard();
        let files = paths(&["a.mp4", "b.mp4", "c.mp4", "script.py"]);
        assert_eq!(classify(&files, &tables), MoodCategory::Binge);
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        let tables = MoodTables::standard();
        let files = paths(&["/downloads/MOVIE.MP4", "/downloads/show.Mkv"]);
        assert_eq!(classify(&files, &tables), MoodCategory::Binge);
    }

    #[test]
    fn ties_go_to_the_earlier_rule_category() {
        let tables = MoodTables::standard();
        // One code file and one binge file. Code comes first in the table.
        let files = paths(&["main.c", "movie.avi"]);
        assert_eq!(classify(&files, &tables), MoodCategory::Code);
    }

    #[test]
    fn classification_is_deterministic() {
        let tables = MoodTables::standard();
        let files = paths(&["notes.txt", "report.pdf", "talk.pptx", "draft.md"]);
        let first = classify(&files, &tables);
        for _ in 0..10 {
            assert_eq!(classify(&files, &tables), first);
        }
    }

    #[test]
    fn overlapping_rules_count_a_file_twice() {
        let rules = vec![
            (
                MoodCategory::Code,
                ["rs"].iter().map(|v| v.to_string()).collect(),
            ),
            (
                MoodCategory::Work,
                ["rs", "pdf"].iter().map(|v| v.to_string()).collect(),
            ),
        ];
        let messages = HashMap::from([
            (MoodCategory::Code, vec!["code".to_string()]),
            (MoodCategory::Work, vec!["work".to_string()]),
            (MoodCategory::Mixed, vec!["mixed".to_string()]),
        ]);
        let tables = MoodTables::new(rules, messages).unwrap();

        // lib.rs counts for both categories, the pdf breaks the tie for work.
        let files = paths(&["lib.rs", "invoice.pdf"]);
        assert_eq!(classify(&files, &tables), MoodCategory::Work);
    }

    #[test]
    fn picked_message_comes_from_the_category_catalog() {
        let tables = MoodTables::standard();
        let mut rng = StdRng::seed_from_u64(17);
        for category in [
            MoodCategory::Code,
            MoodCategory::Binge,
            MoodCategory::Work,
            MoodCategory::Web,
            MoodCategory::Notes,
            MoodCategory::Mixed,
        ] {
            for _ in 0..20 {
                let message = pick_message(category, &tables, &mut rng);
                assert!(!message.is_empty());
                assert!(tables
                    .messages_for(category)
                    .iter()
                    .any(|m| m == message));
            }
        }
    }

    #[test]
    fn seeded_message_choice_is_reproducible() {
        let tables = MoodTables::standard();
        let first = pick_message(
            MoodCategory::Notes,
            &tables,
            &mut StdRng::seed_from_u64(42),
        );
        let second = pick_message(
            MoodCategory::Notes,
            &tables,
            &mut StdRng::seed_from_u64(42),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn extension_extraction_edge_cases() {
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("UPPER.PY").as_deref(), Some("py"));
        assert_eq!(extension_of("trailing.").as_deref(), Some(""));
        assert_eq!(extension_of("no_extension"), None);
    }
}
