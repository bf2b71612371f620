use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// The struct used for storing the usage log on disk. One JSON object mapping
/// an ISO date string to the ordered list of file paths recorded for that
/// day. Days are only ever overwritten, never deleted.
#[derive(PartialEq, Eq, Debug, Default, Serialize, Deserialize, Clone)]
pub struct UsageLogEntity(BTreeMap<String, Vec<String>>);

impl UsageLogEntity {
    pub fn files_for(&self, day_key: &str) -> &[String] {
        self.0.get(day_key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces the entry for `day_key`, keeping every other day intact.
    pub fn set_files(&mut self, day_key: String, files: Vec<String>) {
        self.0.insert(day_key, files);
    }

    pub fn day_count(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::UsageLogEntity;

    #[test]
    fn set_files_replaces_only_the_given_day() {
        let mut log = UsageLogEntity::default();
        log.set_files("2025-03-15".into(), vec!["a.py".into()]);
        log.set_files("2025-03-16".into(), vec!["b.mp4".into()]);

        log.set_files("2025-03-15".into(), vec!["c.txt".into(), "d.md".into()]);

        assert_eq!(log.day_count(), 2);
        assert_eq!(log.files_for("2025-03-15"), ["c.txt", "d.md"]);
        assert_eq!(log.files_for("2025-03-16"), ["b.mp4"]);
        assert!(log.files_for("2025-03-17").is_empty());
    }
}
