use std::{
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt},
};
use tracing::debug;

use crate::utils::time::date_to_log_key;

use super::entities::UsageLogEntity;

/// Interface for abstracting persistence of the day-keyed usage log.
pub trait UsageLogStore {
    /// Files recorded for a day, in insertion order. Empty when the day has
    /// no entry or when no log exists yet.
    fn load(&self, day: NaiveDate) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Overwrites the entry for `day`, preserving entries for all other days.
    fn record(&self, day: NaiveDate, files: Vec<String>) -> impl Future<Output = Result<()>>;
}

/// The main realization of [UsageLogStore]. Keeps the whole log in a single
/// JSON file inside the application directory.
pub struct JsonUsageLog {
    log_path: PathBuf,
}

impl JsonUsageLog {
    pub const FILE_NAME: &'static str = "usage_log.json";

    pub fn new(app_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&app_dir)?;

        Ok(Self {
            log_path: app_dir.join(Self::FILE_NAME),
        })
    }

    async fn read_log(&self) -> Result<UsageLogEntity> {
        async fn extract(path: &Path) -> Result<UsageLogEntity> {
            debug!("Extracting {path:?}");
            let mut file = match File::open(path).await {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    return Ok(UsageLogEntity::default());
                }
                Err(e) => return Err(e.into()),
            };
            file.lock_shared()?;
            let mut contents = String::new();
            let read = file.read_to_string(&mut contents).await;
            file.unlock_async().await?;
            read?;

            parse_log(path, &contents)
        }

        extract(&self.log_path).await
    }

    async fn record_with_file(
        file: &mut File,
        path: &Path,
        day_key: String,
        files: Vec<String>,
    ) -> Result<()> {
        // The process of recording a day is read-modify-write of the whole
        // document, so the exclusive lock covers both the read and the write.
        let mut contents = String::new();
        file.read_to_string(&mut contents).await?;

        let mut log = parse_log(path, &contents)?;
        log.set_files(day_key, files);

        let encoded = serde_json::to_vec(&log)?;

        file.rewind().await?;
        file.set_len(0).await?;
        file.write_all(&encoded).await?;
        file.flush().await?;
        Ok(())
    }
}

/// A missing or empty file is a fresh log. A present but unparsable file is
/// an error, overwriting it would silently drop every recorded day.
fn parse_log(path: &Path, contents: &str) -> Result<UsageLogEntity> {
    if contents.trim().is_empty() {
        return Ok(UsageLogEntity::default());
    }
    serde_json::from_str(contents)
        .with_context(|| format!("Usage log {path:?} holds invalid json"))
}

impl UsageLogStore for JsonUsageLog {
    async fn load(&self, day: NaiveDate) -> Result<Vec<String>> {
        let key = date_to_log_key(day);
        let log = self.read_log().await?;
        Ok(log.files_for(&key).to_vec())
    }

    async fn record(&self, day: NaiveDate, files: Vec<String>) -> Result<()> {
        let mut file = File::options()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.log_path)
            .await?;

        // Semi-safe acquire-release for the log file
        file.lock_exclusive()?;
        let result =
            Self::record_with_file(&mut file, &self.log_path, date_to_log_key(day), files).await;
        file.unlock_async().await?;
        result
    }
}
