use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::models::StoredSurveyRecord;

/// Append-only newline-delimited JSON log of stored survey records.
///
/// Appends are serialized through a single writer lock and each record is
/// written with one `write_all` on an `O_APPEND` handle, so concurrent
/// requests never interleave partial lines.
pub struct SurveyLog {
    path: PathBuf,
    writer: Mutex<()>,
}

impl SurveyLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log's parent directory if it does not exist yet.
    pub async fn ensure_parent(&self) -> std::io::Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir).await,
            _ => Ok(()),
        }
    }

    pub async fn append(&self, record: &StoredSurveyRecord) -> std::io::Result<()> {
        // Fully encode before touching the file so a failure writes nothing.
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let _guard = self.writer.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;

        Ok(())
    }
}
