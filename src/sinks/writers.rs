use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::SinkError;

/// Receives the rendered report once the run is done.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Stores the report and returns where it ended up.
    ///
    /// # Errors
    ///
    /// Returns an error when the report cannot be stored.
    async fn persist(&self, report: &str) -> Result<PathBuf, SinkError>;
}

/// Writes each report to `<dir>/<unix seconds>.txt`, creating `dir` on demand.
/// A second report within the same second replaces the first.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    dir: PathBuf,
}

impl FileReportSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn report_path(&self, epoch_secs: i64) -> PathBuf {
        self.dir.join(format!("{}.txt", epoch_secs))
    }

    pub(crate) async fn persist_at(
        &self,
        report: &str,
        epoch_secs: i64,
    ) -> Result<PathBuf, SinkError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|err| SinkError::CreateDir {
                path: self.dir.clone(),
                source: err,
            })?;
        let path = self.report_path(epoch_secs);
        tokio::fs::write(&path, report)
            .await
            .map_err(|err| SinkError::WriteReport {
                path: path.clone(),
                source: err,
            })?;
        Ok(path)
    }
}

#[async_trait]
impl ReportSink for FileReportSink {
    async fn persist(&self, report: &str) -> Result<PathBuf, SinkError> {
        self.persist_at(report, chrono::Utc::now().timestamp()).await
    }
}
