use std::path::PathBuf;

use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::{AppError, AppResult, ReportError};

/// Writes rendered report text to `output`, or to stdout when no path is set.
/// Nothing is written (and no file is created) for an empty report.
///
/// # Errors
///
/// Returns an error when stdout or the output file cannot be written.
pub async fn write_report(rendered: &str, output: Option<&str>) -> AppResult<()> {
    if rendered.is_empty() {
        debug!("Report is empty; nothing to write");
        return Ok(());
    }

    match output {
        Some(path) => {
            tokio::fs::write(path, rendered).await.map_err(|err| {
                AppError::report(ReportError::WriteOutput {
                    path: PathBuf::from(path),
                    source: err,
                })
            })?;
            info!("Report saved to {}", path);
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(rendered.as_bytes())
                .await
                .map_err(|err| AppError::report(ReportError::WriteStdout { source: err }))?;
            stdout
                .flush()
                .await
                .map_err(|err| AppError::report(ReportError::WriteStdout { source: err }))?;
        }
    }
    Ok(())
}
