use std::path::PathBuf;

use crate::error::ConfigError;

/// Reads the optional request body file.
///
/// `None` (or an empty path) means no body. A path that cannot be read is an
/// error, never an empty body.
///
/// # Errors
///
/// Returns [`ConfigError::ReadBody`] when the file cannot be read.
pub async fn read_body(path: Option<&str>) -> Result<Option<Vec<u8>>, ConfigError> {
    let Some(path) = path.filter(|path| !path.is_empty()) else {
        return Ok(None);
    };
    tokio::fs::read(path)
        .await
        .map(Some)
        .map_err(|err| ConfigError::ReadBody {
            path: PathBuf::from(path),
            source: err,
        })
}
