//! Error constructors shared by the file source.

use crate::SettingsError;

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

/// Construct a [`SettingsError::File`] for a configuration path.
pub(super) fn file_error(
    path: &Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<SettingsError> {
    Arc::new(SettingsError::File {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

pub(super) fn invalid_data(path: &Path, msg: impl Into<String>) -> Arc<SettingsError> {
    file_error(
        path,
        std::io::Error::new(std::io::ErrorKind::InvalidData, msg.into()),
    )
}

pub(super) fn not_found(path: &Path, msg: impl Into<String>) -> Arc<SettingsError> {
    file_error(
        path,
        std::io::Error::new(std::io::ErrorKind::NotFound, msg.into()),
    )
}
