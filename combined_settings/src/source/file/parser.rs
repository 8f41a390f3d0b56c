//! Format-specific parsing for key/value settings files.

use crate::SettingsResult;

use figment::Figment;
#[cfg(feature = "json")]
use figment::providers::Json;
#[cfg(feature = "toml")]
use figment::providers::Toml;
#[cfg(any(feature = "json", feature = "toml"))]
use figment::providers::Format;

use std::path::Path;

use super::error::file_error;

/// Parse settings data according to the file extension.
///
/// `.json` files are read as JSON; everything else as TOML. Each format
/// requires its cargo feature.
///
/// # Errors
///
/// Returns a [`crate::SettingsError::File`] if the contents fail to parse
/// or the format's feature is disabled.
pub(super) fn parse_by_format(path: &Path, data: &str) -> SettingsResult<Figment> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let figment = match ext.as_deref() {
        Some("json") => {
            #[cfg(feature = "json")]
            {
                serde_json::from_str::<serde_json::Value>(data).map_err(|e| file_error(path, e))?;
                Figment::from(Json::string(data))
            }
            #[cfg(not(feature = "json"))]
            {
                return Err(file_error(
                    path,
                    std::io::Error::other(
                        "json feature disabled: enable the 'json' feature to support this file format",
                    ),
                ));
            }
        }
        _ => {
            #[cfg(feature = "toml")]
            {
                // Validate first so parse failures carry this file's path.
                toml::from_str::<toml::Value>(data).map_err(|e| file_error(path, e))?;
                Figment::from(Toml::string(data))
            }
            #[cfg(not(feature = "toml"))]
            {
                return Err(file_error(
                    path,
                    std::io::Error::other(
                        "toml feature disabled: enable the 'toml' feature to support this file format",
                    ),
                ));
            }
        }
    };

    Ok(figment)
}
