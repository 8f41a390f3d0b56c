//! Conversions between external error types and `SettingsError`.

use figment::Error as FigmentError;

use super::SettingsError;

/// Provider extraction failures become [`SettingsError::Gathering`].
impl From<FigmentError> for SettingsError {
    fn from(e: FigmentError) -> Self {
        Self::gathering(e)
    }
}
