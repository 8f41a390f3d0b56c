//! Extension for mapping errors to `SettingsResult` concisely.
//!
//! Replaces repetitive `.map_err(|e| Arc::new(SettingsError::from(e)))`
//! chains when converting external error types into the crate's
//! `SettingsResult<T>` alias (`Result<T, Arc<SettingsError>>`).
//!
//! # Examples
//!
//! ```
//! use combined_settings::{SettingsError, SettingsResult, SettingsResultExt};
//! use figment::Figment;
//!
//! fn minimum_level(figment: &Figment) -> SettingsResult<String> {
//!     figment.extract_inner("minimum-level").into_settings()
//! }
//! let err = minimum_level(&Figment::new()).unwrap_err();
//! assert!(matches!(&*err, SettingsError::Gathering(_)));
//! ```

use crate::{SettingsError, SettingsResult};
use std::sync::Arc;

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<SettingsError>` into a `SettingsResult<T>`.
pub trait SettingsResultExt<T, E> {
    /// Convert `Result<T, E>` into `SettingsResult<T>` using
    /// `Into<SettingsError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into
    /// `Arc<SettingsError>`.
    fn into_settings(self) -> SettingsResult<T>;
}

impl<T, E> SettingsResultExt<T, E> for Result<T, E>
where
    E: Into<SettingsError>,
{
    fn into_settings(self) -> SettingsResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
