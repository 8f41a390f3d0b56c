//! Helpers for writing settings files inside a `figment::Jail`.
//!
//! The jail changes into a fresh temporary directory, so tests can create
//! `settings.toml` and point a [`combined_settings::FileSource`] at the
//! relative path.

use anyhow::{Result, anyhow};

/// Runs `f` inside a [`figment::Jail`] and returns its output.
///
/// The temporary directory is removed once `f` returns, whether or not it
/// succeeded.
///
/// ```rust
/// use combined_settings::FileSource;
/// use combined_settings_test_helpers::{jail_error, with_jail};
///
/// let count = with_jail(|j| {
///     j.create_file("settings.toml", "minimum-level = \"Debug\"")?;
///     let directives = FileSource::new("settings.toml").load().map_err(jail_error)?;
///     Ok(directives.len())
/// })?;
/// assert_eq!(count, 1);
/// # Ok::<_, anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if the jail cannot be created or `f` fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Reports any displayable error, such as a
/// [`combined_settings::SettingsError`], as a [`figment::Error`] so it can
/// leave a jail closure with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used with `map_err`, which hands over the error by value"
)]
pub fn jail_error<E: std::fmt::Display>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
