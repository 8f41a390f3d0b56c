//! Directives read from TOML or JSON settings files.
//!
//! Files are parsed with [`figment`] and flattened into `key: value` pairs,
//! joining nested table keys with `:`. For example
//!
//! ```toml
//! minimum-level = "Debug"
//!
//! [enrich.with-property]
//! AppName = "orders"
//! ```
//!
//! yields `minimum-level = Debug` and `enrich:with-property:AppName = orders`.

mod error;
mod flatten;
mod parser;

use std::borrow::Cow;
use std::iter;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::{Directive, SettingsResult, SettingsResultExt};

use super::{DirectiveIter, DirectiveSource};

/// Directives loaded from a settings file each time the source is
/// enumerated.
///
/// Keys within a file are yielded in lexical order.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: Utf8PathBuf,
    prefix: Option<String>,
    required: bool,
}

impl FileSource {
    /// A required file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            prefix: None,
            required: true,
        }
    }

    /// Keep only keys beneath `prefix`, stripping it from the yielded keys.
    ///
    /// With the prefix `serilog`, the key `serilog:minimum-level` is yielded
    /// as `minimum-level` and keys outside `serilog:` are ignored.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Treat a missing file as empty instead of failing.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Location of the file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read, parse and flatten the file.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::SettingsError::File`] when a required file is
    /// missing, the file cannot be read or parsed, or it holds arrays.
    /// Several arrays are reported together as an aggregate. Extraction
    /// failures surface as [`crate::SettingsError::Gathering`].
    pub fn load(&self) -> SettingsResult<Vec<Directive>> {
        let path = self.path.as_std_path();
        if !path.is_file() {
            if self.required {
                return Err(error::not_found(path, "settings file does not exist"));
            }
            debug!(path = %self.path, "optional settings file missing");
            return Ok(Vec::new());
        }

        let data = std::fs::read_to_string(path).map_err(|e| error::file_error(path, e))?;
        let figment = parser::parse_by_format(path, &data)?;
        let value: serde_json::Value = figment.extract().into_settings()?;
        let directives = flatten::flatten(path, value)?;
        let directives = self.apply_prefix(directives);
        debug!(path = %self.path, count = directives.len(), "loaded settings file");
        Ok(directives)
    }

    fn apply_prefix(&self, directives: Vec<Directive>) -> Vec<Directive> {
        let Some(prefix) = self.prefix.as_deref() else {
            return directives;
        };
        directives
            .into_iter()
            .filter_map(|directive| {
                let (key, value) = directive.into_parts();
                let stripped = key.strip_prefix(prefix)?.strip_prefix(':')?;
                Some(Directive::new(stripped, value))
            })
            .collect()
    }
}

impl DirectiveSource for FileSource {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.path.as_str())
    }

    fn directives(&self) -> DirectiveIter<'_> {
        match self.load() {
            Ok(directives) => Box::new(directives.into_iter().map(Ok)),
            Err(err) => Box::new(iter::once(Err(err))),
        }
    }
}
