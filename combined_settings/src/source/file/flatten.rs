//! Flattening of nested settings tables into directives.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::directive::bool_text;
use crate::{Directive, SettingsError, SettingsResult};

use super::error::invalid_data;

/// Flatten a parsed settings document into directives.
///
/// Nested tables join their keys with `:`; `null` values are skipped. Every
/// array found is reported, not just the first.
pub(super) fn flatten(path: &Path, value: Value) -> SettingsResult<Vec<Directive>> {
    let Value::Object(map) = value else {
        return Err(invalid_data(path, "the top level must be a table"));
    };
    let mut flattener = Flattener {
        path,
        directives: Vec::new(),
        errors: Vec::new(),
    };
    flattener.table(None, map);
    match SettingsError::try_aggregate(flattener.errors) {
        None => Ok(flattener.directives),
        Some(err) => Err(Arc::new(err)),
    }
}

struct Flattener<'a> {
    path: &'a Path,
    directives: Vec<Directive>,
    errors: Vec<Arc<SettingsError>>,
}

impl Flattener<'_> {
    fn table(&mut self, prefix: Option<&str>, map: Map<String, Value>) {
        for (key, value) in map {
            let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}:{key}"));
            self.value(full_key, value);
        }
    }

    fn value(&mut self, key: String, value: Value) {
        match value {
            Value::Object(nested) => self.table(Some(&key), nested),
            Value::String(text) => self.directives.push(Directive::new(key, text)),
            Value::Number(number) => self.directives.push(Directive::new(key, number.to_string())),
            Value::Bool(flag) => self.directives.push(Directive::new(key, bool_text(flag))),
            Value::Null => {}
            Value::Array(_) => self.errors.push(invalid_data(
                self.path,
                format!("'{key}' holds an array; directive values must be scalars"),
            )),
        }
    }
}
