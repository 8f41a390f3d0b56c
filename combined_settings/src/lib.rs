//! Combine logging configuration directives from several sources.
//!
//! Applications describe their logging setup through flat `(key, value)`
//! directives such as `minimum-level = Verbose` or
//! `write-to:File.path = logs/app.log`. This crate gathers those directives
//! from independently authored sources and folds them into a single
//! [`CombinedSettings`] table where the last write for each key wins.
//!
//! Three kinds of source are supported out of the box:
//!
//! - in-memory key/value pairs ([`KeyValueSource`]),
//! - key/value configuration files ([`FileSource`]),
//! - fluent configuration chains built with [`ConfigChain`] and serialised by
//!   the [`ChainTranslator`] ([`ChainSource`]).
//!
//! Sources are pulled lazily: nothing is read, translated or produced until
//! the combined sequence returned by [`SettingsCombiner::build`] is iterated.
//!
//! ```rust
//! use combined_settings::{ConfigChain, LogLevel, SettingsCombiner};
//!
//! let chain = ConfigChain::new()
//!     .minimum_level()
//!     .level(LogLevel::Verbose)
//!     .enrich()
//!     .with_property("AppName", "from-code");
//!
//! let mut combiner = SettingsCombiner::new();
//! combiner
//!     .add_key_value("enrich:with-property:AppName", "from-defaults")
//!     .add_chain(chain)
//!     .add_key_value("minimum-level", "Warning");
//!
//! let settings = combiner.combine()?;
//! assert_eq!(settings.get("minimum-level"), Some("Warning"));
//! assert_eq!(
//!     settings.get("enrich:with-property:AppName"),
//!     Some("from-code")
//! );
//! # Ok::<_, std::sync::Arc<combined_settings::SettingsError>>(())
//! ```

pub mod chain;
pub mod combine;
pub mod directive;
mod error;
mod level;
mod result_ext;
pub mod source;
pub mod translate;

pub use chain::{ConfigChain, Expr, Literal, MethodCall, ModuleRef, Section, TypeRef};
pub use combine::{Combined, CombinedSettings, SettingsCombiner, combined};
pub use directive::Directive;
pub use error::{AggregatedErrors, SettingsError};
pub use level::{LogLevel, ParseLevelError};
pub use result_ext::SettingsResultExt;
pub use source::{ChainSource, DirectiveIter, DirectiveSource, FileSource, FnSource, KeyValueSource};
pub use translate::ChainTranslator;

/// Result type used throughout the crate.
///
/// Errors are reference counted so a failure observed while combining can be
/// handed to several consumers without cloning the underlying error.
pub type SettingsResult<T> = Result<T, std::sync::Arc<SettingsError>>;
