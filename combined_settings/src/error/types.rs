//! Primary error enum for translation and combination flows.

use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while producing or combining directives.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The chain is not a call, or a call was made through an unknown member.
    #[error("malformed configuration chain: {message}")]
    MalformedChain {
        /// Description of the structural problem.
        message: String,
    },

    /// A `MinimumLevel` call names neither a severity nor a supported method.
    #[error("unsupported method: {section}.{method}")]
    UnsupportedMethod {
        /// Member the call was made through.
        section: String,
        /// Offending method name.
        method: String,
    },

    /// An argument expression cannot be turned into a directive value.
    #[error("unsupported expression `{expression}`: {reason}")]
    UnsupportedExpression {
        /// Rendering of the offending expression.
        expression: String,
        /// Why the expression was rejected.
        reason: String,
    },

    /// A required input was absent.
    #[error("required argument '{name}' is null")]
    NullArgument {
        /// Name of the missing argument.
        name: String,
    },

    /// Error originating from a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the file loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while extracting values from a configuration provider.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// A user-provided source failed while being pulled.
    #[error("source '{name}' failed: {message}")]
    Source {
        /// Name reported by the failing source.
        name: String,
        /// Human-readable failure description.
        message: String,
    },

    /// Multiple errors occurred.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
