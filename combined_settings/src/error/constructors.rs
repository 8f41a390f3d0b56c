//! Constructors and aggregation helpers for `SettingsError`.

use std::fmt;
use std::sync::Arc;

use figment::Error as FigmentError;

use super::{AggregatedErrors, SettingsError};

impl SettingsError {
    /// Tries to build a [`SettingsError`] from an iterator of errors.
    ///
    /// Returns `None` when no errors are supplied, the inner error when a
    /// single uniquely owned error is supplied, and [`Self::Aggregate`]
    /// otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(arcs))));
        }
        let last = arcs.pop()?;
        Some(match Arc::try_unwrap(last) {
            Ok(err) => err,
            Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
        })
    }

    /// Build a [`SettingsError`] from at least one error.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`SettingsError::try_aggregate`] when
    /// the list may be empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        Self::try_aggregate(errors).map_or_else(
            || panic!("aggregate requires at least one error"),
            |err| err,
        )
    }

    /// Construct a [`SettingsError::MalformedChain`].
    ///
    /// # Examples
    ///
    /// ```
    /// use combined_settings::SettingsError;
    /// let e = SettingsError::malformed("expected a call");
    /// assert!(matches!(e, SettingsError::MalformedChain { .. }));
    /// ```
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedChain {
            message: message.into(),
        }
    }

    /// Construct a [`SettingsError::UnsupportedMethod`].
    #[must_use]
    pub fn unsupported_method(section: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            section: section.into(),
            method: method.into(),
        }
    }

    /// Construct a [`SettingsError::UnsupportedExpression`] from anything
    /// that renders as the offending expression.
    #[must_use]
    pub fn unsupported_expression(expression: &impl fmt::Display, reason: impl Into<String>) -> Self {
        Self::UnsupportedExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }

    /// Construct a [`SettingsError::NullArgument`].
    #[must_use]
    pub fn null_argument(name: impl Into<String>) -> Self {
        Self::NullArgument { name: name.into() }
    }

    /// Construct a [`SettingsError::Source`] for a failing source.
    ///
    /// # Examples
    ///
    /// ```
    /// use combined_settings::SettingsError;
    /// let e = SettingsError::source_failure("vault", "connection refused");
    /// assert_eq!(e.to_string(), "source 'vault' failed: connection refused");
    /// ```
    #[must_use]
    pub fn source_failure(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Construct a gathering error from a [`figment::Error`].
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }
}
