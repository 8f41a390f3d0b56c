//! Producers of directive sequences.
//!
//! A [`DirectiveSource`] yields directives each time it is enumerated. The
//! [`crate::SettingsCombiner`] enumerates every registered source exactly
//! once per combination, and only when the combined sequence is consumed, so
//! implementations should defer any expensive work (reading files,
//! translating chains) to [`DirectiveSource::directives`].

mod chain;
mod file;

use std::borrow::Cow;
use std::iter;

use crate::{Directive, SettingsResult};

pub use chain::ChainSource;
pub use file::FileSource;

/// Iterator returned by [`DirectiveSource::directives`].
pub type DirectiveIter<'a> = Box<dyn Iterator<Item = SettingsResult<Directive>> + 'a>;

/// Anything that lazily produces an ordered sequence of directives.
pub trait DirectiveSource {
    /// Name used when reporting on the source.
    fn name(&self) -> Cow<'_, str>;

    /// Produce the directives, in order.
    ///
    /// Each call runs the source's production logic again. An `Err` item
    /// reports a failure; consumers stop at the first one.
    fn directives(&self) -> DirectiveIter<'_>;
}

/// In-memory key/value pairs, yielded exactly as supplied.
#[derive(Clone, Debug, Default)]
pub struct KeyValueSource {
    name: String,
    directives: Vec<Directive>,
}

impl KeyValueSource {
    /// A named source holding `pairs`.
    #[must_use]
    pub fn new<I, D>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Directive>,
    {
        Self {
            name: name.into(),
            directives: pairs.into_iter().map(Into::into).collect(),
        }
    }

    /// A source holding a single pair.
    #[must_use]
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new("key-value", [Directive::new(key, value)])
    }

    /// Number of pairs held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.directives.len()
    }

    /// Returns `true` when no pairs are held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

impl DirectiveSource for KeyValueSource {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn directives(&self) -> DirectiveIter<'_> {
        Box::new(self.directives.iter().cloned().map(Ok))
    }
}

/// A source backed by a closure run on every enumeration.
///
/// ```rust
/// use combined_settings::{Directive, DirectiveSource, FnSource};
///
/// let source = FnSource::new("defaults", || {
///     Ok(vec![Directive::new("minimum-level", "Information")])
/// });
/// let produced: Vec<_> = source.directives().collect::<Result<_, _>>()?;
/// assert_eq!(produced, [Directive::new("minimum-level", "Information")]);
/// # Ok::<_, std::sync::Arc<combined_settings::SettingsError>>(())
/// ```
pub struct FnSource<F> {
    name: String,
    producer: F,
}

impl<F, I> FnSource<F>
where
    F: Fn() -> SettingsResult<I>,
    I: IntoIterator<Item = Directive>,
{
    /// A named source running `producer` on each enumeration.
    #[must_use]
    pub fn new(name: impl Into<String>, producer: F) -> Self {
        Self {
            name: name.into(),
            producer,
        }
    }
}

impl<F, I> DirectiveSource for FnSource<F>
where
    F: Fn() -> SettingsResult<I>,
    I: IntoIterator<Item = Directive>,
    I::IntoIter: 'static,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn directives(&self) -> DirectiveIter<'_> {
        match (self.producer)() {
            Ok(directives) => Box::new(directives.into_iter().map(Ok)),
            Err(err) => Box::new(iter::once(Err(err))),
        }
    }
}

impl<F> std::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource")
            .field("name", &self.name)
            .field("producer", &"<closure>")
            .finish()
    }
}
