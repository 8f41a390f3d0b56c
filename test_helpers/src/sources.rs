//! Directive sources instrumented for tests.

use std::borrow::Cow;
use std::cell::Cell;
use std::iter;
use std::rc::Rc;
use std::sync::Arc;

use combined_settings::{Directive, DirectiveIter, DirectiveSource, SettingsError};

/// Shared count of how many times a source was enumerated.
#[derive(Clone, Debug, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    /// Enumerations recorded so far.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn record(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Fixed directives that record every enumeration.
///
/// ```rust
/// use combined_settings::SettingsCombiner;
/// use combined_settings_test_helpers::CountingSource;
///
/// let source = CountingSource::new("defaults", [("minimum-level", "Debug")]);
/// let pulls = source.counter();
/// let mut combiner = SettingsCombiner::new();
/// combiner.add_source(source);
///
/// let combined = combiner.build();
/// assert_eq!(pulls.get(), 0);
/// assert_eq!(combined.count(), 1);
/// assert_eq!(pulls.get(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CountingSource {
    name: String,
    directives: Vec<Directive>,
    counter: PullCounter,
}

impl CountingSource {
    /// A source named `name` yielding `pairs`.
    #[must_use]
    pub fn new<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            directives: pairs.into_iter().map(Directive::from).collect(),
            counter: PullCounter::default(),
        }
    }

    /// A handle on the enumeration count that outlives moving the source.
    #[must_use]
    pub fn counter(&self) -> PullCounter {
        self.counter.clone()
    }
}

impl DirectiveSource for CountingSource {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn directives(&self) -> DirectiveIter<'_> {
        self.counter.record();
        Box::new(self.directives.iter().cloned().map(Ok))
    }
}

/// A source that fails with [`SettingsError::Source`], optionally after
/// yielding some directives.
#[derive(Clone, Debug)]
pub struct FailingSource {
    name: String,
    message: String,
    leading: Vec<Directive>,
    counter: PullCounter,
}

impl FailingSource {
    /// A source named `name` failing with `message`.
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            leading: Vec::new(),
            counter: PullCounter::default(),
        }
    }

    /// Yield `pairs` before the failure.
    #[must_use]
    pub fn after<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.leading = pairs.into_iter().map(Directive::from).collect();
        self
    }

    /// A handle on the enumeration count.
    #[must_use]
    pub fn counter(&self) -> PullCounter {
        self.counter.clone()
    }
}

impl DirectiveSource for FailingSource {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn directives(&self) -> DirectiveIter<'_> {
        self.counter.record();
        let failure = Arc::new(SettingsError::source_failure(
            self.name.clone(),
            self.message.clone(),
        ));
        Box::new(
            self.leading
                .iter()
                .cloned()
                .map(Ok)
                .chain(iter::once(Err(failure))),
        )
    }
}
