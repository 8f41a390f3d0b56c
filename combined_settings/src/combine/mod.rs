//! Last-write-wins combination of directive sources.
//!
//! A [`SettingsCombiner`] collects sources in registration order. Nothing is
//! pulled until the [`Combined`] sequence returned by
//! [`SettingsCombiner::build`] is iterated; at that point every source
//! registered so far, including those added after `build`, is enumerated
//! exactly once and folded into a [`CombinedSettings`] table.

mod combined;
mod settings;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::chain::ConfigChain;
use crate::source::{ChainSource, DirectiveSource, KeyValueSource};
use crate::translate::ChainTranslator;
use crate::{Directive, SettingsResult};

pub use combined::Combined;
pub use settings::CombinedSettings;

pub(crate) type SharedSource<'a> = Rc<dyn DirectiveSource + 'a>;
pub(crate) type InspectHook<'a> = Rc<dyn Fn(&CombinedSettings) + 'a>;
pub(crate) type SharedRegistry<'a> = Rc<RefCell<Registry<'a>>>;

/// Sources and hooks shared between a combiner and its unconsumed sequences.
#[derive(Default)]
pub(crate) struct Registry<'a> {
    sources: Vec<SharedSource<'a>>,
    hooks: Vec<InspectHook<'a>>,
}

impl<'a> Registry<'a> {
    /// Copy out the current sources and hooks so no borrow is held while
    /// they run.
    pub(crate) fn snapshot(&self) -> (Vec<SharedSource<'a>>, Vec<InspectHook<'a>>) {
        (self.sources.clone(), self.hooks.clone())
    }
}

/// Registry of directive sources, combined last-write-wins per key.
///
/// The registry is shared with every [`Combined`] built from the combiner
/// through [`Rc`], so neither type is `Send`. Use one combiner per thread.
///
/// ```rust
/// use combined_settings::{KeyValueSource, SettingsCombiner};
///
/// let mut combiner = SettingsCombiner::new();
/// combiner
///     .add_source(KeyValueSource::new("defaults", [("minimum-level", "Information")]))
///     .add_key_value("minimum-level", "Debug");
///
/// let settings = combiner.combine()?;
/// assert_eq!(settings.get("minimum-level"), Some("Debug"));
/// # Ok::<_, std::sync::Arc<combined_settings::SettingsError>>(())
/// ```
#[derive(Default)]
pub struct SettingsCombiner<'a> {
    registry: SharedRegistry<'a>,
}

impl<'a> SettingsCombiner<'a> {
    /// An empty combiner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `source` after every source added so far.
    pub fn add_source(&mut self, source: impl DirectiveSource + 'a) -> &mut Self {
        self.registry.borrow_mut().sources.push(Rc::new(source));
        self
    }

    /// Register in-memory key/value pairs.
    pub fn add_key_value_pairs<I, D>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Directive>,
    {
        self.add_source(KeyValueSource::new("key-value", pairs))
    }

    /// Register a single key/value pair.
    pub fn add_key_value(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.add_source(KeyValueSource::single(key, value))
    }

    /// Register a fluent chain, translated with the default translator.
    pub fn add_chain(&mut self, chain: ConfigChain) -> &mut Self {
        self.add_source(ChainSource::new(chain))
    }

    /// Register a fluent chain, translated with `translator`.
    pub fn add_chain_with(&mut self, chain: ConfigChain, translator: ChainTranslator) -> &mut Self {
        self.add_source(ChainSource::with_translator(chain, translator))
    }

    /// Observe the combined table whenever it is materialised.
    ///
    /// Hooks run in registration order after every source has been folded
    /// and before the first entry is yielded. They never run when a source
    /// fails.
    pub fn inspect(&mut self, hook: impl Fn(&CombinedSettings) + 'a) -> &mut Self {
        self.registry.borrow_mut().hooks.push(Rc::new(hook));
        self
    }

    /// Number of registered sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().sources.len()
    }

    /// Returns `true` when no sources are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.borrow().sources.is_empty()
    }

    /// The lazily combined sequence of this combiner's sources.
    ///
    /// The registry is read on the sequence's first `next()`, so sources and
    /// hooks added after this call still take part until iteration starts.
    pub fn build(&self) -> Combined<'a> {
        Combined::new(Rc::clone(&self.registry))
    }

    /// Build and drain the combined sequence.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a source; later sources are not
    /// pulled.
    pub fn combine(&self) -> SettingsResult<CombinedSettings> {
        self.build().collect()
    }
}

impl fmt::Debug for SettingsCombiner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("SettingsCombiner")
            .field(
                "sources",
                &registry.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("hooks", &registry.hooks.len())
            .finish()
    }
}

/// Configure a fresh combiner with `configure` and combine its sources.
///
/// ```rust
/// use combined_settings::{ConfigChain, LogLevel, combined};
///
/// let settings = combined(|c| {
///     c.add_chain(ConfigChain::new().minimum_level().level(LogLevel::Error));
/// })?;
/// assert_eq!(settings.get("minimum-level"), Some("Error"));
/// # Ok::<_, std::sync::Arc<combined_settings::SettingsError>>(())
/// ```
///
/// # Errors
///
/// Returns the first error produced by a source.
pub fn combined<'a, F>(configure: F) -> SettingsResult<CombinedSettings>
where
    F: FnOnce(&mut SettingsCombiner<'a>),
{
    let mut combiner = SettingsCombiner::new();
    configure(&mut combiner);
    combiner.combine()
}
