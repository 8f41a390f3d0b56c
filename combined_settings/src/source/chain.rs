//! A source that translates a fluent chain on demand.

use std::borrow::Cow;
use std::iter;

use crate::chain::ConfigChain;
use crate::translate::ChainTranslator;

use super::{DirectiveIter, DirectiveSource};

/// Directives produced by translating a [`ConfigChain`].
///
/// Translation happens each time the source is enumerated, never at
/// construction. A chain that fails to translate yields its error as the
/// only item.
#[derive(Clone, Debug)]
pub struct ChainSource {
    chain: ConfigChain,
    translator: ChainTranslator,
}

impl ChainSource {
    /// Translate `chain` with the default translator.
    #[must_use]
    pub fn new(chain: ConfigChain) -> Self {
        Self::with_translator(chain, ChainTranslator::new())
    }

    /// Translate `chain` with `translator`.
    #[must_use]
    pub const fn with_translator(chain: ConfigChain, translator: ChainTranslator) -> Self {
        Self { chain, translator }
    }
}

impl DirectiveSource for ChainSource {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("config-chain")
    }

    fn directives(&self) -> DirectiveIter<'_> {
        match self.translator.translate(self.chain.tail()) {
            Ok(directives) => Box::new(directives.into_iter().map(Ok)),
            Err(err) => Box::new(iter::once(Err(err))),
        }
    }
}
