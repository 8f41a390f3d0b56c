//! The lazy combined sequence.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, trace};

use crate::{Directive, SettingsResult};

use super::{CombinedSettings, SharedRegistry, SharedSource};

/// Combined directives of a combiner's sources, produced on first use.
///
/// The first call to [`Iterator::next`] reads the combiner's registry, pulls
/// every source in registration order and folds their directives into one
/// table. Sources registered after that are not seen. Entries are then yielded
/// in the order their keys were first seen, each carrying its last value.
/// A failing source is yielded as an error, after which the sequence ends.
#[must_use = "sources are only pulled when the sequence is iterated"]
pub struct Combined<'a> {
    state: State<'a>,
}

enum State<'a> {
    Pending(SharedRegistry<'a>),
    Ready(indexmap::map::IntoIter<String, String>),
    Done,
}

impl<'a> Combined<'a> {
    pub(super) const fn new(registry: SharedRegistry<'a>) -> Self {
        Self {
            state: State::Pending(registry),
        }
    }
}

fn fold(sources: &[SharedSource<'_>]) -> SettingsResult<CombinedSettings> {
    let mut table = IndexMap::new();
    for (index, source) in sources.iter().enumerate() {
        let name = source.name();
        debug!(source = %name, index, "pulling directive source");
        for item in source.directives() {
            let (key, value) = item?.into_parts();
            match table.entry(key) {
                Entry::Occupied(mut entry) => {
                    trace!(key = %entry.key(), source = %name, "directive overridden");
                    entry.insert(value);
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
    }
    debug!(keys = table.len(), "combined directive sources");
    Ok(CombinedSettings::from_map(table))
}

impl Iterator for Combined<'_> {
    type Item = SettingsResult<Directive>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match mem::replace(&mut self.state, State::Done) {
                State::Pending(registry) => {
                    let (sources, hooks) = registry.borrow().snapshot();
                    match fold(&sources) {
                        Ok(settings) => {
                            for hook in &hooks {
                                hook(&settings);
                            }
                            self.state = State::Ready(settings.into_iter());
                        }
                        Err(err) => return Some(Err(err)),
                    }
                }
                State::Ready(mut entries) => {
                    let (key, value) = entries.next()?;
                    self.state = State::Ready(entries);
                    return Some(Ok(Directive::new(key, value)));
                }
                State::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Pending(_) => (0, None),
            State::Ready(entries) => entries.size_hint(),
            State::Done => (0, Some(0)),
        }
    }
}

impl FusedIterator for Combined<'_> {}

impl fmt::Debug for Combined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            State::Pending(registry) => {
                format!("pending ({} sources)", registry.borrow().sources.len())
            }
            State::Ready(entries) => format!("ready ({} entries)", entries.len()),
            State::Done => "done".to_owned(),
        };
        f.debug_struct("Combined").field("state", &state).finish()
    }
}
