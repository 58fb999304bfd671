use std::fmt;
use std::sync::Arc;

use crate::collection::Collection;

/// Validation predicate over `(index, value, collection)`.
///
/// The index is `None` for values that are not yet stored (plain `add`).
pub type Validator<T> = Arc<dyn Fn(Option<usize>, &T, &Collection<T>) -> bool + Send + Sync>;

/// Value transform used by the input and output preparation pipelines.
pub type Transform<T> = Arc<dyn Fn(Option<usize>, T, &Collection<T>) -> T + Send + Sync>;

/// Ordered mapping from rule name to callable.
///
/// Keeps registration order; a `put` under a known name swaps the callable
/// without moving it in the run order.
#[derive(Clone)]
pub(crate) struct RuleSet<F> {
    entries: Vec<(String, F)>,
}

impl<F: Clone> RuleSet<F> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn put(&mut self, name: impl Into<String>, rule: F) {
        let name = name.into();
        match self.entries.iter_mut().find(|(known, _)| *known == name) {
            Some(entry) => entry.1 = rule,
            None => self.entries.push((name, rule)),
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(known, _)| known != name);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, F)> {
        self.entries.iter()
    }

    /// Cheap handle copies for call sites that mutate the collection while
    /// running the rules.
    pub fn to_vec(&self) -> Vec<(String, F)> {
        self.entries.clone()
    }
}

impl<F> fmt::Debug for RuleSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}
