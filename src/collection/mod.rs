//! The collection engine.
//!
//! # Architecture
//!
//! - `store.rs` - element storage and mutation (add/change/remove/get)
//! - `restore.rs` - baseline reconstruction, restore and checkpoint
//! - `pager.rs` - page arithmetic and page-granular access
//! - `iter.rs` - element and page iterators
//! - `pipelines.rs` - rule management and pipeline switches
//!
//! The store keeps live elements in a contiguous vector of slots. Every slot
//! remembers its provenance: the baseline index it descends from, or nothing
//! for elements added after the baseline was established. Change tracking
//! (new indices, removed indices, pre-change originals) is derived from that
//! provenance, so renumbering after structural changes can never drift out
//! of sync with the history.

mod iter;
mod pager;
mod pipelines;
mod restore;
mod store;

pub use iter::{Elements, Pages};

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;

use crate::core::{CollectionConfig, DataSource, ErrorEntry};
use crate::pipeline::{RuleSet, Transform, Validator};

const DEFAULT_PAGE_SIZE: usize = 10;

/// One live element plus its provenance.
#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    /// Baseline index this slot descends from; `None` for post-baseline adds.
    origin: Option<usize>,
}

/// Mutable, ordered collection with a two-generation history.
///
/// Elements live at contiguous indices `0..len()`. The collection tracks how
/// the current state diverges from the baseline established at construction
/// (or at the last [`checkpoint`](Collection::checkpoint)) and can restore
/// single elements or the whole baseline. Inserted values run through named
/// validation and preparation pipelines; reads run through a separate output
/// pipeline that never touches stored data.
///
/// Out-of-range index operations are deliberate no-ops and validation
/// failures are recorded in a polled error log, so mutator calls can be
/// chained without error plumbing.
#[derive(Clone)]
pub struct Collection<T> {
    slots: Vec<Slot<T>>,
    /// Pre-mutation values keyed by baseline index, captured once on the
    /// first change or removal of a baseline-descended slot.
    snapshot: BTreeMap<usize, T>,
    /// Baseline indices removed since the baseline, in removal order.
    removed: Vec<usize>,
    original_size: usize,
    changed: bool,
    has_errors: bool,
    errors: Vec<ErrorEntry<T>>,
    validators: RuleSet<Validator<T>>,
    input_transforms: RuleSet<Transform<T>>,
    output_transforms: RuleSet<Transform<T>>,
    validation_on: bool,
    input_on: bool,
    output_on: bool,
    page_size: usize,
    current_page: usize,
    section_keys: bool,
    /// True only while the initial data set loads; baseline elements are not
    /// counted as new.
    constructing: bool,
}

impl<T> Collection<T> {
    /// Empty collection with default settings.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            snapshot: BTreeMap::new(),
            removed: Vec::new(),
            original_size: 0,
            changed: false,
            has_errors: false,
            errors: Vec::new(),
            validators: RuleSet::new(),
            input_transforms: RuleSet::new(),
            output_transforms: RuleSet::new(),
            validation_on: true,
            input_on: true,
            output_on: true,
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            section_keys: false,
            constructing: false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True once the current state diverges from the baseline.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Element count at the baseline.
    pub fn original_size(&self) -> usize {
        self.original_size
    }

    /// Current positions of elements added after the baseline.
    pub fn new_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.origin.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// Baseline indices removed since the baseline, in removal order.
    pub fn removed_indices(&self) -> &[usize] {
        &self.removed
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn errors(&self) -> &[ErrorEntry<T>] {
        &self.errors
    }

    pub fn clear_errors(&mut self) -> &mut Self {
        self.has_errors = false;
        self.errors.clear();
        self
    }

    pub fn section_keys(&self) -> bool {
        self.section_keys
    }
}

impl<T: Clone> Collection<T> {
    /// Build a collection whose baseline is the given sequence.
    ///
    /// Elements pass through validation and input preparation; the result
    /// reports `changed() == false`.
    pub fn from_elements(data: Vec<T>) -> Self {
        let mut collection = Self::new();
        collection.constructing = true;
        for element in data {
            collection.add(element);
        }
        collection.constructing = false;
        collection.changed = false;
        collection
    }

    /// Build a collection from construction options, including serialized
    /// data sources.
    ///
    /// Never fails: a payload that does not decode leaves the collection
    /// empty with the failure in the error log.
    pub fn with_config(config: CollectionConfig<T>) -> Self
    where
        T: DeserializeOwned,
    {
        let mut collection = Self::new();
        if config.page_size >= 1 {
            collection.page_size = config.page_size;
        }
        collection.section_keys = config.section_keys;
        for (name, rule) in config.validators {
            collection.validators.put(name, rule);
        }
        for (name, transform) in config.input_transforms {
            collection.input_transforms.put(name, transform);
        }

        collection.constructing = true;
        match config.data {
            Some(DataSource::Elements(items)) => {
                collection.append_elements(items);
            }
            Some(DataSource::Json(text)) => {
                collection.append_json(&text);
            }
            Some(DataSource::Encoded(text)) => {
                collection.append_encoded(&text);
            }
            None => {}
        }
        collection.constructing = false;
        collection.changed = false;
        collection
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("len", &self.slots.len())
            .field("original_size", &self.original_size)
            .field("changed", &self.changed)
            .field("has_errors", &self.has_errors)
            .field("page_size", &self.page_size)
            .field("current_page", &self.current_page)
            .finish_non_exhaustive()
    }
}
