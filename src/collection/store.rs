use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use super::{Collection, Slot};
use crate::codec;
use crate::core::{ErrorEntry, Result};

impl<T: Clone> Collection<T> {
    /// Append an element at the next free index.
    ///
    /// The value runs through validation first; on failure the collection is
    /// left untouched and the failure is recorded in the error log. Accepted
    /// values run through input preparation before they are stored.
    pub fn add(&mut self, value: T) -> &mut Self {
        if !self.validate(None, &value) {
            return self;
        }
        let value = self.prepare_input(value);

        if self.constructing {
            let origin = self.original_size;
            self.original_size += 1;
            self.slots.push(Slot {
                value,
                origin: Some(origin),
            });
        } else {
            trace!(index = self.slots.len(), "append post-baseline element");
            self.slots.push(Slot {
                value,
                origin: None,
            });
            self.changed = true;
        }
        self
    }

    /// Overwrite the element at `index`.
    ///
    /// No-op when the index is absent or validation fails. The pre-change
    /// value of a baseline element is captured the first time it is touched.
    pub fn change(&mut self, index: usize, value: T) -> &mut Self {
        self.change_inner(index, value, None::<fn(usize, T) -> T>)
    }

    /// Like [`change`](Collection::change), with a caller transform applied
    /// to the prepared value before it is stored.
    pub fn change_with<F>(&mut self, index: usize, value: T, transform: F) -> &mut Self
    where
        F: FnOnce(usize, T) -> T,
    {
        self.change_inner(index, value, Some(transform))
    }

    fn change_inner<F>(&mut self, index: usize, value: T, transform: Option<F>) -> &mut Self
    where
        F: FnOnce(usize, T) -> T,
    {
        if !self.has(index) {
            return self;
        }
        if !self.validate(Some(index), &value) {
            return self;
        }

        let mut value = self.prepare_input(value);
        if let Some(transform) = transform {
            value = transform(index, value);
        }

        self.capture_original(index);
        self.slots[index].value = value;
        self.changed = true;
        self
    }

    /// Delete the element at `index` and renumber the rest.
    ///
    /// A baseline element is captured for later restore; an element added
    /// after the baseline is simply dropped. No-op on an absent index.
    pub fn remove(&mut self, index: usize) -> &mut Self {
        if !self.has(index) {
            return self;
        }
        self.capture_original(index);
        let slot = self.slots.remove(index);
        if let Some(origin) = slot.origin {
            self.removed.push(origin);
        }
        debug!(index, "removed element");
        self.changed = true;
        self
    }

    pub fn has(&self, index: usize) -> bool {
        index < self.slots.len()
    }

    /// Output-prepared copy of the element at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.slots
            .get(index)
            .map(|slot| self.prepare_output(Some(index), slot.value.clone()))
    }

    /// Keyed write: change when the index is live, append otherwise.
    pub fn set(&mut self, index: usize, value: T) -> &mut Self {
        if self.has(index) {
            self.change(index, value)
        } else {
            self.add(value)
        }
    }

    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<T> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Output-prepared copy of the whole collection.
    pub fn elements(&self) -> Vec<T> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| self.prepare_output(Some(index), slot.value.clone()))
            .collect()
    }

    pub fn append_elements(&mut self, items: Vec<T>) -> &mut Self {
        for item in items {
            self.add(item);
        }
        self
    }

    /// Capture the pre-change value of a baseline-descended slot, once.
    ///
    /// Only the first mutation of a baseline index is remembered as original;
    /// slots added after the baseline have no original to capture.
    fn capture_original(&mut self, index: usize) {
        if let Some(origin) = self.slots[index].origin {
            if !self.snapshot.contains_key(&origin) {
                self.snapshot
                    .insert(origin, self.slots[index].value.clone());
            }
        }
    }

    fn validate(&mut self, index: Option<usize>, value: &T) -> bool {
        if !self.validation_on || self.validators.is_empty() {
            return true;
        }
        let rules = self.validators.to_vec();
        let mut passed = true;
        for (name, rule) in rules {
            if !rule(index, value, self) {
                trace!(rule = %name, "validation rejected element");
                passed = false;
                self.has_errors = true;
                self.errors
                    .push(ErrorEntry::validation(index, value.clone(), name));
            }
        }
        passed
    }

    fn prepare_input(&self, value: T) -> T {
        if !self.input_on {
            return value;
        }
        let mut value = value;
        for (_, transform) in self.input_transforms.iter() {
            value = transform(None, value, self);
        }
        value
    }

    pub(super) fn prepare_output(&self, index: Option<usize>, value: T) -> T {
        if !self.output_on {
            return value;
        }
        let mut value = value;
        for (_, transform) in self.output_transforms.iter() {
            value = transform(index, value, self);
        }
        value
    }
}

impl<T: Clone + DeserializeOwned> Collection<T> {
    /// Append elements from a JSON array; a malformed payload is logged and
    /// nothing is appended.
    pub fn append_json(&mut self, text: &str) -> &mut Self {
        match serde_json::from_str::<Vec<T>>(text) {
            Ok(items) => {
                self.append_elements(items);
            }
            Err(err) => {
                debug!(%err, "rejected json payload");
                self.has_errors = true;
                self.errors
                    .push(ErrorEntry::message(format!("incorrect json data: {err}")));
            }
        }
        self
    }

    /// Append elements from a transport string produced by
    /// [`serialize`](Collection::serialize); a malformed payload is logged
    /// and nothing is appended.
    pub fn append_encoded(&mut self, text: &str) -> &mut Self {
        match codec::decode::<T>(text) {
            Ok(items) => {
                self.append_elements(items);
            }
            Err(err) => {
                debug!(%err, "rejected encoded payload");
                self.has_errors = true;
                self.errors.push(ErrorEntry::message(err.to_string()));
            }
        }
        self
    }
}

impl<T: Clone + Serialize> Collection<T> {
    /// Serialize the current, output-prepared element sequence.
    ///
    /// Round-tripping through [`append_encoded`](Collection::append_encoded)
    /// reproduces the sequence, not the change history.
    pub fn serialize(&self) -> Result<String> {
        codec::encode(&self.elements())
    }
}
