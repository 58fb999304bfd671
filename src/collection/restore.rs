use std::collections::BTreeMap;

use tracing::debug;

use super::{Collection, Slot};

impl<T: Clone> Collection<T> {
    /// Reconstruct the baseline sequence from the current state and the
    /// tracked history.
    ///
    /// For every baseline index the captured pre-change value wins over the
    /// live slot that still descends from it. Read-only; output preparation
    /// does not apply here.
    pub fn original_view(&self) -> Vec<T> {
        let mut live: BTreeMap<usize, &T> = BTreeMap::new();
        for slot in &self.slots {
            if let Some(origin) = slot.origin {
                live.insert(origin, &slot.value);
            }
        }

        let mut view = Vec::with_capacity(self.original_size);
        for index in 0..self.original_size {
            if let Some(value) = self.snapshot.get(&index) {
                view.push(value.clone());
            } else if let Some(value) = live.get(&index) {
                view.push((*value).clone());
            }
        }
        view
    }

    /// Baseline value at `index`, or `None` outside the baseline.
    pub fn original_at(&self, index: usize) -> Option<T> {
        if index >= self.original_size {
            return None;
        }
        if let Some(value) = self.snapshot.get(&index) {
            return Some(value.clone());
        }
        self.slots
            .iter()
            .find(|slot| slot.origin == Some(index))
            .map(|slot| slot.value.clone())
    }

    /// Replace the current state with the baseline and drop all history.
    pub fn restore_all(&mut self) -> &mut Self {
        let restored = self.original_view();
        self.slots = restored
            .into_iter()
            .enumerate()
            .map(|(origin, value)| Slot {
                value,
                origin: Some(origin),
            })
            .collect();
        self.snapshot.clear();
        self.removed.clear();
        self.original_size = self.slots.len();
        self.changed = false;
        debug!(len = self.slots.len(), "restored full baseline");
        self
    }

    /// Restore a single baseline index to its pre-mutation value.
    ///
    /// `index` addresses the baseline, not the current numbering. A changed
    /// element is swapped back in place; a removed element re-enters at the
    /// position its baseline index implies, shifting later elements up.
    /// No-op for indices that were never changed or removed. `changed()`
    /// resets once no tracked divergence remains.
    pub fn restore_one(&mut self, index: usize) -> &mut Self {
        if !self.snapshot.contains_key(&index) {
            return self;
        }

        if let Some(position) = self.slots.iter().position(|slot| slot.origin == Some(index)) {
            if let Some(value) = self.snapshot.remove(&index) {
                self.slots[position].value = value;
            }
        } else if let Some(value) = self.snapshot.remove(&index) {
            let position = index.min(self.slots.len());
            self.slots.insert(
                position,
                Slot {
                    value,
                    origin: Some(index),
                },
            );
            self.removed.retain(|&removed| removed != index);
        }

        if self.snapshot.is_empty() && self.removed.is_empty() && !self.has_new_slots() {
            self.changed = false;
        }
        self
    }

    /// Make the current state the new baseline, discarding all history.
    pub fn checkpoint(&mut self) -> &mut Self {
        for (origin, slot) in self.slots.iter_mut().enumerate() {
            slot.origin = Some(origin);
        }
        self.snapshot.clear();
        self.removed.clear();
        self.original_size = self.slots.len();
        self.changed = false;
        debug!(len = self.slots.len(), "checkpoint: current state is the new baseline");
        self
    }

    fn has_new_slots(&self) -> bool {
        self.slots.iter().any(|slot| slot.origin.is_none())
    }
}
