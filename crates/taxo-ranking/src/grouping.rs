//! Group accumulator: windowed deduplication by output group.
//!
//! Consumes the filtered, canonicalized, weight-descending stream in order.
//! Groups are keyed by the first three raw path segments and anchored on
//! their first member; later members only extend the audit trail.

use std::collections::{HashMap, HashSet};

use taxo_core::category::{OutputGroup, RawCategory};

/// Synthetic key suppressing exact (group, weight) repeats independent of
/// full path identity.
fn dedup_key(name: &str, weight: f64) -> String {
    format!("{name}/{weight}")
}

/// Builds at most `max_groups` output groups from the surviving stream.
pub struct GroupAccumulator {
    max_groups: usize,
    groups: Vec<OutputGroup>,
    index: HashMap<String, usize>,
    seen_keys: HashSet<String>,
}

impl GroupAccumulator {
    pub fn new(max_groups: usize) -> Self {
        Self {
            max_groups,
            groups: Vec::new(),
            index: HashMap::new(),
            seen_keys: HashSet::new(),
        }
    }

    /// Fold one surviving entry into the accumulator.
    ///
    /// `label` is the entry's canonical form; it anchors the group's display
    /// category when the entry is the group's first member.
    pub fn absorb(&mut self, raw: &RawCategory, label: &str) {
        let name = OutputGroup::name_for(&raw.path);
        let key = dedup_key(&name, raw.weight);

        if let Some(&slot) = self.index.get(&name) {
            // Exact (group, weight) repeats are suppressed from the trail.
            if self.seen_keys.insert(key) {
                let updated = self.groups[slot].with_member(raw.path.clone());
                self.groups[slot] = updated;
            }
            return;
        }

        // Once the window is full, existing groups keep absorbing but no
        // new ones are created.
        if self.groups.len() >= self.max_groups {
            return;
        }

        // A key recorded without a surviving group still creates one: ties
        // resolve to group creation, never to a silent drop.
        self.seen_keys.insert(key);
        self.index.insert(name.clone(), self.groups.len());
        self.groups.push(OutputGroup::anchor(
            name,
            label.to_string(),
            raw.weight,
            raw.path.clone(),
        ));
    }

    /// Finish the window: groups sorted by descending weight, encounter
    /// order preserved for exact ties.
    pub fn finish(mut self) -> Vec<OutputGroup> {
        self.groups.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.groups
    }
}
