//! Description index
//!
//! BTreeMap from description to the ids filed under it. Keys iterate in
//! ascending byte order of the description.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::DescriptionPolicy;

/// Ordered secondary index: description → id handles
///
/// Under `Overwrite` each description holds at most one id. Under `KeepAll`
/// it holds every id filed under it, iterated in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct DescriptionIndex {
    policy: DescriptionPolicy,
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl DescriptionIndex {
    /// Create an empty index with the given policy
    pub fn new(policy: DescriptionPolicy) -> Self {
        Self {
            policy,
            entries: BTreeMap::new(),
        }
    }

    pub fn policy(&self) -> DescriptionPolicy {
        self.policy
    }

    /// File `id` under `description`
    ///
    /// Returns the id that was displaced, which only happens under
    /// `Overwrite` when the description was already present.
    pub fn insert(&mut self, description: &str, id: &str) -> Option<String> {
        let ids = self.entries.entry(description.to_string()).or_default();

        let displaced = match self.policy {
            DescriptionPolicy::Overwrite => ids.pop_first(),
            DescriptionPolicy::KeepAll => None,
        };
        ids.insert(id.to_string());

        displaced
    }

    /// Unfile `id` from `description`
    ///
    /// Only the entry pointing at this exact id is touched. If the
    /// description now belongs to another id (overwritten earlier), that
    /// entry is left alone and `false` is returned.
    pub fn remove(&mut self, description: &str, id: &str) -> bool {
        let Some(ids) = self.entries.get_mut(description) else {
            return false;
        };

        let removed = ids.remove(id);
        if ids.is_empty() {
            self.entries.remove(description);
        }
        removed
    }

    /// Check whether `id` is currently filed under `description`
    pub fn contains(&self, description: &str, id: &str) -> bool {
        self.entries
            .get(description)
            .is_some_and(|ids| ids.contains(id))
    }

    /// Iterate (description, id) pairs in ascending description order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().flat_map(|(description, ids)| {
            ids.iter()
                .map(move |id| (description.as_str(), id.as_str()))
        })
    }

    /// Number of (description, id) handles
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
