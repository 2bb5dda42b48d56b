use std::collections::HashMap;
use std::hash::Hash;

use crate::core::{Entry, PostingList, PostingListGroup};

/// Posting storage for one value domain inside one size bucket, shaped
/// `key -> value -> ascending entries`.
///
/// `add_entry` appends unsorted; `seal` sorts every posting once the
/// whole corpus has been consumed. After sealing the maps are read-only
/// and `fill_group` hands out borrowed cursors into them.
#[derive(Debug, Clone)]
pub struct ValueIndex<K, V> {
    postings: HashMap<K, HashMap<V, Vec<Entry>>>,
}

impl<K, V> ValueIndex<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self { postings: HashMap::new() }
    }

    /// Append `entry` under `(key, v)` for every v in `values`. The same
    /// entry lands once per value, regardless of sign.
    pub fn add_entry(&mut self, entry: Entry, key: &K, values: &[V]) {
        let per_key = self.postings.entry(key.clone()).or_default();
        for value in values {
            per_key.entry(value.clone()).or_default().push(entry);
        }
    }

    /// Sort every posting into ascending entry order.
    pub fn seal(&mut self) {
        for per_key in self.postings.values_mut() {
            for posting in per_key.values_mut() {
                posting.sort_unstable();
            }
        }
    }

    /// Add a cursor over the `(key, v)` posting to `group` for every
    /// bound value v that has one.
    pub fn fill_group<'a>(&'a self, group: &mut PostingListGroup<'a>, key: &K, values: &[V]) {
        let Some(per_key) = self.postings.get(key) else {
            return;
        };
        for value in values {
            if let Some(posting) = per_key.get(value) {
                group.add(PostingList::new(posting));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

impl<K, V> Default for ValueIndex<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
