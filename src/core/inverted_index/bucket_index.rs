use std::hash::Hash;

use crate::core::{Entry, PostingListGroup, ValueIndex, ValueSet, ValuesRef};

/// Inverted index for one positive-arity bucket: two strongly typed
/// posting maps, one per value domain, selected by the variant of the
/// values handed in.
#[derive(Debug, Clone)]
pub struct BucketIndex<K> {
    int_index: ValueIndex<K, i64>,
    text_index: ValueIndex<K, String>,
}

impl<K: Eq + Hash + Clone> BucketIndex<K> {
    pub fn new() -> Self {
        Self { int_index: ValueIndex::new(), text_index: ValueIndex::new() }
    }

    pub fn add_entry(&mut self, entry: Entry, key: &K, values: &ValueSet) {
        match values {
            ValueSet::Int(values) => self.int_index.add_entry(entry, key, values),
            ValueSet::Text(values) => self.text_index.add_entry(entry, key, values),
        }
    }

    pub fn seal(&mut self) {
        self.int_index.seal();
        self.text_index.seal();
    }

    pub fn fill_group<'a>(&'a self, group: &mut PostingListGroup<'a>, key: &K, values: ValuesRef<'_>) {
        match values {
            ValuesRef::Int(values) => self.int_index.fill_group(group, key, values),
            ValuesRef::Text(values) => self.text_index.fill_group(group, key, values),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.int_index.is_empty() && self.text_index.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for BucketIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains_are_disjoint() {
        let mut bucket: BucketIndex<String> = BucketIndex::new();
        let key = "a".to_string();
        bucket.add_entry(Entry::new(0, 0, true), &key, &ValueSet::Int(vec![3]));
        bucket.add_entry(Entry::new(1, 0, true), &key, &ValueSet::Text(vec!["3".to_string()]));
        bucket.seal();

        let mut group = PostingListGroup::new();
        bucket.fill_group(&mut group, &key, ValuesRef::Int(&[3]));
        assert_eq!(group.current(), Entry::new(0, 0, true));

        let mut group = PostingListGroup::new();
        let values = ["3".to_string()];
        bucket.fill_group(&mut group, &key, ValuesRef::Text(&values));
        assert_eq!(group.current(), Entry::new(1, 0, true));
    }

    #[test]
    fn test_same_key_may_span_both_domains() {
        let mut bucket: BucketIndex<String> = BucketIndex::new();
        let key = "a".to_string();
        bucket.add_entry(Entry::new(0, 0, true), &key, &ValueSet::Int(vec![1]));
        bucket.add_entry(Entry::new(0, 1, true), &key, &ValueSet::Text(vec!["one".to_string()]));
        bucket.seal();
        assert!(!bucket.is_empty());
    }
}
