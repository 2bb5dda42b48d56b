use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::core::{Entry, EntryId, PostingList};

/// Union of the posting lists one assignment key activates inside one
/// size bucket, exposed as a single cursor positioned at the minimum
/// current entry of its members.
///
/// Membership is bounded by the number of values the assignment binds
/// for the key, so a handful of inline slots covers the common case.
#[derive(Debug, Clone)]
pub struct PostingListGroup<'a> {
    current: Entry,
    lists: SmallVec<[PostingList<'a>; 4]>,
}

impl<'a> PostingListGroup<'a> {
    pub fn new() -> Self {
        Self { current: Entry::MAX, lists: SmallVec::new() }
    }

    /// Register a member list. Empty lists are silently dropped.
    pub fn add(&mut self, list: PostingList<'a>) {
        if list.is_empty() {
            return;
        }
        self.current = self.current.min(list.current());
        self.lists.push(list);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current == Entry::MAX
    }

    #[inline]
    pub fn current(&self) -> Entry {
        self.current
    }

    /// Advance every member past ids below `target_id`, then reposition
    /// on the minimum surviving entry.
    pub fn skip_to(&mut self, target_id: EntryId) {
        if self.current == Entry::MAX {
            return;
        }

        let mut min = Entry::MAX;
        for list in self.lists.iter_mut() {
            if list.is_empty() {
                continue;
            }
            list.skip_to(target_id);
            if list.is_empty() {
                continue;
            }
            min = min.min(list.current());
        }
        self.current = min;
    }
}

impl Default for PostingListGroup<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PostingListGroup<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for PostingListGroup<'_> {}

impl Ord for PostingListGroup<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.current.cmp(&other.current)
    }
}

impl PartialOrd for PostingListGroup<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries_of(docs: &[u64]) -> Vec<Entry> {
        docs.iter().map(|&doc| Entry::new(doc, 0, true)).collect()
    }

    #[test]
    fn test_new_group_is_empty() {
        let group = PostingListGroup::new();
        assert!(group.is_empty());
        assert_eq!(group.current(), Entry::MAX);
    }

    #[test]
    fn test_add_drops_empty_lists() {
        let mut group = PostingListGroup::new();
        group.add(PostingList::new(&[]));
        assert!(group.is_empty());
    }

    #[test]
    fn test_current_is_minimum_over_members() {
        let first = entries_of(&[5, 8]);
        let second = entries_of(&[2, 9]);

        let mut group = PostingListGroup::new();
        group.add(PostingList::new(&first));
        group.add(PostingList::new(&second));

        assert_eq!(group.current(), Entry::new(2, 0, true));
    }

    #[test]
    fn test_skip_to_recomputes_minimum() {
        let first = entries_of(&[5, 8]);
        let second = entries_of(&[2, 9]);

        let mut group = PostingListGroup::new();
        group.add(PostingList::new(&first));
        group.add(PostingList::new(&second));

        group.skip_to(Entry::new(3, 0, true).id());
        assert_eq!(group.current(), Entry::new(5, 0, true));

        group.skip_to(Entry::new(9, 0, true).id());
        assert_eq!(group.current(), Entry::new(9, 0, true));

        group.skip_to(Entry::new(10, 0, true).id());
        assert!(group.is_empty());
    }

    #[test]
    fn test_groups_order_by_current_entry() {
        let low = entries_of(&[1]);
        let high = entries_of(&[6]);

        let mut a = PostingListGroup::new();
        a.add(PostingList::new(&low));
        let mut b = PostingListGroup::new();
        b.add(PostingList::new(&high));
        let empty = PostingListGroup::new();

        assert!(a < b);
        assert!(b < empty);

        let mut groups = vec![empty, b, a];
        groups.sort();
        assert_eq!(groups[0].current(), Entry::new(1, 0, true));
        assert_eq!(groups[1].current(), Entry::new(6, 0, true));
        assert!(groups[2].is_empty());
    }
}
