use std::hash::Hash;

use log::trace;

use super::IndexerBuilder;
use crate::common::errors::Result;
use crate::core::{
    Assignment, BucketIndex, Document, Entry, IndexMetrics, PostingList, PostingListGroup,
    ResultSet,
};

/// Sealed boolean-expression index, bucketed by positive-arity.
///
/// Built once from a corpus, then read-only; `retrieve` borrows the
/// posting storage and may run concurrently from multiple threads as
/// long as each call owns its result set.
pub struct Indexer<K> {
    buckets: Vec<BucketIndex<K>>,
    zero_conjunctions: Vec<Entry>,
    metrics: IndexMetrics,
}

impl<K: Eq + Hash + Clone> Indexer<K> {
    /// Index `documents`, assigning dense document ids in slice order.
    pub fn create(documents: &[Document<K>]) -> Result<Self> {
        let mut builder = IndexerBuilder::new();
        for document in documents {
            builder.add(document)?;
        }
        Ok(builder.build())
    }

    pub(super) fn sealed(
        buckets: Vec<BucketIndex<K>>,
        zero_conjunctions: Vec<Entry>,
        metrics: IndexMetrics,
    ) -> Self {
        Self { buckets, zero_conjunctions, metrics }
    }

    pub fn metrics(&self) -> IndexMetrics {
        self.metrics
    }

    /// Collect one group per assignment binding that touches postings in
    /// `bucket`; the zero bucket additionally carries the vacuously
    /// satisfiable conjunctions.
    fn collect_groups<'a>(
        &'a self,
        bucket: usize,
        assignment: &impl Assignment<K>,
        groups: &mut Vec<PostingListGroup<'a>>,
    ) {
        assignment.for_each_binding(|key, values| {
            let mut group = PostingListGroup::new();
            self.buckets[bucket].fill_group(&mut group, key, values);
            if !group.is_empty() {
                groups.push(group);
            }
        });

        if bucket == 0 && !self.zero_conjunctions.is_empty() {
            let mut group = PostingListGroup::new();
            group.add(PostingList::new(&self.zero_conjunctions));
            groups.push(group);
        }
    }

    /// Emit into `result` every document with at least one conjunction
    /// satisfied by `assignment`. Pre-existing contents are preserved.
    ///
    /// A conjunction of positive-arity k lives in bucket k and is
    /// satisfied exactly when the k smallest group cursors align on its
    /// (document, conjunction) id with a positive entry in front; a
    /// negative entry in front means a bound value contradicts one of
    /// its negative predicates, and the id is skipped everywhere.
    pub fn retrieve(&self, result: &mut ResultSet, assignment: &impl Assignment<K>) {
        if self.buckets.is_empty() {
            return;
        }

        let top_bucket = (self.buckets.len() - 1).min(assignment.size());
        let mut groups: Vec<PostingListGroup<'_>> = Vec::new();

        for bucket in (0..=top_bucket).rev() {
            groups.clear();
            self.collect_groups(bucket, assignment, &mut groups);

            let k = bucket.max(1);
            if groups.len() < k {
                continue;
            }
            trace!("bucket {}: merging {} groups, k={}", bucket, groups.len(), k);

            loop {
                groups.sort_unstable();
                if groups[k - 1].is_empty() {
                    break;
                }

                let first = groups[0].current();
                let kth = groups[k - 1].current();

                let next_id = if first.id() == kth.id() {
                    if first.is_negative() {
                        // The slot is contradicted by a negative
                        // predicate. Advance every later group parked on
                        // it; equal ids need not be contiguous in the
                        // tail, so the whole tail is scanned.
                        let rejected_id = first.id();
                        for group in groups.iter_mut().skip(k) {
                            if group.current().id() == rejected_id {
                                group.skip_to(rejected_id + 1);
                            }
                        }
                    } else {
                        result.add_document_id(kth.document_id());
                    }
                    kth.id() + 1
                } else {
                    kth.id()
                };

                for group in groups.iter_mut().take(k) {
                    group.skip_to(next_id);
                }
            }
        }
    }
}
