use std::hash::Hash;

use log::{debug, error};
use typed_builder::TypedBuilder;

use super::Indexer;
use crate::core::{
    BucketIndex, ConjunctionIndex, DocId, Document, Entry, IndexMetrics, InvertedIndexError,
    MAX_DOCUMENT_ID,
};

/// One past the largest conjunction index the entry layout can hold.
const MAX_CONJUNCTIONS_PER_DOCUMENT: usize = (u16::MAX as usize) + 1;

/// Accumulates a corpus document by document, then seals into an
/// immutable [`Indexer`]. Documents receive dense ids in insertion
/// order.
#[derive(TypedBuilder)]
pub struct IndexerBuilder<K: Eq + Hash + Clone> {
    #[builder(default = vec![])]
    buckets: Vec<BucketIndex<K>>,

    #[builder(default = vec![])]
    zero_conjunctions: Vec<Entry>,

    #[builder(default = IndexMetrics::default())]
    metrics: IndexMetrics,

    #[builder(default = 0)]
    next_document_id: DocId,
}

impl<K: Eq + Hash + Clone> IndexerBuilder<K> {
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Index one document under the next dense document id.
    pub fn add(&mut self, document: &Document<K>) -> Result<(), InvertedIndexError> {
        let document_id = self.next_document_id;
        if document_id > MAX_DOCUMENT_ID {
            let error_msg = format!("document id '{}' exceeds the entry layout", document_id);
            error!("{}", error_msg);
            return Err(InvertedIndexError::DocumentIdOverflow { document_id });
        }
        if document.conjunctions.len() > MAX_CONJUNCTIONS_PER_DOCUMENT {
            let count = document.conjunctions.len();
            let error_msg =
                format!("document '{}' carries {} conjunctions, too many to index", document_id, count);
            error!("{}", error_msg);
            return Err(InvertedIndexError::ConjunctionIndexOverflow { document_id, count });
        }
        self.next_document_id += 1;

        for (conjunction_index, conjunction) in document.conjunctions.iter().enumerate() {
            let conjunction_index = conjunction_index as ConjunctionIndex;
            let arity = conjunction.positive_arity();

            // The bucket must exist even for an expression-less
            // conjunction, so the zero bucket is always visited when the
            // corpus holds vacuously satisfiable conjunctions.
            if self.buckets.len() <= arity {
                self.buckets.resize_with(arity + 1, BucketIndex::new);
            }

            for expression in &conjunction.expressions {
                let entry = Entry::new(document_id, conjunction_index, expression.positive);
                self.buckets[arity].add_entry(entry, &expression.key, &expression.values);
                self.metrics.increase_entry_count(expression.values.len());
            }

            if arity == 0 {
                self.zero_conjunctions.push(Entry::new(document_id, conjunction_index, true));
            }
            self.metrics.increase_conjunction_count();
        }

        if !document.conjunctions.is_empty() {
            self.metrics.compare_and_update_document_id(document_id);
        }
        self.metrics.increase_document_count();
        Ok(())
    }

    /// Sort every posting and the zero-conjunction list, consuming the
    /// builder into a sealed indexer.
    pub fn build(mut self) -> Indexer<K> {
        for bucket in self.buckets.iter_mut() {
            bucket.seal();
        }
        self.zero_conjunctions.sort_unstable();

        self.metrics.bucket_count = self.buckets.len();
        debug!(
            "sealed index: {} documents, {} conjunctions, {} entries, {} buckets",
            self.metrics.document_count,
            self.metrics.conjunction_count,
            self.metrics.entry_count,
            self.metrics.bucket_count,
        );

        Indexer::sealed(self.buckets, self.zero_conjunctions, self.metrics)
    }
}

impl<K: Eq + Hash + Clone> Default for IndexerBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Conjunction, Expression, ValueSet};

    fn document(conjunctions: Vec<Conjunction<String>>) -> Document<String> {
        Document::new(conjunctions)
    }

    fn positive_int(key: &str, values: Vec<i64>) -> Expression<String> {
        Expression::new(key.to_string(), ValueSet::Int(values), true)
    }

    #[test]
    fn test_buckets_grow_to_largest_arity() {
        let mut builder = IndexerBuilder::new();
        builder
            .add(&document(vec![Conjunction::new(vec![
                positive_int("a", vec![1]),
                positive_int("b", vec![2]),
                positive_int("c", vec![3]),
            ])]))
            .unwrap();

        let indexer = builder.build();
        assert_eq!(indexer.metrics().bucket_count, 4);
    }

    #[test]
    fn test_expression_less_conjunction_allocates_zero_bucket() {
        let mut builder = IndexerBuilder::new();
        builder.add(&document(vec![Conjunction::new(vec![])])).unwrap();

        let indexer = builder.build();
        assert_eq!(indexer.metrics().bucket_count, 1);
        assert_eq!(indexer.metrics().conjunction_count, 1);
    }

    #[test]
    fn test_conjunction_index_overflow_is_rejected() {
        let oversized = document(vec![Conjunction::new(vec![]); MAX_CONJUNCTIONS_PER_DOCUMENT + 1]);

        let mut builder = IndexerBuilder::new();
        let err = builder.add(&oversized).unwrap_err();
        assert!(matches!(
            err,
            InvertedIndexError::ConjunctionIndexOverflow { document_id: 0, count } if count == MAX_CONJUNCTIONS_PER_DOCUMENT + 1
        ));
    }

    #[test]
    fn test_metrics_track_corpus_shape() {
        let mut builder = IndexerBuilder::new();
        builder
            .add(&document(vec![Conjunction::new(vec![positive_int("a", vec![1, 2])])]))
            .unwrap();
        builder.add(&document(vec![])).unwrap();
        builder
            .add(&document(vec![
                Conjunction::new(vec![positive_int("a", vec![3])]),
                Conjunction::new(vec![]),
            ]))
            .unwrap();

        let metrics = builder.build().metrics();
        assert_eq!(metrics.document_count, 3);
        assert_eq!(metrics.conjunction_count, 3);
        assert_eq!(metrics.entry_count, 3);
        assert_eq!(metrics.min_document_id, 0);
        assert_eq!(metrics.max_document_id, 2);
    }
}
