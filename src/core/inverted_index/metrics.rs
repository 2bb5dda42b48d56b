use std::cmp::{max, min};

use crate::core::DocId;

/// Build-time counters for a sealed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMetrics {
    pub min_document_id: DocId,
    pub max_document_id: DocId,

    pub document_count: usize,
    pub conjunction_count: usize,
    /// Posting entries written across all buckets, one per value per
    /// predicate.
    pub entry_count: usize,
    /// Buckets allocated, i.e. one past the largest positive-arity seen.
    pub bucket_count: usize,
}

impl Default for IndexMetrics {
    fn default() -> Self {
        Self {
            min_document_id: DocId::MAX,
            max_document_id: DocId::MIN,
            document_count: 0,
            conjunction_count: 0,
            entry_count: 0,
            bucket_count: 0,
        }
    }
}

impl IndexMetrics {
    pub fn compare_and_update_document_id(&mut self, other: DocId) {
        self.min_document_id = min(self.min_document_id, other);
        self.max_document_id = max(self.max_document_id, other);
    }

    pub fn increase_document_count(&mut self) {
        self.document_count += 1;
    }

    pub fn increase_conjunction_count(&mut self) {
        self.conjunction_count += 1;
    }

    pub fn increase_entry_count(&mut self, entries: usize) {
        self.entry_count += entries;
    }
}
