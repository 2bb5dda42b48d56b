//! kindex - boolean-expression retrieval over typed equality predicates.
//!
//! Documents are disjunctions of conjunctions of positive and negative
//! equality predicates over integer- or string-valued attributes. A
//! query is an assignment binding attribute keys to value sets; the
//! engine returns every document with at least one satisfied
//! conjunction.
//!
//! Conjunctions are indexed in buckets keyed by their count of positive
//! predicates, and retrieval runs a k-of-k zig-zag merge per bucket: a
//! conjunction in bucket k matches exactly when the k smallest posting
//! group cursors align on its id, with negative predicates turning into
//! cheap skip-aheads.

pub mod common;
pub mod core;

pub use crate::common::errors::{KindexError, Result};
pub use crate::core::{
    Assignment, Conjunction, DocId, Document, Entry, Expression, IndexMetrics, Indexer,
    IndexerBuilder, MapAssignment, ResultSet, ValueSet, ValuesRef,
};
