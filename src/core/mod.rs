mod assignment;
mod common;
mod entry;
mod expression;
mod indexer;
mod inverted_index;
mod posting_list;
mod result_set;

pub use assignment::{Assignment, MapAssignment, ValuesRef};
pub use common::{ConjunctionIndex, DocId, EntryId};
pub use entry::{Entry, MAX_DOCUMENT_ID};
pub use expression::{Conjunction, Document, Expression, ValueSet};
pub use indexer::{Indexer, IndexerBuilder};
pub use inverted_index::{BucketIndex, IndexMetrics, InvertedIndexError, ValueIndex};
pub use posting_list::{PostingList, PostingListGroup};
pub use result_set::ResultSet;
