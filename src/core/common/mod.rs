mod types;

pub use types::{ConjunctionIndex, DocId, EntryId};
