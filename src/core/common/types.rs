/// Identifier of a document in the indexed corpus.
pub type DocId = u64;

/// Position of a conjunction inside its document.
pub type ConjunctionIndex = u16;

/// The 63-bit join key shared by the positive and negative entries of one
/// (document, conjunction) slot.
pub type EntryId = u64;
