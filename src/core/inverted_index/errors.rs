use thiserror::Error;

use crate::core::DocId;

#[derive(Debug, Error)]
pub enum InvertedIndexError {
    #[error("Document id '{document_id}' exceeds the 47-bit entry field")]
    DocumentIdOverflow { document_id: DocId },

    #[error("Document '{document_id}' has {count} conjunctions, the 16-bit entry field holds at most 65536")]
    ConjunctionIndexOverflow { document_id: DocId, count: usize },
}
