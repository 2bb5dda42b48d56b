use thiserror::Error;

use crate::core::InvertedIndexError;

/// The library's error enum.
///
/// The failure surface is narrow: only build can fail, when a document
/// id or conjunction index does not fit the packed entry layout.
/// Retrieval has no recoverable failure mode.
#[derive(Debug, Error)]
pub enum KindexError {
    #[error(transparent)]
    InvertedIndexError(#[from] InvertedIndexError),
}

/// Result type alias for kindex operations.
pub type Result<T> = std::result::Result<T, KindexError>;
