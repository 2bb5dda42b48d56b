mod bucket_index;
mod errors;
mod metrics;
mod value_index;

pub use bucket_index::BucketIndex;
pub use errors::InvertedIndexError;
pub use metrics::IndexMetrics;
pub use value_index::ValueIndex;
