mod builder;
mod indexer;

pub use builder::IndexerBuilder;
pub use indexer::Indexer;
