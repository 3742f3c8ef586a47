pub mod types;
pub mod traits;
pub mod fetcher;
pub mod page_structure;
pub mod sources;
pub mod aggregator;
pub mod state;
pub mod utils;

pub use types::*;
pub use traits::{BaseStore, ContentApi};
pub use fetcher::Fetcher;
pub use page_structure::{PageStructure, Section, SectionSource, LayoutRule, InternationalVariant};
pub use aggregator::HomepageAggregator;
pub use state::MemoryBaseStore;
