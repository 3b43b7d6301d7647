//! Best-track ingestion: parsing, ordering, summarising and classifying.

pub mod category;
pub mod error;
pub mod ingestor;
pub mod label;
pub mod record;
pub mod summary;

pub use category::{basin_code, classify_intensity, CategoryLabel, StormKind};
pub use error::TrackError;
pub use ingestor::{parse, TrackIngestor};
pub use label::TrackLabels;
pub use record::TrackRecord;
pub use summary::{summarize, Framing, TrackSummary};
