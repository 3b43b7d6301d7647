//! Handles serialising and saving tracks to disk in the _parquet_ file format.

pub mod tracks;

pub use tracks::save_tracks;
