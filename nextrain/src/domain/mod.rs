//! Domain types for departure searches.
//!
//! Station names are plain strings as published by Irish Rail; trains are
//! immutable records produced by the decoder.

mod search_result;
mod train;

pub use search_result::TrainSearchResult;
pub use train::Train;
