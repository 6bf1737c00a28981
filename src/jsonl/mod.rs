//! JSON Lines output for segmented records.

mod writer;

pub use writer::{ArticleRecord, ClauseRecord, JsonlWriter};
