//! Quote logging.
//!
//! - One record per rated shipment
//! - JSON-lines or CSV output, appended to a single file
//! - Bounded in-memory writer for tests and debugging

mod types;
mod writer;

pub use types::RatingRecord;
pub use writer::{FileRecordWriter, MemoryRecordWriter, RecordError, RecordFormat, RecordWriter};
