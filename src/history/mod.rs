//! Calculation history kept for the current session only.

mod record;
mod store;

pub use record::{HistoryRecord, RecordId};
pub use store::HistoryStore;
