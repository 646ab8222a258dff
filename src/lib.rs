//! EZTip: a tip calculator with a per-session calculation history.
//!
//! [`calculator`] turns a bill, a service tier and an optional custom
//! percentage into a total. [`history`] keeps snapshots of completed
//! calculations for the current session. [`ui`] is a terminal front end
//! over both.

pub mod calculator;
pub mod config;
pub mod error;
pub mod history;
pub mod ui;

pub use calculator::{CalculationInput, CalculationResult, ServiceTier, ServiceTierKind, calculate};
pub use config::Config;
pub use error::{Error, Result};
pub use history::{HistoryRecord, HistoryStore, RecordId};
