//! Tip calculator.
//!
//! This module provides functionality to:
//! - Coerce free-text amounts and percentages into decimals
//! - Resolve the selected service tier into an effective tip rate
//! - Compute and format the total bill
//! - Copy a total to the clipboard

mod clipboard;
mod evaluation;
mod input;
mod parsing;
mod tier;

pub use clipboard::copy_to_clipboard;
pub use evaluation::{CalculationResult, calculate, calculate_with_tier, format_amount};
pub use input::CalculationInput;
pub use parsing::{coerce_decimal, parse_decimal};
pub use tier::{ServiceTier, ServiceTierKind, UnknownTier};
