//! History record representing one completed calculation.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculator::{CalculationInput, CalculationResult, ServiceTier};

/// Identifier assigned by a [`HistoryStore`](super::HistoryStore) when a record is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A frozen snapshot of one calculation.
///
/// Every field is copied out of the input at creation time and the record is
/// never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: RecordId,
    pub restaurant_name: String,
    pub restaurant_location: String,
    /// The bill exactly as typed.
    pub bill_amount: String,
    /// Label of the tier used, e.g. `Great Service (20%)`.
    #[serde(rename = "serviceLevel")]
    pub service_level_label: String,
    /// Total formatted to two decimals.
    pub total_bill: String,
    /// Capture time.
    #[serde(rename = "date")]
    pub timestamp: DateTime<Local>,
    /// Present only for the custom tier with a non-empty percentage field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tip_percentage: Option<String>,
}

impl HistoryRecord {
    /// Snapshot an input and its result.
    ///
    /// Returns `None` when the result has no tier, since only calculations
    /// with a selected tier are kept.
    pub fn from_calculation(
        id: RecordId,
        input: &CalculationInput,
        result: &CalculationResult,
        timestamp: DateTime<Local>,
    ) -> Option<Self> {
        let tier = result.tier?;

        let custom_tip_percentage = match tier {
            ServiceTier::Custom(_) if !input.custom_tip_percentage.is_empty() => {
                Some(input.custom_tip_percentage.clone())
            }
            _ => None,
        };

        Some(Self {
            id,
            restaurant_name: input.restaurant_name.clone(),
            restaurant_location: input.restaurant_location.clone(),
            bill_amount: input.bill_amount.clone(),
            service_level_label: tier.label().to_string(),
            total_bill: result.display_total(),
            timestamp,
            custom_tip_percentage,
        })
    }

    /// Field-for-field equality ignoring the identifier.
    pub fn same_contents(&self, other: &HistoryRecord) -> bool {
        self.restaurant_name == other.restaurant_name
            && self.restaurant_location == other.restaurant_location
            && self.bill_amount == other.bill_amount
            && self.service_level_label == other.service_level_label
            && self.total_bill == other.total_bill
            && self.timestamp == other.timestamp
            && self.custom_tip_percentage == other.custom_tip_percentage
    }

    /// Lines shown for this record on the history screen.
    ///
    /// `date_format` is a chrono strftime pattern.
    pub fn display_lines(&self, currency_symbol: &str, date_format: &str) -> Vec<String> {
        let mut lines = vec![
            format!("Restaurant Name: {}", self.restaurant_name),
            format!("Location: {}", self.restaurant_location),
            format!("Bill Amount: {}", self.bill_amount),
            format!("Total Bill: {}{}", currency_symbol, self.total_bill),
            format!("Service Level: {}", self.service_level_label),
        ];

        if let Some(custom) = self.custom_tip_percentage.as_deref()
            && !custom.is_empty()
        {
            lines.push(format!("Custom Tip Percentage: {}%", custom));
        }

        lines.push(format!("Date: {}", self.timestamp.format(date_format)));
        lines
    }
}
