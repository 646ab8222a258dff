//! Raw calculation input as entered on the main screen.

use serde::{Deserialize, Serialize};

use super::evaluation::{CalculationResult, calculate};
use super::tier::ServiceTierKind;

/// The text fields and tier selection behind one calculation.
///
/// Strings are kept exactly as typed; nothing here is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    pub restaurant_name: String,
    pub restaurant_location: String,
    pub bill_amount: String,
    /// Only meaningful when `selected_tier` is [`ServiceTierKind::Custom`].
    pub custom_tip_percentage: String,
    pub selected_tier: Option<ServiceTierKind>,
}

impl CalculationInput {
    pub fn new(bill_amount: impl Into<String>, selected_tier: Option<ServiceTierKind>) -> Self {
        Self {
            bill_amount: bill_amount.into(),
            selected_tier,
            ..Default::default()
        }
    }

    pub fn with_restaurant(
        mut self,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.restaurant_name = name.into();
        self.restaurant_location = location.into();
        self
    }

    pub fn with_custom_tip(mut self, percentage: impl Into<String>) -> Self {
        self.custom_tip_percentage = percentage.into();
        self
    }

    /// Run the calculator over these fields.
    pub fn calculate(&self) -> CalculationResult {
        calculate(
            &self.bill_amount,
            self.selected_tier,
            &self.custom_tip_percentage,
        )
    }
}
