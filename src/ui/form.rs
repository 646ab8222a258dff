//! Main-screen form state.
//!
//! Holds what the user has typed and selected, and drives a calculation
//! plus the conditional history entry when Calculate is pressed.

use crate::calculator::{CalculationInput, CalculationResult, ServiceTierKind};
use crate::history::{HistoryStore, RecordId};

/// Outcome of pressing Calculate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission {
    pub result: CalculationResult,
    /// Set when a history entry was recorded.
    pub recorded: Option<RecordId>,
}

/// Editable state of the main screen.
#[derive(Clone, Debug, Default)]
pub struct TipForm {
    pub restaurant_name: String,
    pub restaurant_location: String,
    pub bill_amount: String,
    pub custom_tip_percentage: String,
    selected_tier: Option<ServiceTierKind>,
    show_custom_input: bool,
    total: Option<CalculationResult>,
}

impl TipForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_tier(&self) -> Option<ServiceTierKind> {
        self.selected_tier
    }

    /// Whether the custom percentage field is visible.
    pub fn show_custom_input(&self) -> bool {
        self.show_custom_input
    }

    /// The last computed result, cleared by [`clear`](Self::clear).
    pub fn total(&self) -> Option<&CalculationResult> {
        self.total.as_ref()
    }

    /// Press a tier button.
    ///
    /// Custom toggles the percentage field each time it is pressed and stays
    /// selected either way. Fixed tiers leave the field as it was.
    pub fn select_tier(&mut self, kind: ServiceTierKind) {
        if kind == ServiceTierKind::Custom {
            self.show_custom_input = !self.show_custom_input;
        }
        self.selected_tier = Some(kind);
    }

    /// Reset every field, the selection and the displayed total.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of the current fields.
    pub fn input(&self) -> CalculationInput {
        CalculationInput {
            restaurant_name: self.restaurant_name.clone(),
            restaurant_location: self.restaurant_location.clone(),
            bill_amount: self.bill_amount.clone(),
            custom_tip_percentage: self.custom_tip_percentage.clone(),
            selected_tier: self.selected_tier,
        }
    }

    /// Compute and display the total. Always succeeds, even without a tier.
    pub fn calculate(&mut self) -> CalculationResult {
        let result = self.input().calculate();
        self.total = Some(result);
        result
    }

    /// Calculate, then record into `history` when a tier is selected.
    pub fn submit(&mut self, history: &mut HistoryStore) -> Submission {
        let result = self.calculate();
        let recorded = if self.selected_tier.is_some() {
            history.record(&self.input(), &result)
        } else {
            tracing::debug!("calculated without a tier, history unchanged");
            None
        };

        Submission { result, recorded }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_submit_records_with_tier() {
        let mut form = TipForm::new();
        let mut history = HistoryStore::new();
        form.restaurant_name = "Bistro".to_string();
        form.bill_amount = "50.00".to_string();
        form.select_tier(ServiceTierKind::Great);

        let submission = form.submit(&mut history);

        assert_eq!(submission.result.display_total(), "60.00");
        let id = submission.recorded.unwrap();
        assert_eq!(history.get(id).unwrap().restaurant_name, "Bistro");
        assert_eq!(form.total().unwrap().total_bill, dec!(60));
    }

    #[test]
    fn test_submit_without_tier_computes_but_does_not_record() {
        let mut form = TipForm::new();
        let mut history = HistoryStore::new();
        form.bill_amount = "42".to_string();

        let submission = form.submit(&mut history);

        assert_eq!(submission.result.total_bill, dec!(42));
        assert_eq!(submission.recorded, None);
        assert!(history.is_empty());
        assert!(form.total().is_some());
    }

    #[test]
    fn test_custom_toggles_field_and_stays_selected() {
        let mut form = TipForm::new();

        form.select_tier(ServiceTierKind::Custom);
        assert!(form.show_custom_input());
        assert_eq!(form.selected_tier(), Some(ServiceTierKind::Custom));

        form.select_tier(ServiceTierKind::Custom);
        assert!(!form.show_custom_input());
        assert_eq!(form.selected_tier(), Some(ServiceTierKind::Custom));
    }

    #[test]
    fn test_fixed_tier_keeps_field_visibility() {
        let mut form = TipForm::new();
        form.select_tier(ServiceTierKind::Custom);
        form.select_tier(ServiceTierKind::Good);

        assert!(form.show_custom_input());
        assert_eq!(form.selected_tier(), Some(ServiceTierKind::Good));
    }

    #[test]
    fn test_custom_submission_records_percentage() {
        let mut form = TipForm::new();
        let mut history = HistoryStore::new();
        form.bill_amount = "80".to_string();
        form.select_tier(ServiceTierKind::Custom);
        form.custom_tip_percentage = "18".to_string();

        let submission = form.submit(&mut history);

        assert_eq!(submission.result.display_total(), "94.40");
        let record = &history.list()[0];
        assert_eq!(record.custom_tip_percentage.as_deref(), Some("18"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = TipForm::new();
        form.restaurant_name = "X".to_string();
        form.restaurant_location = "Y".to_string();
        form.bill_amount = "10".to_string();
        form.custom_tip_percentage = "5".to_string();
        form.select_tier(ServiceTierKind::Custom);
        form.calculate();

        form.clear();

        assert_eq!(form.input(), CalculationInput::default());
        assert!(!form.show_custom_input());
        assert!(form.total().is_none());
    }

    #[test]
    fn test_history_survives_form_edits() {
        let mut form = TipForm::new();
        let mut history = HistoryStore::new();
        form.bill_amount = "20".to_string();
        form.select_tier(ServiceTierKind::Awesome);
        form.submit(&mut history);

        form.bill_amount = "30".to_string();
        form.clear();

        assert_eq!(history.list()[0].bill_amount, "20");
        assert_eq!(history.list()[0].total_bill, "26.00");
    }
}
