//! Tip and total evaluation.
//!
//! Turns the raw text fields and the selected tier into a total. Malformed
//! numbers count as zero and an unset tier tips nothing, so this never fails.

use rust_decimal::{Decimal, RoundingStrategy};

use super::parsing::coerce_decimal;
use super::tier::{ServiceTier, ServiceTierKind};

/// Decimal places shown for money amounts.
const DISPLAY_SCALE: u32 = 2;

/// Outcome of a calculation. Amounts keep full precision; only
/// [`CalculationResult::display_total`] rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalculationResult {
    /// The bill amount after coercion.
    pub bill: Decimal,
    /// The resolved tier, `None` when no tier was selected.
    pub tier: Option<ServiceTier>,
    /// `bill * effective_rate / 100`.
    pub tip: Decimal,
    /// `bill + tip`.
    pub total_bill: Decimal,
}

impl CalculationResult {
    /// The percentage that was applied.
    pub fn effective_rate(&self) -> Decimal {
        self.tier.map_or(Decimal::ZERO, ServiceTier::effective_rate)
    }

    /// The total rounded to cents with exactly two fractional digits.
    pub fn display_total(&self) -> String {
        format_amount(self.total_bill)
    }
}

/// Compute the total for a bill, a selected tier and the custom-tip field.
///
/// The custom text only matters when `selected` is [`ServiceTierKind::Custom`];
/// fixed tiers apply their own rate and an unset tier applies zero.
pub fn calculate(
    bill_amount_text: &str,
    selected: Option<ServiceTierKind>,
    custom_tip_text: &str,
) -> CalculationResult {
    let bill = coerce_decimal(bill_amount_text);
    let custom_rate = coerce_decimal(custom_tip_text);
    let tier = selected.map(|kind| kind.with_custom_rate(custom_rate));

    calculate_with_tier(bill, tier)
}

/// Compute the total once the inputs are already numbers.
pub fn calculate_with_tier(bill: Decimal, tier: Option<ServiceTier>) -> CalculationResult {
    let rate = tier.map_or(Decimal::ZERO, ServiceTier::effective_rate);
    // Dividing first keeps large bills in range; a tip that still overflows is zero.
    let tip = bill
        .checked_mul(rate)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .or_else(|| {
            bill.checked_div(Decimal::ONE_HUNDRED)
                .and_then(|hundredth| hundredth.checked_mul(rate))
        })
        .unwrap_or(Decimal::ZERO);
    let total_bill = bill.checked_add(tip).unwrap_or(bill);

    CalculationResult {
        bill,
        tier,
        tip,
        total_bill,
    }
}

/// Format an amount with exactly two fractional digits (`0.00`, `94.40`).
///
/// Rounds half away from zero; no grouping separators, `.` as the decimal point.
pub fn format_amount(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fixed_tiers() {
        let bills = [dec!(0), dec!(1), dec!(12.34), dec!(50.00), dec!(999.99)];
        for bill in bills {
            let text = bill.to_string();
            assert_eq!(
                calculate(&text, Some(ServiceTierKind::Good), "").total_bill,
                bill * dec!(1.15)
            );
            assert_eq!(
                calculate(&text, Some(ServiceTierKind::Great), "").total_bill,
                bill * dec!(1.20)
            );
            assert_eq!(
                calculate(&text, Some(ServiceTierKind::Awesome), "").total_bill,
                bill * dec!(1.30)
            );
        }
    }

    #[test]
    fn test_custom_percentage() {
        let cases = [
            (dec!(80), dec!(18)),
            (dec!(100), dec!(12.5)),
            (dec!(42.42), dec!(0)),
            (dec!(10), dec!(100)),
        ];
        for (bill, pct) in cases {
            let result = calculate(
                &bill.to_string(),
                Some(ServiceTierKind::Custom),
                &pct.to_string(),
            );
            assert_eq!(result.total_bill, bill * (dec!(1) + pct / dec!(100)));
            assert_eq!(result.effective_rate(), pct);
        }
    }

    #[test]
    fn test_custom_text_ignored_for_fixed_tier() {
        let result = calculate("100", Some(ServiceTierKind::Good), "50");
        assert_eq!(result.total_bill, dec!(115));
        assert_eq!(result.effective_rate(), dec!(15));
    }

    #[test]
    fn test_non_numeric_bill_is_zero() {
        let result = calculate("abc", Some(ServiceTierKind::Good), "");
        assert_eq!(result.total_bill, Decimal::ZERO);
        assert_eq!(result.display_total(), "0.00");
    }

    #[test]
    fn test_no_tier_means_no_tip() {
        let result = calculate("73.21", None, "25");
        assert_eq!(result.tier, None);
        assert_eq!(result.tip, Decimal::ZERO);
        assert_eq!(result.total_bill, dec!(73.21));
    }

    #[test]
    fn test_non_numeric_custom_is_zero_rate() {
        let result = calculate("40", Some(ServiceTierKind::Custom), "lots");
        assert_eq!(result.total_bill, dec!(40));
    }

    #[test]
    fn test_great_scenario() {
        let result = calculate("50.00", Some(ServiceTierKind::Great), "");
        assert_eq!(result.total_bill, dec!(60));
        assert_eq!(result.display_total(), "60.00");
    }

    #[test]
    fn test_custom_scenario() {
        let result = calculate("80", Some(ServiceTierKind::Custom), "18");
        assert_eq!(result.tip, dec!(14.4));
        assert_eq!(result.display_total(), "94.40");
    }

    #[test]
    fn test_empty_bill_scenario() {
        let result = calculate("", Some(ServiceTierKind::Good), "");
        assert_eq!(result.display_total(), "0.00");
    }

    #[test]
    fn test_full_precision_kept_internally() {
        let result = calculate("10.01", Some(ServiceTierKind::Good), "");
        assert_eq!(result.total_bill, dec!(11.5115));
        assert_eq!(result.display_total(), "11.51");
    }

    #[test]
    fn test_format_amount_rounding() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(5)), "5.00");
        assert_eq!(format_amount(dec!(1.005)), "1.01");
        assert_eq!(format_amount(dec!(1.004)), "1.00");
        assert_eq!(format_amount(dec!(-2.345)), "-2.35");
        assert_eq!(format_amount(dec!(1234567.891)), "1234567.89");
    }

    #[test]
    fn test_huge_values_do_not_panic() {
        let bill = "70000000000000000000000000000";
        let result = calculate(bill, Some(ServiceTierKind::Awesome), "");
        assert_eq!(result.bill, result.total_bill);
    }

    #[test]
    fn test_large_totals_keep_two_decimals() {
        let bills = [
            "792281625142643375935439503",
            "79228162514264337593543950335",
            "6000000000000000000000000000",
            "123456789012345678.9",
        ];
        for bill in bills {
            let display = calculate(bill, Some(ServiceTierKind::Good), "").display_total();
            let (_, fraction) = display.rsplit_once('.').unwrap();
            assert_eq!(fraction.len(), 2, "{} displayed as {}", bill, display);
            assert!(fraction.chars().all(|c| c.is_ascii_digit()));
        }
        assert_eq!(format_amount(Decimal::MAX), "79228162514264337593543950335.00");
    }

    #[test]
    fn test_large_bill_tip_divides_first() {
        let result = calculate("6000000000000000000000000000", Some(ServiceTierKind::Good), "");
        assert_eq!(result.tip, dec!(900000000000000000000000000));
        assert_eq!(result.total_bill, dec!(6900000000000000000000000000));
    }
}
