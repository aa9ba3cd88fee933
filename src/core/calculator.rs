//! Indicative monthly payment estimate.
//!
//! The estimate is a flat add-on of the indicative rate over the whole term,
//! not an amortized annuity: `round(amount * 1.125 / term_months)`.
//! Rounding is half up, computed exactly in integers.

use serde::Serialize;

/// Indicative annual rate in percent, as shown to the user and sent on the wire.
pub const INTEREST_RATE: f64 = 12.5;
/// Same rate in basis points; used for exact integer arithmetic.
pub const INTEREST_RATE_BPS: u64 = 1_250;
const BPS_SCALE: u64 = 10_000;

pub const MIN_AMOUNT: u32 = 10_000;
pub const MAX_AMOUNT: u32 = 500_000;
pub const AMOUNT_STEP: u32 = 5_000;
pub const MIN_TERM_MONTHS: u32 = 3;
pub const MAX_TERM_MONTHS: u32 = 60;

pub const DEFAULT_AMOUNT: u32 = 50_000;
pub const DEFAULT_TERM_MONTHS: u32 = 12;

/// Monthly payment for `amount` over `term_months`.
///
/// # Panics
///
/// Panics if `term_months` is zero. `LoanDraft` never holds a zero term.
pub fn compute_monthly_payment(amount: u32, term_months: u32) -> u64 {
    assert!(term_months > 0, "term_months must be positive");

    // amount * (1 + rate) / term == amount * (SCALE + bps) / (SCALE * term)
    let numerator = u64::from(amount) * (BPS_SCALE + INTEREST_RATE_BPS);
    let denominator = BPS_SCALE * u64::from(term_months);

    // 四捨五入 (half up)
    (2 * numerator + denominator) / (2 * denominator)
}

/// 模擬滑桿：限制範圍並對齊 5000 的級距
pub fn snap_amount(amount: u32) -> u32 {
    let clamped = amount.clamp(MIN_AMOUNT, MAX_AMOUNT);
    let steps = (clamped - MIN_AMOUNT + AMOUNT_STEP / 2) / AMOUNT_STEP;
    (MIN_AMOUNT + steps * AMOUNT_STEP).min(MAX_AMOUNT)
}

pub fn clamp_term(term_months: u32) -> u32 {
    term_months.clamp(MIN_TERM_MONTHS, MAX_TERM_MONTHS)
}

/// The live estimate shown next to the sliders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub amount: u32,
    pub term_months: u32,
    pub interest_rate: f64,
    pub monthly_payment: u64,
}

impl Quote {
    /// Builds a quote from raw slider input, clamping it first.
    pub fn new(amount: u32, term_months: u32) -> Self {
        let amount = snap_amount(amount);
        let term_months = clamp_term(term_months);
        Self {
            amount,
            term_months,
            interest_rate: INTEREST_RATE,
            monthly_payment: compute_monthly_payment(amount, term_months),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_payments() {
        assert_eq!(compute_monthly_payment(10_000, 60), 188);
        assert_eq!(compute_monthly_payment(500_000, 3), 187_500);
        assert_eq!(compute_monthly_payment(50_000, 12), 4_688);
    }

    #[test]
    fn test_matches_flat_add_on_formula_across_slider_range() {
        for amount in (MIN_AMOUNT..=MAX_AMOUNT).step_by(AMOUNT_STEP as usize) {
            for term in MIN_TERM_MONTHS..=MAX_TERM_MONTHS {
                let expected = (f64::from(amount) * 1.125 / f64::from(term)).round() as u64;
                assert_eq!(
                    compute_monthly_payment(amount, term),
                    expected,
                    "amount={} term={}",
                    amount,
                    term
                );
            }
        }
    }

    #[test]
    fn test_half_rounds_up() {
        // 15000 * 1.125 / 4 = 4218.75, 10000 * 1.125 / 36 = 312.5
        assert_eq!(compute_monthly_payment(15_000, 4), 4_219);
        assert_eq!(compute_monthly_payment(10_000, 36), 313);
    }

    #[test]
    fn test_is_deterministic() {
        let first = compute_monthly_payment(275_000, 17);
        let second = compute_monthly_payment(275_000, 17);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic]
    fn test_zero_term_panics() {
        compute_monthly_payment(10_000, 0);
    }

    #[test]
    fn test_quote_clamps_input() {
        let quote = Quote::new(3_000, 100);
        assert_eq!(quote.amount, MIN_AMOUNT);
        assert_eq!(quote.term_months, MAX_TERM_MONTHS);
        assert_eq!(quote.monthly_payment, 188);
        assert_eq!(quote.interest_rate, 12.5);
    }
}
