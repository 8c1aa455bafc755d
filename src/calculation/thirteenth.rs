//! Proportional 13th-salary rule.

use rust_decimal::Decimal;

use crate::calculation::tax::round_currency;
use crate::models::AuditStep;

const TWELVE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const TWO: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Result of the 13th-salary calculation.
#[derive(Debug, Clone)]
pub struct ThirteenthResult {
    /// Proportional 13th salary owed.
    pub value: Decimal,
    /// Deduction for an already-advanced first installment.
    pub advance_deduction: Decimal,
    /// The audit step documenting this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the proportional 13th salary and the advance deduction.
///
/// Pays `salary/12` per accrual month since January 1 of the exit year
/// (or the start date for mid-year contracts), forfeited on a for-cause
/// dismissal. When the first installment was already advanced this year,
/// half the monthly salary is deducted regardless of the proportional
/// value — the advance was paid on the full-year expectation.
///
/// # Legal Reference
///
/// Lei 4.090/1962 and Lei 4.749/1965 (advance installments).
pub fn calculate_thirteenth(
    monthly_salary: Decimal,
    thirteenth_months: u32,
    for_cause: bool,
    advance_paid: bool,
    step_number: u32,
) -> ThirteenthResult {
    let value = if for_cause {
        Decimal::ZERO
    } else {
        round_currency(monthly_salary / TWELVE * Decimal::from(thirteenth_months))
    };

    let advance_deduction = if advance_paid {
        round_currency(monthly_salary / TWO)
    } else {
        Decimal::ZERO
    };

    let reasoning = if for_cause {
        "Proportional 13th salary forfeited for just cause".to_string()
    } else {
        format!("{} accrual months at salary/12", thirteenth_months)
    };

    ThirteenthResult {
        value,
        advance_deduction,
        audit_step: AuditStep {
            step_number,
            rule_id: "thirteenth_salary".to_string(),
            rule_name: "13th Salary".to_string(),
            legal_ref: "Lei 4.090/1962".to_string(),
            input: serde_json::json!({
                "monthly_salary": monthly_salary,
                "thirteenth_months": thirteenth_months,
                "for_cause": for_cause,
                "advance_paid": advance_paid,
            }),
            output: serde_json::json!({
                "value": value,
                "advance_deduction": advance_deduction,
            }),
            reasoning,
        },
    }
}
