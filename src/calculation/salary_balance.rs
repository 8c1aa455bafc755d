//! Salary balance rule: pay for days worked in the final month.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::calculation::tax::round_currency;
use crate::calculation::tenure::last_day_of_month;
use crate::models::AuditStep;

/// The fixed 30-day-month convention used for all daily rates.
pub const MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Result of the salary balance calculation.
#[derive(Debug, Clone)]
pub struct SalaryBalanceResult {
    /// The salary owed for the final month.
    pub value: Decimal,
    /// The days of the final month that were paid.
    pub days_paid: u32,
    /// The audit step documenting this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary balance for the final month of the contract.
///
/// Uses the day-of-month of the contract end date at the 30-day-month
/// daily rate. When the contract ends on the last calendar day of its
/// month the full monthly salary is owed instead, so a January 31 or
/// February 28 exit never short-pays the month.
///
/// # Arguments
///
/// * `monthly_salary` - The monthly gross salary
/// * `end_date` - The contract end date (not the projected exit)
/// * `step_number` - The sequential audit step number
///
/// # Legal Reference
///
/// CLT art. 457 (remuneration) and art. 477 §6 (settlement deadline).
pub fn calculate_salary_balance(
    monthly_salary: Decimal,
    end_date: NaiveDate,
    step_number: u32,
) -> SalaryBalanceResult {
    let full_month = end_date == last_day_of_month(end_date);
    let days_paid = if full_month { 30 } else { end_date.day() };

    let value = if full_month {
        round_currency(monthly_salary)
    } else {
        round_currency(monthly_salary / MONTH_DAYS * Decimal::from(days_paid))
    };

    let reasoning = if full_month {
        format!(
            "Contract ended on the last day of the month ({}); full monthly salary owed",
            end_date
        )
    } else {
        format!(
            "{} days worked in the final month at daily rate salary/30",
            days_paid
        )
    };

    SalaryBalanceResult {
        value,
        days_paid,
        audit_step: AuditStep {
            step_number,
            rule_id: "salary_balance".to_string(),
            rule_name: "Salary Balance".to_string(),
            legal_ref: "CLT art. 457".to_string(),
            input: serde_json::json!({
                "monthly_salary": monthly_salary,
                "end_date": end_date,
            }),
            output: serde_json::json!({
                "value": value,
                "days_paid": days_paid,
            }),
            reasoning,
        },
    }
}
