//! Notice period (aviso prévio) rule: indemnity, deduction, or neither.

use rust_decimal::Decimal;

use crate::calculation::entitlement::EntitlementFlags;
use crate::calculation::salary_balance::MONTH_DAYS;
use crate::calculation::tax::round_currency;
use crate::models::{AuditStep, NoticeType};

/// Result of the notice period calculation.
#[derive(Debug, Clone)]
pub struct NoticeResult {
    /// Value owed to the employee for an indemnified notice.
    pub notice_value: Decimal,
    /// Value deducted from an employee who did not honor the notice.
    pub notice_deduction: Decimal,
    /// The audit step documenting this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the notice value or deduction for a termination.
///
/// An entitled, indemnified notice pays `dailyRate × noticeDays`, halved
/// under mutual agreement (the monetary half is exact, unlike the floored
/// day credit used for date projection). An entitled, unfulfilled notice
/// deducts 30 daily rates — one month's salary — from the settlement.
/// Any other combination produces neither; the mismatch is surfaced as an
/// audit warning by the engine, not here.
///
/// # Legal Reference
///
/// CLT art. 487 and Lei 12.506/2011 (proportional notice);
/// CLT art. 484-A (mutual agreement halving).
pub fn calculate_notice(
    monthly_salary: Decimal,
    notice_days: u32,
    notice_type: NoticeType,
    flags: &EntitlementFlags,
    step_number: u32,
) -> NoticeResult {
    let daily_rate = monthly_salary / MONTH_DAYS;

    let mut notice_value = Decimal::ZERO;
    let mut notice_deduction = Decimal::ZERO;
    let reasoning;

    match notice_type {
        NoticeType::Indemnified if flags.indemnified_notice => {
            let full = daily_rate * Decimal::from(notice_days);
            if flags.mutual_agreement {
                notice_value = round_currency(full / Decimal::TWO);
                reasoning = format!(
                    "Indemnified notice of {} days halved under mutual agreement",
                    notice_days
                );
            } else {
                notice_value = round_currency(full);
                reasoning = format!("Indemnified notice of {} days at daily rate", notice_days);
            }
        }
        NoticeType::NotFulfilled if flags.notice_deduction => {
            notice_deduction = round_currency(daily_rate * MONTH_DAYS);
            reasoning = "Notice not honored; one month's salary deducted".to_string();
        }
        _ => {
            reasoning = "No notice value owed or deducted for this combination".to_string();
        }
    }

    NoticeResult {
        notice_value,
        notice_deduction,
        audit_step: AuditStep {
            step_number,
            rule_id: "notice".to_string(),
            rule_name: "Notice Period".to_string(),
            legal_ref: "Lei 12.506/2011; CLT art. 487".to_string(),
            input: serde_json::json!({
                "monthly_salary": monthly_salary,
                "notice_days": notice_days,
                "notice_type": notice_type,
            }),
            output: serde_json::json!({
                "notice_value": notice_value,
                "notice_deduction": notice_deduction,
            }),
            reasoning,
        },
    }
}
