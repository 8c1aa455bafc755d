//! Input value object for the termination engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{NoticeType, TerminationReason};

/// The employment facts a termination calculation is computed from.
///
/// Entirely caller-owned; the engine treats it as read-only and performs
/// no validation. Logically inconsistent values (negative salary, end date
/// before start date) still produce a numeric result, with warnings in the
/// audit trace.
///
/// # Example
///
/// ```
/// use clt_engine::models::{NoticeType, TerminationInput, TerminationReason};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = TerminationInput {
///     monthly_salary: Decimal::from_str("3000.00").unwrap(),
///     start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     reason: TerminationReason::DismissalWithoutCause,
///     notice_type: NoticeType::Indemnified,
///     overdue_vacation_days: 0,
///     fgts_balance: Decimal::from_str("8000.00").unwrap(),
///     dependents: 0,
///     thirteenth_advance_paid: false,
/// };
/// assert_eq!(input.overdue_vacation_days, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationInput {
    /// The monthly gross salary.
    pub monthly_salary: Decimal,
    /// The contract start date.
    pub start_date: NaiveDate,
    /// The contract end date (before any notice projection).
    pub end_date: NaiveDate,
    /// The legal termination reason.
    pub reason: TerminationReason,
    /// How the notice period is settled.
    pub notice_type: NoticeType,
    /// Days of overdue (vencidas) vacation still owed.
    #[serde(default)]
    pub overdue_vacation_days: u32,
    /// The FGTS fund balance used as the penalty base.
    #[serde(default)]
    pub fgts_balance: Decimal,
    /// Number of dependents for the IRRF deduction.
    #[serde(default)]
    pub dependents: u32,
    /// Whether the 13th-salary first installment was already advanced
    /// this year.
    #[serde(default)]
    pub thirteenth_advance_paid: bool,
}
