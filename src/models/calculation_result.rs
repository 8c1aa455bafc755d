//! Calculation result models for the Termination Calculation Engine.
//!
//! This module contains the [`TerminationResult`] type and its associated
//! structures that capture all outputs of a severance calculation:
//! earnings and discount breakdowns, totals, tenure metadata, and the
//! audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gross earnings breakdown of a termination settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earnings {
    /// Salary owed for days worked in the final month.
    pub salary_balance: Decimal,
    /// Indemnified notice value (zero when worked, deducted, or not owed).
    pub notice_value: Decimal,
    /// Overdue plus proportional vacation, including the one-third bonus.
    pub vacation_total: Decimal,
    /// Proportional 13th salary.
    pub thirteenth_salary: Decimal,
    /// Employer-paid FGTS penalty (40%, 20%, or zero of the balance).
    pub fgts_penalty: Decimal,
}

/// Discounts breakdown of a termination settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discounts {
    /// Social-security (INSS) withholding.
    pub inss: Decimal,
    /// Income-tax (IRRF) withholding.
    pub irrf: Decimal,
    /// Notice value deducted from a resigning employee who did not honor it.
    pub notice_deduction: Decimal,
    /// Deduction of the already-advanced 13th-salary first installment.
    pub thirteenth_advance: Decimal,
}

/// Aggregated totals for a termination settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all earnings.
    pub gross: Decimal,
    /// Sum of all discounts.
    pub discounts: Decimal,
    /// Gross minus discounts.
    pub net: Decimal,
}

/// Tenure and notice metadata computed during the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationMeta {
    /// Whole years worked (calendar days / 365, floored).
    pub years_worked: u32,
    /// Statutory notice days (Lei 12.506/2011 ladder).
    pub notice_days: u32,
    /// Contract end date projected by the credited notice days.
    pub projected_exit_date: NaiveDate,
    /// Accrual months counted toward proportional vacation.
    pub vacation_months: u32,
    /// Accrual months counted toward the proportional 13th salary.
    pub thirteenth_months: u32,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application, with a reference to the statute that justifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute or CLT article for this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag logically inconsistent input that the engine absorbed
/// without failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a termination calculation.
///
/// Created fresh per calculation and never mutated after construction.
///
/// # Example
///
/// ```
/// use clt_engine::models::{
///     AuditTrace, Discounts, Earnings, TerminationMeta, TerminationResult, Totals,
/// };
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = TerminationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     table_year: 2024,
///     earnings: Earnings {
///         salary_balance: Decimal::ZERO,
///         notice_value: Decimal::ZERO,
///         vacation_total: Decimal::ZERO,
///         thirteenth_salary: Decimal::ZERO,
///         fgts_penalty: Decimal::ZERO,
///     },
///     discounts: Discounts {
///         inss: Decimal::ZERO,
///         irrf: Decimal::ZERO,
///         notice_deduction: Decimal::ZERO,
///         thirteenth_advance: Decimal::ZERO,
///     },
///     totals: Totals {
///         gross: Decimal::ZERO,
///         discounts: Decimal::ZERO,
///         net: Decimal::ZERO,
///     },
///     meta: TerminationMeta {
///         years_worked: 0,
///         notice_days: 0,
///         projected_exit_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         vacation_months: 0,
///         thirteenth_months: 0,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The effective year of the statutory tables used.
    pub table_year: i32,
    /// Gross earnings breakdown.
    pub earnings: Earnings,
    /// Discounts breakdown.
    pub discounts: Discounts,
    /// Aggregated totals.
    pub totals: Totals,
    /// Tenure and notice metadata.
    pub meta: TerminationMeta,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
