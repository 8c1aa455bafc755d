//! Request types for the CLT calculation engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints. Each request that consults the statutory tables carries an
//! optional `table_year`; when absent, the termination endpoint derives
//! the year from the contract end date and the auxiliary endpoints use
//! the most recent published set.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NoticeType, TerminationInput, TerminationReason};

/// Request body for the `/calculate/termination` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminationRequest {
    /// The monthly gross salary.
    pub monthly_salary: Decimal,
    /// The contract start date.
    pub start_date: NaiveDate,
    /// The contract end date.
    pub end_date: NaiveDate,
    /// The legal termination reason.
    pub reason: TerminationReason,
    /// How the notice period is settled.
    pub notice_type: NoticeType,
    /// Days of overdue vacation still owed.
    #[serde(default)]
    pub overdue_vacation_days: u32,
    /// The FGTS fund balance used as the penalty base.
    #[serde(default)]
    pub fgts_balance: Decimal,
    /// Number of dependents for the income-tax deduction.
    #[serde(default)]
    pub dependents: u32,
    /// Whether the 13th-salary first installment was already advanced.
    #[serde(default)]
    pub thirteenth_advance_paid: bool,
    /// Statutory table year override; defaults to the end date's year.
    #[serde(default)]
    pub table_year: Option<i32>,
}

impl From<TerminationRequest> for TerminationInput {
    fn from(request: TerminationRequest) -> Self {
        TerminationInput {
            monthly_salary: request.monthly_salary,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason,
            notice_type: request.notice_type,
            overdue_vacation_days: request.overdue_vacation_days,
            fgts_balance: request.fgts_balance,
            dependents: request.dependents,
            thirteenth_advance_paid: request.thirteenth_advance_paid,
        }
    }
}

/// Request body for the `/calculate/unemployment` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnemploymentRequest {
    /// The last three gross salaries, most recent first.
    pub last_salaries: [Decimal; 3],
    /// Months worked in the qualifying period.
    pub months_worked: u32,
    /// Which benefit request this is (1 = first, 2 = second, 3+ = later).
    #[serde(default = "default_request_number")]
    pub request_number: u32,
    /// Statutory table year override.
    #[serde(default)]
    pub table_year: Option<i32>,
}

fn default_request_number() -> u32 {
    1
}

/// Request body for the `/calculate/vacation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRequest {
    /// The monthly gross salary.
    pub monthly_salary: Decimal,
    /// Days of vacation being taken.
    #[serde(default = "default_vacation_days")]
    pub vacation_days: u32,
    /// Whether 10 days are sold as abono pecuniário.
    #[serde(default)]
    pub sell_abono: bool,
    /// Number of dependents for the income-tax deduction.
    #[serde(default)]
    pub dependents: u32,
    /// Statutory table year override.
    #[serde(default)]
    pub table_year: Option<i32>,
}

fn default_vacation_days() -> u32 {
    30
}

/// Request body for the `/calculate/overtime` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The monthly gross salary.
    pub monthly_salary: Decimal,
    /// Overtime hours worked.
    pub hours: Decimal,
    /// Surcharge percentage over the base hourly rate.
    #[serde(default = "default_surcharge")]
    pub surcharge_percent: Decimal,
    /// Whether to include the weekly-rest-day reflection.
    #[serde(default)]
    pub include_dsr: bool,
}

fn default_surcharge() -> Decimal {
    Decimal::from_parts(50, 0, 0, false, 0)
}

/// Request body for the `/calculate/fgts-withdrawal` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FgtsWithdrawalRequest {
    /// The FGTS account balance.
    pub balance: Decimal,
    /// Statutory table year override.
    #[serde(default)]
    pub table_year: Option<i32>,
}

/// Request body for the `/calculate/investment` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentRequest {
    /// The lump sum to project.
    pub amount: Decimal,
    /// First monthly rate (e.g., 0.01 for 1% per month).
    pub monthly_rate_a: Decimal,
    /// Second monthly rate to compare against.
    pub monthly_rate_b: Decimal,
    /// The projection horizon in months.
    pub months: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_termination_request_defaults() {
        let json = r#"{
            "monthly_salary": "3000.00",
            "start_date": "2023-01-01",
            "end_date": "2024-01-01",
            "reason": "dismissal_without_cause",
            "notice_type": "indemnified"
        }"#;

        let request: TerminationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.table_year, None);
        assert_eq!(request.overdue_vacation_days, 0);

        let input: TerminationInput = request.into();
        assert_eq!(input.fgts_balance, Decimal::ZERO);
    }

    #[test]
    fn test_vacation_request_defaults() {
        let json = r#"{"monthly_salary": "3000.00"}"#;
        let request: VacationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.vacation_days, 30);
        assert!(!request.sell_abono);
    }

    #[test]
    fn test_overtime_request_default_surcharge() {
        let json = r#"{"monthly_salary": "2200.00", "hours": "10"}"#;
        let request: OvertimeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.surcharge_percent, Decimal::from_str("50").unwrap());
    }

    #[test]
    fn test_unemployment_request_defaults_to_first_request() {
        let json = r#"{
            "last_salaries": ["2000.00", "2000.00", "2000.00"],
            "months_worked": 18
        }"#;
        let request: UnemploymentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.request_number, 1);
    }
}
