//! Vacation rules: the termination vacation step and the standalone
//! vacation calculator with the abono (sell-10-days) branch.

use rust_decimal::Decimal;

use crate::calculation::salary_balance::MONTH_DAYS;
use crate::calculation::tax::{marginal_discount, progressive_discount, round_currency};
use crate::config::TaxTables;
use crate::models::AuditStep;

const TWELVE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const FOUR: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
const THREE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Result of the termination vacation calculation.
#[derive(Debug, Clone)]
pub struct VacationResult {
    /// Total vacation payout including the one-third constitutional bonus.
    pub vacation_total: Decimal,
    /// Value of overdue (vencidas) vacation days before the bonus.
    pub overdue_value: Decimal,
    /// Proportional accrual value before the bonus.
    pub proportional_value: Decimal,
    /// The audit step documenting this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the vacation payout for a termination.
///
/// Overdue days are paid at the 30-day-month daily rate; the proportional
/// accrual pays `salary/12` per accrual month, forfeited entirely on a
/// for-cause dismissal (overdue days are an acquired right and survive).
/// The constitutional one-third bonus applies to the sum of both.
///
/// # Legal Reference
///
/// CF/1988 art. 7 XVII (one-third bonus); CLT arts. 129-146.
pub fn calculate_vacation(
    monthly_salary: Decimal,
    overdue_vacation_days: u32,
    vacation_months: u32,
    for_cause: bool,
    step_number: u32,
) -> VacationResult {
    let daily_rate = monthly_salary / MONTH_DAYS;
    let overdue_value = round_currency(daily_rate * Decimal::from(overdue_vacation_days));

    let proportional_value = if for_cause {
        Decimal::ZERO
    } else {
        round_currency(monthly_salary / TWELVE * Decimal::from(vacation_months))
    };

    let vacation_total = round_currency((overdue_value + proportional_value) * FOUR / THREE);

    let reasoning = if for_cause {
        format!(
            "Proportional vacation forfeited for just cause; {} overdue days paid with one-third bonus",
            overdue_vacation_days
        )
    } else {
        format!(
            "{} overdue days plus {} accrual months, with one-third bonus",
            overdue_vacation_days, vacation_months
        )
    };

    VacationResult {
        vacation_total,
        overdue_value,
        proportional_value,
        audit_step: AuditStep {
            step_number,
            rule_id: "vacation".to_string(),
            rule_name: "Vacation".to_string(),
            legal_ref: "CF/1988 art. 7 XVII; CLT art. 146".to_string(),
            input: serde_json::json!({
                "monthly_salary": monthly_salary,
                "overdue_vacation_days": overdue_vacation_days,
                "vacation_months": vacation_months,
                "for_cause": for_cause,
            }),
            output: serde_json::json!({
                "overdue_value": overdue_value,
                "proportional_value": proportional_value,
                "vacation_total": vacation_total,
            }),
            reasoning,
        },
    }
}

/// Result of the standalone vacation calculator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VacationPayResult {
    /// Value of the vacation days taken, before the bonus.
    pub vacation_value: Decimal,
    /// The one-third constitutional bonus on the taken days.
    pub one_third_bonus: Decimal,
    /// Tax-exempt cash-out for the 10 sold days, including its own
    /// one-third bonus. Zero when the abono is not taken.
    pub abono_value: Decimal,
    /// Social-security withholding on the taxable portion.
    pub inss: Decimal,
    /// Income-tax withholding on the taxable portion.
    pub irrf: Decimal,
    /// Net amount received.
    pub net: Decimal,
}

/// Calculates vacation pay outside a termination context.
///
/// Selling the abono converts 10 of the requested days into a tax-exempt
/// cash-out; the remaining days plus their one-third bonus form the
/// taxable base for the progressive and marginal withholdings.
///
/// # Arguments
///
/// * `monthly_salary` - The monthly gross salary
/// * `vacation_days` - Days of vacation being taken (typically 30)
/// * `sell_abono` - Whether 10 days are sold as abono pecuniário
/// * `dependents` - Dependents for the income-tax deduction
/// * `tables` - The statutory tables for the applicable year
///
/// # Legal Reference
///
/// CLT art. 143 (abono pecuniário); the abono is exempt from
/// withholding per RIR/2018 art. 35 VIII.
pub fn calculate_standalone_vacation(
    monthly_salary: Decimal,
    vacation_days: u32,
    sell_abono: bool,
    dependents: u32,
    tables: &TaxTables,
) -> VacationPayResult {
    let daily_rate = monthly_salary / MONTH_DAYS;

    let (taken_days, sold_days) = if sell_abono {
        (vacation_days.saturating_sub(10), 10)
    } else {
        (vacation_days, 0)
    };

    let vacation_value = round_currency(daily_rate * Decimal::from(taken_days));
    let one_third_bonus = round_currency(vacation_value / THREE);

    let abono_base = round_currency(daily_rate * Decimal::from(sold_days));
    let abono_value = round_currency(abono_base * FOUR / THREE);

    let taxable = vacation_value + one_third_bonus;
    let inss = progressive_discount(taxable, &tables.inss);
    let irrf = marginal_discount(taxable - inss, dependents, &tables.irrf);

    let net = taxable + abono_value - inss - irrf;

    VacationPayResult {
        vacation_value,
        one_third_bonus,
        abono_value,
        inss,
        irrf,
        net,
    }
}
