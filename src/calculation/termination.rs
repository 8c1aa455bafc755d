//! The termination calculation engine.
//!
//! A single-pass pipeline over the per-rule modules, in a fixed order
//! because later stages consume earlier values: tax bases depend on the
//! salary balance and 13th salary, accrual months depend on the
//! projected exit date, and the projection depends on the notice credit,
//! which depends on the entitlement flags.
//!
//! The engine never fails. Logically inconsistent input (negative
//! salary, end date before start date, a notice type that does not fit
//! the reason) still produces a numeric result, with warnings recorded
//! in the audit trace.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::calculation::entitlement::resolve_entitlements;
use crate::calculation::fgts_penalty::calculate_fgts_penalty;
use crate::calculation::notice::calculate_notice;
use crate::calculation::salary_balance::calculate_salary_balance;
use crate::calculation::tax::{marginal_discount, progressive_discount};
use crate::calculation::tenure;
use crate::calculation::thirteenth::calculate_thirteenth;
use crate::calculation::vacation::calculate_vacation;
use crate::config::TaxTables;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Discounts, Earnings, TerminationInput, TerminationMeta,
    TerminationResult, Totals,
};
use rust_decimal::Decimal;

/// Runs the full termination settlement pipeline.
///
/// # Arguments
///
/// * `input` - The employment facts; treated as read-only
/// * `tables` - The statutory tables for the applicable year
///
/// # Returns
///
/// The complete settlement with earnings, discounts, totals, tenure
/// metadata, and a step-by-step audit trace. This function is
/// infallible by contract; see the module docs.
pub fn calculate_termination(input: &TerminationInput, tables: &TaxTables) -> TerminationResult {
    let started = Instant::now();
    let calculation_id = Uuid::new_v4();

    tracing::debug!(
        %calculation_id,
        reason = ?input.reason,
        "starting termination calculation"
    );

    let mut steps: Vec<AuditStep> = Vec::with_capacity(12);
    let warnings = collect_warnings(input);

    // Step 1: entitlement flags.
    let flags = resolve_entitlements(input.reason);
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "entitlement".to_string(),
        rule_name: "Entitlement Resolution".to_string(),
        legal_ref: "CLT arts. 477-484-A".to_string(),
        input: serde_json::json!({ "reason": input.reason }),
        output: serde_json::json!(flags),
        reasoning: "Entitlement flags resolved from the termination reason".to_string(),
    });

    // Step 2: notice days, value or deduction, and projection credit.
    let years = tenure::years_worked(input.start_date, input.end_date);
    let notice_days = tenure::notice_days(years, flags.probation_end);
    let credited_days =
        tenure::credited_notice_days(notice_days, input.notice_type, flags.mutual_agreement);
    let notice = calculate_notice(
        input.monthly_salary,
        notice_days,
        input.notice_type,
        &flags,
        2,
    );
    steps.push(notice.audit_step);

    // Step 3: projected exit date.
    let projected_exit = tenure::projected_exit_date(input.end_date, credited_days);
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "projected_exit".to_string(),
        rule_name: "Projected Exit Date".to_string(),
        legal_ref: "Lei 12.506/2011; OJ 82 SDI-1 TST".to_string(),
        input: serde_json::json!({
            "end_date": input.end_date,
            "credited_days": credited_days,
        }),
        output: serde_json::json!({ "projected_exit_date": projected_exit }),
        reasoning: format!(
            "Contract end extended by {} credited notice days for accrual purposes",
            credited_days
        ),
    });

    // Step 4: salary balance.
    let salary_balance = calculate_salary_balance(input.monthly_salary, input.end_date, 4);
    steps.push(salary_balance.audit_step);

    // Step 5: vacation.
    let anniversary = tenure::vacation_anniversary(input.start_date, projected_exit);
    let vacation_months = tenure::accrual_months(anniversary, projected_exit);
    let vacation = calculate_vacation(
        input.monthly_salary,
        input.overdue_vacation_days,
        vacation_months,
        flags.for_cause,
        5,
    );
    steps.push(vacation.audit_step);

    // Step 6: 13th salary.
    let thirteenth_anchor = tenure::thirteenth_anchor(input.start_date, projected_exit);
    let thirteenth_months = tenure::accrual_months(thirteenth_anchor, projected_exit);
    let thirteenth = calculate_thirteenth(
        input.monthly_salary,
        thirteenth_months,
        flags.for_cause,
        input.thirteenth_advance_paid,
        6,
    );
    steps.push(thirteenth.audit_step);

    // Step 7: FGTS penalty.
    let fgts = calculate_fgts_penalty(input.fgts_balance, &flags, 7);
    steps.push(fgts.audit_step);

    // Step 8: gross earnings.
    let earnings = Earnings {
        salary_balance: salary_balance.value,
        notice_value: notice.notice_value,
        vacation_total: vacation.vacation_total,
        thirteenth_salary: thirteenth.value,
        fgts_penalty: fgts.value,
    };
    let gross = earnings.salary_balance
        + earnings.notice_value
        + earnings.vacation_total
        + earnings.thirteenth_salary
        + earnings.fgts_penalty;
    steps.push(AuditStep {
        step_number: 8,
        rule_id: "gross_total".to_string(),
        rule_name: "Gross Earnings".to_string(),
        legal_ref: "CLT art. 477".to_string(),
        input: serde_json::json!(earnings),
        output: serde_json::json!({ "gross": gross }),
        reasoning: "Sum of salary balance, notice, vacation, 13th salary, and FGTS penalty"
            .to_string(),
    });

    // Step 9: social-security withholding on salary balance + 13th.
    let inss_base = earnings.salary_balance + earnings.thirteenth_salary;
    let inss = progressive_discount(inss_base, &tables.inss);
    steps.push(AuditStep {
        step_number: 9,
        rule_id: "inss".to_string(),
        rule_name: "INSS Withholding".to_string(),
        legal_ref: "Lei 8.212/1991 art. 28".to_string(),
        input: serde_json::json!({ "base": inss_base }),
        output: serde_json::json!({ "inss": inss }),
        reasoning: "Progressive brackets over salary balance plus 13th salary".to_string(),
    });

    // Step 10: income-tax withholding on the INSS-reduced base.
    let irrf_base = inss_base - inss;
    let irrf = marginal_discount(irrf_base, input.dependents, &tables.irrf);
    steps.push(AuditStep {
        step_number: 10,
        rule_id: "irrf".to_string(),
        rule_name: "IRRF Withholding".to_string(),
        legal_ref: "RIR/2018 art. 677".to_string(),
        input: serde_json::json!({
            "base": irrf_base,
            "dependents": input.dependents,
        }),
        output: serde_json::json!({ "irrf": irrf }),
        reasoning: "Marginal bracket over the INSS-reduced base with dependent deductions"
            .to_string(),
    });

    // Step 11: total discounts.
    let discounts = Discounts {
        inss,
        irrf,
        notice_deduction: notice.notice_deduction,
        thirteenth_advance: thirteenth.advance_deduction,
    };
    let discounts_total =
        discounts.inss + discounts.irrf + discounts.notice_deduction + discounts.thirteenth_advance;
    steps.push(AuditStep {
        step_number: 11,
        rule_id: "discounts_total".to_string(),
        rule_name: "Total Discounts".to_string(),
        legal_ref: "CLT art. 477 §5".to_string(),
        input: serde_json::json!(discounts),
        output: serde_json::json!({ "discounts": discounts_total }),
        reasoning: "Sum of INSS, IRRF, notice deduction, and 13th-salary advance".to_string(),
    });

    // Step 12: net.
    let net = gross - discounts_total;
    steps.push(AuditStep {
        step_number: 12,
        rule_id: "net_total".to_string(),
        rule_name: "Net Settlement".to_string(),
        legal_ref: "CLT art. 477".to_string(),
        input: serde_json::json!({ "gross": gross, "discounts": discounts_total }),
        output: serde_json::json!({ "net": net }),
        reasoning: "Gross earnings minus total discounts".to_string(),
    });

    let duration_us = started.elapsed().as_micros() as u64;

    tracing::debug!(
        %calculation_id,
        %net,
        duration_us,
        warnings = warnings.len(),
        "termination calculation complete"
    );

    TerminationResult {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        table_year: tables.effective_year,
        earnings,
        discounts,
        totals: Totals {
            gross,
            discounts: discounts_total,
            net,
        },
        meta: TerminationMeta {
            years_worked: years,
            notice_days,
            projected_exit_date: projected_exit,
            vacation_months,
            thirteenth_months,
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

/// Flags logically inconsistent input without rejecting it.
fn collect_warnings(input: &TerminationInput) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if input.end_date < input.start_date {
        warnings.push(AuditWarning {
            code: "END_BEFORE_START".to_string(),
            message: format!(
                "End date {} precedes start date {}; dates treated as unordered",
                input.end_date, input.start_date
            ),
            severity: "high".to_string(),
        });
    }

    if input.monthly_salary <= Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NON_POSITIVE_SALARY".to_string(),
            message: format!("Monthly salary {} is not positive", input.monthly_salary),
            severity: "high".to_string(),
        });
    }

    if !input
        .reason
        .allowed_notice_types()
        .contains(&input.notice_type)
    {
        warnings.push(AuditWarning {
            code: "NOTICE_TYPE_MISMATCH".to_string(),
            message: format!(
                "Notice type {:?} is not typical for reason {:?}",
                input.notice_type, input.reason
            ),
            severity: "medium".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{NoticeType, TerminationReason};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tables_2024() -> TaxTables {
        let loader = ConfigLoader::load("./config/clt").unwrap();
        loader.for_year(2024).unwrap().clone()
    }

    fn dismissal_input() -> TerminationInput {
        TerminationInput {
            monthly_salary: dec("3000.00"),
            start_date: date(2023, 1, 1),
            end_date: date(2024, 1, 1),
            reason: TerminationReason::DismissalWithoutCause,
            notice_type: NoticeType::Indemnified,
            overdue_vacation_days: 0,
            fgts_balance: dec("8000.00"),
            dependents: 0,
            thirteenth_advance_paid: false,
        }
    }

    /// TE-001: dismissal without cause at exactly one year of tenure
    #[test]
    fn test_dismissal_without_cause_one_year() {
        let result = calculate_termination(&dismissal_input(), &tables_2024());

        assert_eq!(result.meta.years_worked, 1);
        assert_eq!(result.meta.notice_days, 33);
        assert_eq!(result.meta.projected_exit_date, date(2024, 2, 3));
        assert_eq!(result.meta.vacation_months, 1);
        assert_eq!(result.meta.thirteenth_months, 1);

        assert_eq!(result.earnings.salary_balance, dec("100.00"));
        assert_eq!(result.earnings.notice_value, dec("3300.00"));
        assert_eq!(result.earnings.vacation_total, dec("333.33"));
        assert_eq!(result.earnings.thirteenth_salary, dec("250.00"));
        assert_eq!(result.earnings.fgts_penalty, dec("3200.00"));

        // INSS on 350.00 at 7.5% = 26.25; IRRF base 323.75 is exempt.
        assert_eq!(result.discounts.inss, dec("26.25"));
        assert_eq!(result.discounts.irrf, dec("0"));

        assert_eq!(result.totals.gross, dec("7183.33"));
        assert_eq!(result.totals.discounts, dec("26.25"));
        assert_eq!(result.totals.net, dec("7157.08"));
        assert!(result.audit_trace.warnings.is_empty());
    }

    /// TE-002: for-cause dismissal forfeits all discretionary amounts
    #[test]
    fn test_dismissal_with_cause_forfeits() {
        let input = TerminationInput {
            reason: TerminationReason::DismissalWithCause,
            notice_type: NoticeType::NotApplicable,
            ..dismissal_input()
        };
        let result = calculate_termination(&input, &tables_2024());

        assert_eq!(result.earnings.notice_value, dec("0"));
        assert_eq!(result.earnings.vacation_total, dec("0"));
        assert_eq!(result.earnings.thirteenth_salary, dec("0"));
        assert_eq!(result.earnings.fgts_penalty, dec("0"));
        assert_eq!(result.earnings.salary_balance, dec("100.00"));
    }

    /// TE-003: mutual agreement halves the penalty and the notice value
    #[test]
    fn test_mutual_agreement_halves() {
        let input = TerminationInput {
            monthly_salary: dec("3000.00"),
            start_date: date(2022, 1, 1),
            end_date: date(2024, 1, 1),
            reason: TerminationReason::MutualAgreement,
            notice_type: NoticeType::Indemnified,
            fgts_balance: dec("10000.00"),
            ..dismissal_input()
        };
        let result = calculate_termination(&input, &tables_2024());

        assert_eq!(result.meta.years_worked, 2);
        assert_eq!(result.meta.notice_days, 36);
        assert_eq!(result.earnings.fgts_penalty, dec("2000.00"));
        // Full indemnity would be 3600.00.
        assert_eq!(result.earnings.notice_value, dec("1800.00"));
        // Half of 36 days credited: exit projected 18 days past Jan 1.
        assert_eq!(result.meta.projected_exit_date, date(2024, 1, 19));
    }

    /// TE-004: resignation with unfulfilled notice deducts a month's salary
    #[test]
    fn test_resignation_unfulfilled_notice() {
        let input = TerminationInput {
            reason: TerminationReason::Resignation,
            notice_type: NoticeType::NotFulfilled,
            ..dismissal_input()
        };
        let result = calculate_termination(&input, &tables_2024());

        assert_eq!(result.earnings.notice_value, dec("0"));
        assert_eq!(result.earnings.fgts_penalty, dec("0"));
        assert_eq!(result.discounts.notice_deduction, dec("3000.00"));
        // No credited days: exit stays at the contract end.
        assert_eq!(result.meta.projected_exit_date, date(2024, 1, 1));
    }

    /// TE-005: probation end has zero notice days
    #[test]
    fn test_probation_end_no_notice() {
        let input = TerminationInput {
            start_date: date(2023, 10, 1),
            end_date: date(2023, 12, 30),
            reason: TerminationReason::ProbationEnd,
            notice_type: NoticeType::NotApplicable,
            ..dismissal_input()
        };
        let result = calculate_termination(&input, &tables_2024());

        assert_eq!(result.meta.notice_days, 0);
        assert_eq!(result.earnings.notice_value, dec("0"));
        assert_eq!(result.discounts.notice_deduction, dec("0"));
    }

    /// TE-006: the 13th advance is deducted at half the salary
    #[test]
    fn test_thirteenth_advance_deducted() {
        let input = TerminationInput {
            thirteenth_advance_paid: true,
            ..dismissal_input()
        };
        let result = calculate_termination(&input, &tables_2024());
        assert_eq!(result.discounts.thirteenth_advance, dec("1500.00"));
    }

    /// TE-007: inverted dates produce a result plus a high-severity warning
    #[test]
    fn test_end_before_start_warns_not_fails() {
        let input = TerminationInput {
            start_date: date(2024, 1, 1),
            end_date: date(2023, 1, 1),
            ..dismissal_input()
        };
        let result = calculate_termination(&input, &tables_2024());

        assert_eq!(result.meta.years_worked, 1);
        assert!(result
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "END_BEFORE_START"));
    }

    /// TE-008: negative salary still computes, with a warning
    #[test]
    fn test_negative_salary_warns() {
        let input = TerminationInput {
            monthly_salary: dec("-1000.00"),
            ..dismissal_input()
        };
        let result = calculate_termination(&input, &tables_2024());
        assert!(result
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "NON_POSITIVE_SALARY"));
    }

    /// TE-009: a notice type foreign to the reason is flagged, not rejected
    #[test]
    fn test_notice_type_mismatch_warns() {
        let input = TerminationInput {
            reason: TerminationReason::Resignation,
            notice_type: NoticeType::Indemnified,
            ..dismissal_input()
        };
        let result = calculate_termination(&input, &tables_2024());
        assert!(result
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "NOTICE_TYPE_MISMATCH"));
        // Resignation never grants the indemnity.
        assert_eq!(result.earnings.notice_value, dec("0"));
    }

    /// TE-010: the audit trace carries all twelve steps in order
    #[test]
    fn test_audit_trace_has_twelve_ordered_steps() {
        let result = calculate_termination(&dismissal_input(), &tables_2024());
        let numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u32>>());
    }

    /// TE-011: the pure math is idempotent across calls
    #[test]
    fn test_idempotent_math() {
        let input = dismissal_input();
        let tables = tables_2024();
        let first = calculate_termination(&input, &tables);
        let second = calculate_termination(&input, &tables);

        assert_eq!(first.earnings, second.earnings);
        assert_eq!(first.discounts, second.discounts);
        assert_eq!(first.totals, second.totals);
        assert_eq!(first.meta, second.meta);
    }

    /// TE-012: death keeps proportional amounts, drops notice and penalty
    #[test]
    fn test_death() {
        let input = TerminationInput {
            start_date: date(2022, 1, 1),
            end_date: date(2023, 8, 20),
            reason: TerminationReason::Death,
            notice_type: NoticeType::NotApplicable,
            ..dismissal_input()
        };
        let result = calculate_termination(&input, &tables_2024());

        assert_eq!(result.earnings.notice_value, dec("0"));
        assert_eq!(result.earnings.fgts_penalty, dec("0"));
        assert!(result.earnings.thirteenth_salary > dec("0"));
        assert!(result.earnings.vacation_total > dec("0"));
    }
}
