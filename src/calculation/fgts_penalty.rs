//! FGTS termination penalty rule.

use rust_decimal::Decimal;

use crate::calculation::entitlement::EntitlementFlags;
use crate::calculation::tax::round_currency;
use crate::models::AuditStep;

const FULL_PENALTY_RATE: Decimal = Decimal::from_parts(40, 0, 0, false, 2);
const HALF_PENALTY_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Result of the FGTS penalty calculation.
#[derive(Debug, Clone)]
pub struct FgtsPenaltyResult {
    /// Employer-paid penalty on the fund balance.
    pub value: Decimal,
    /// The rate that was applied (0.40, 0.20, or zero).
    pub rate: Decimal,
    /// The audit step documenting this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employer-paid penalty on the FGTS balance.
///
/// 40% of the balance for a full-penalty entitlement, 20% under mutual
/// agreement, nothing otherwise. The balance is caller-supplied; the
/// engine never estimates deposits.
///
/// # Legal Reference
///
/// Lei 8.036/1990 art. 18 §1; CLT art. 484-A §1 (halved rate).
pub fn calculate_fgts_penalty(
    fgts_balance: Decimal,
    flags: &EntitlementFlags,
    step_number: u32,
) -> FgtsPenaltyResult {
    let rate = if flags.full_fgts_penalty {
        FULL_PENALTY_RATE
    } else if flags.mutual_agreement {
        HALF_PENALTY_RATE
    } else {
        Decimal::ZERO
    };

    let value = round_currency(fgts_balance * rate);

    let reasoning = if rate.is_zero() {
        "No FGTS penalty owed for this termination reason".to_string()
    } else {
        format!("Penalty of {}% on the fund balance", rate * Decimal::ONE_HUNDRED)
    };

    FgtsPenaltyResult {
        value,
        rate,
        audit_step: AuditStep {
            step_number,
            rule_id: "fgts_penalty".to_string(),
            rule_name: "FGTS Penalty".to_string(),
            legal_ref: "Lei 8.036/1990 art. 18".to_string(),
            input: serde_json::json!({
                "fgts_balance": fgts_balance,
            }),
            output: serde_json::json!({
                "rate": rate,
                "value": value,
            }),
            reasoning,
        },
    }
}
