//! Compound-interest projection for comparing two investment rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::tax::round_currency;

// 100 years of monthly compounding; keeps the loop bounded for
// arbitrary caller input.
const MAX_MONTHS: u32 = 1200;

/// Result of the investment projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    /// Projected balance at the first monthly rate.
    pub projected_a: Decimal,
    /// Projected balance at the second monthly rate.
    pub projected_b: Decimal,
    /// `projected_a − projected_b`; negative when the second rate wins.
    pub difference: Decimal,
}

/// Projects a lump sum under two fixed monthly rates over a horizon.
///
/// Computes `amount × (1 + rate)^months` for each rate by iterated
/// multiplication, which keeps exact decimal precision at every step.
/// The horizon is clamped to 1200 months.
pub fn project_investment(
    amount: Decimal,
    monthly_rate_a: Decimal,
    monthly_rate_b: Decimal,
    months: u32,
) -> InvestmentProjection {
    let months = months.min(MAX_MONTHS);

    let projected_a = round_currency(compound(amount, monthly_rate_a, months));
    let projected_b = round_currency(compound(amount, monthly_rate_b, months));

    InvestmentProjection {
        projected_a,
        projected_b,
        difference: projected_a - projected_b,
    }
}

fn compound(amount: Decimal, monthly_rate: Decimal, months: u32) -> Decimal {
    let factor = Decimal::ONE + monthly_rate;
    let mut balance = amount;
    for _ in 0..months {
        // Round to tenths of a cent per period so 100-year horizons
        // cannot overflow the 96-bit mantissa.
        balance = (balance * factor).round_dp(4);
    }
    balance
}
