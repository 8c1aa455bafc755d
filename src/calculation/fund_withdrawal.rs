//! FGTS anniversary withdrawal (saque-aniversário) calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::tax::round_currency;
use crate::config::FgtsWithdrawalTable;

/// Result of the anniversary withdrawal calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundWithdrawalResult {
    /// The amount withdrawable this anniversary.
    pub withdrawal: Decimal,
    /// The rate of the matched tier.
    pub rate: Decimal,
    /// The fixed addend of the matched tier.
    pub addend: Decimal,
}

/// Calculates the annual anniversary withdrawal from an FGTS balance.
///
/// A single-bracket lookup, not a progressive walk: the first tier
/// whose bound is on or above the balance supplies
/// `balance × rate + addend`. Larger balances match lower rates with
/// larger addends, so the withdrawal grows continuously.
///
/// # Legal Reference
///
/// Lei 8.036/1990 art. 20-D (saque-aniversário).
pub fn calculate_fund_withdrawal(
    balance: Decimal,
    table: &FgtsWithdrawalTable,
) -> FundWithdrawalResult {
    let tier = table.tiers.iter().find(|t| match t.upper_bound {
        Some(bound) => balance <= bound,
        None => true,
    });

    match tier {
        Some(tier) => FundWithdrawalResult {
            withdrawal: round_currency(balance * tier.rate + tier.addend),
            rate: tier.rate,
            addend: tier.addend,
        },
        None => FundWithdrawalResult {
            withdrawal: Decimal::ZERO,
            rate: Decimal::ZERO,
            addend: Decimal::ZERO,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table() -> FgtsWithdrawalTable {
        let loader = ConfigLoader::load("./config/clt").unwrap();
        loader.for_year(2024).unwrap().fgts_withdrawal.clone()
    }

    /// FW-001: the lowest tier pays half the balance
    #[test]
    fn test_lowest_tier() {
        let result = calculate_fund_withdrawal(dec("400.00"), &table());
        assert_eq!(result.withdrawal, dec("200.00"));
        assert_eq!(result.rate, dec("0.50"));
    }

    /// FW-002: a mid-range balance applies rate plus addend
    #[test]
    fn test_middle_tier() {
        // 3000 * 0.30 + 150 = 1050
        let result = calculate_fund_withdrawal(dec("3000.00"), &table());
        assert_eq!(result.withdrawal, dec("1050.00"));
    }

    /// FW-003: the open top tier covers any balance
    #[test]
    fn test_top_tier() {
        // 50000 * 0.05 + 2900 = 5400
        let result = calculate_fund_withdrawal(dec("50000.00"), &table());
        assert_eq!(result.withdrawal, dec("5400.00"));
    }

    /// FW-004: tier bounds are inclusive and the payout is continuous
    #[test]
    fn test_continuity_at_bound() {
        // At 500.00: 500 * 0.50 = 250. Just above: 500.01 * 0.40 + 50 = 250.00
        let at_bound = calculate_fund_withdrawal(dec("500.00"), &table());
        let above = calculate_fund_withdrawal(dec("500.01"), &table());
        assert_eq!(at_bound.withdrawal, dec("250.00"));
        assert_eq!(above.withdrawal, dec("250.00"));
    }

    /// FW-005: a zero balance withdraws nothing
    #[test]
    fn test_zero_balance() {
        let result = calculate_fund_withdrawal(dec("0"), &table());
        assert_eq!(result.withdrawal, dec("0"));
    }
}
