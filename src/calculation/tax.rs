//! Progressive and marginal withholding functions.
//!
//! This module provides the two bracket-table computations shared by the
//! termination engine and the auxiliary calculators: the progressive
//! (INSS-style) slice walk and the marginal (IRRF-style) single-bracket
//! application.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{InssTable, IrrfTable};

/// Rounds an amount to currency precision (2 decimal places, midpoint
/// away from zero).
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the progressive (INSS-style) withholding for a base amount.
///
/// Walks the brackets in ascending order, adding `rate × slice-within-bracket`
/// for each bracket the base reaches. Bases above the table's top bound pay
/// the fixed ceiling contribution instead.
///
/// # Arguments
///
/// * `base` - The contribution base (salary balance plus 13th salary for
///   terminations)
/// * `table` - The progressive bracket table with its ceiling
///
/// # Returns
///
/// The withholding amount rounded to 2 decimal places. Never negative;
/// non-positive bases contribute nothing.
///
/// # Legal Reference
///
/// Lei 8.212/1991 art. 28 (contribution salary) and the annual
/// Portaria Interministerial bracket revision.
///
/// # Examples
///
/// ```
/// use clt_engine::calculation::progressive_discount;
/// use clt_engine::config::{InssTable, ProgressiveBracket};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = InssTable {
///     ceiling: Decimal::from_str("908.85").unwrap(),
///     brackets: vec![ProgressiveBracket {
///         upper_bound: Decimal::from_str("1412.00").unwrap(),
///         rate: Decimal::from_str("0.075").unwrap(),
///     }],
/// };
///
/// let discount = progressive_discount(Decimal::from_str("1000.00").unwrap(), &table);
/// assert_eq!(discount, Decimal::from_str("75.00").unwrap());
/// ```
pub fn progressive_discount(base: Decimal, table: &InssTable) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    // Bases above the top bound pay the fixed ceiling contribution.
    if let Some(top) = table.brackets.last() {
        if base > top.upper_bound {
            return table.ceiling;
        }
    }

    let mut discount = Decimal::ZERO;
    let mut previous_bound = Decimal::ZERO;

    for bracket in &table.brackets {
        let slice_end = base.min(bracket.upper_bound);
        discount += (slice_end - previous_bound) * bracket.rate;

        if base <= bracket.upper_bound {
            break;
        }
        previous_bound = bracket.upper_bound;
    }

    round_currency(discount)
}

/// Computes the marginal (IRRF-style) withholding for a base amount.
///
/// The taxable base is reduced by the per-dependent deduction, then a
/// single bracket — the first whose bound is on or above the taxable
/// base — supplies the rate and fixed deduction:
/// `max(0, taxable × rate − deduction)`.
///
/// # Arguments
///
/// * `base` - The taxable base before dependent deductions
/// * `dependents` - Number of declared dependents
/// * `table` - The marginal bracket table with the per-dependent deduction
///
/// # Returns
///
/// The withholding amount rounded to 2 decimal places. Exempt bands and
/// negative taxable bases (more dependents than the base justifies)
/// yield zero — the result is never negative.
///
/// # Legal Reference
///
/// RIR/2018 art. 677 (withholding at source) and the annual bracket
/// revision.
pub fn marginal_discount(base: Decimal, dependents: u32, table: &IrrfTable) -> Decimal {
    let taxable = base - Decimal::from(dependents) * table.dependent_deduction;

    let bracket = table.brackets.iter().find(|b| match b.upper_bound {
        Some(bound) => taxable <= bound,
        None => true,
    });

    // The final bracket is unbounded, so a match is guaranteed for any
    // validated table; an empty table withholds nothing.
    let Some(bracket) = bracket else {
        return Decimal::ZERO;
    };

    if bracket.rate.is_zero() {
        return Decimal::ZERO;
    }

    let amount = (taxable * bracket.rate - bracket.deduction).max(Decimal::ZERO);
    round_currency(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MarginalBracket, ProgressiveBracket};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// The 2024 INSS table.
    fn inss_table() -> InssTable {
        InssTable {
            ceiling: dec("908.85"),
            brackets: vec![
                ProgressiveBracket {
                    upper_bound: dec("1412.00"),
                    rate: dec("0.075"),
                },
                ProgressiveBracket {
                    upper_bound: dec("2666.68"),
                    rate: dec("0.09"),
                },
                ProgressiveBracket {
                    upper_bound: dec("4000.03"),
                    rate: dec("0.12"),
                },
                ProgressiveBracket {
                    upper_bound: dec("7786.02"),
                    rate: dec("0.14"),
                },
            ],
        }
    }

    /// The 2024 IRRF table.
    fn irrf_table() -> IrrfTable {
        IrrfTable {
            dependent_deduction: dec("189.59"),
            brackets: vec![
                MarginalBracket {
                    upper_bound: Some(dec("2259.20")),
                    rate: dec("0"),
                    deduction: dec("0"),
                },
                MarginalBracket {
                    upper_bound: Some(dec("2826.65")),
                    rate: dec("0.075"),
                    deduction: dec("169.44"),
                },
                MarginalBracket {
                    upper_bound: Some(dec("3751.05")),
                    rate: dec("0.15"),
                    deduction: dec("381.44"),
                },
                MarginalBracket {
                    upper_bound: Some(dec("4664.68")),
                    rate: dec("0.225"),
                    deduction: dec("662.77"),
                },
                MarginalBracket {
                    upper_bound: None,
                    rate: dec("0.275"),
                    deduction: dec("896.00"),
                },
            ],
        }
    }

    /// PD-001: first-bracket base pays first-bracket rate only
    #[test]
    fn test_progressive_first_bracket_only() {
        let discount = progressive_discount(dec("1000.00"), &inss_table());
        assert_eq!(discount, dec("75.00"));
    }

    /// PD-002: base spanning two brackets sums the slices
    #[test]
    fn test_progressive_spans_two_brackets() {
        // 1412.00 * 0.075 + (2000.00 - 1412.00) * 0.09 = 105.90 + 52.92
        let discount = progressive_discount(dec("2000.00"), &inss_table());
        assert_eq!(discount, dec("158.82"));
    }

    /// PD-003: base above the top bound pays the ceiling exactly
    #[test]
    fn test_progressive_above_top_bound_pays_ceiling() {
        let discount = progressive_discount(dec("10000.00"), &inss_table());
        assert_eq!(discount, dec("908.85"));
    }

    /// PD-004: base exactly at a bracket bound equals the approach from below
    #[test]
    fn test_progressive_continuous_at_bracket_boundary() {
        let at_bound = progressive_discount(dec("1412.00"), &inss_table());
        let just_below = progressive_discount(dec("1411.99"), &inss_table());

        assert_eq!(at_bound, dec("105.90"));
        assert!(at_bound - just_below < dec("0.01"));
    }

    /// PD-005: zero and negative bases contribute nothing
    #[test]
    fn test_progressive_zero_and_negative_base() {
        assert_eq!(progressive_discount(dec("0"), &inss_table()), dec("0"));
        assert_eq!(progressive_discount(dec("-500"), &inss_table()), dec("0"));
    }

    /// MD-001: base within the exempt band withholds nothing
    #[test]
    fn test_marginal_exempt_band() {
        let discount = marginal_discount(dec("2000.00"), 0, &irrf_table());
        assert_eq!(discount, dec("0"));
    }

    /// MD-002: single-bracket rate minus fixed deduction
    #[test]
    fn test_marginal_second_bracket() {
        // 2500.00 * 0.075 - 169.44 = 18.06
        let discount = marginal_discount(dec("2500.00"), 0, &irrf_table());
        assert_eq!(discount, dec("18.06"));
    }

    /// MD-003: top bracket applies to unbounded bases
    #[test]
    fn test_marginal_top_bracket() {
        // 10000.00 * 0.275 - 896.00 = 1854.00
        let discount = marginal_discount(dec("10000.00"), 0, &irrf_table());
        assert_eq!(discount, dec("1854.00"));
    }

    /// MD-004: base exactly at a bound takes the lower bracket
    #[test]
    fn test_marginal_upper_bound_inclusive() {
        // 2826.65 * 0.075 - 169.44 = 42.56 (not the 15% bracket)
        let discount = marginal_discount(dec("2826.65"), 0, &irrf_table());
        assert_eq!(discount, dec("42.56"));
    }

    /// MD-005: dependents reduce the taxable base
    #[test]
    fn test_marginal_dependents_reduce_base() {
        // 3000.00 - 2 * 189.59 = 2620.82; * 0.075 - 169.44 = 27.12 (rounded)
        let discount = marginal_discount(dec("3000.00"), 2, &irrf_table());
        assert_eq!(discount, dec("27.12"));
    }

    /// MD-006: negative taxable base clamps to zero
    #[test]
    fn test_marginal_negative_taxable_base_clamps_to_zero() {
        let discount = marginal_discount(dec("100.00"), 10, &irrf_table());
        assert_eq!(discount, dec("0"));
    }

    /// MD-007: rate × base smaller than the fixed deduction clamps to zero
    #[test]
    fn test_marginal_never_negative_within_bracket() {
        // Just above the exempt bound: 2259.21 * 0.075 = 169.44075, minus
        // 169.44 leaves a fraction of a cent, never a negative value.
        let discount = marginal_discount(dec("2259.21"), 0, &irrf_table());
        assert!(discount >= dec("0"));
    }

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("333.3333")), dec("333.33"));
        assert_eq!(round_currency(dec("-1.005")), dec("-1.01"));
    }

    proptest! {
        /// Progressive withholding is monotonically non-decreasing in the base.
        #[test]
        fn prop_progressive_monotonic(a in 0i64..1_000_000, b in 0i64..1_000_000) {
            let table = inss_table();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let d_lo = progressive_discount(Decimal::new(lo, 2), &table);
            let d_hi = progressive_discount(Decimal::new(hi, 2), &table);
            prop_assert!(d_lo <= d_hi);
        }

        /// Every base above the top bound pays exactly the ceiling.
        #[test]
        fn prop_progressive_ceiling_exact(cents in 778_603i64..100_000_000) {
            let table = inss_table();
            let discount = progressive_discount(Decimal::new(cents, 2), &table);
            prop_assert_eq!(discount, table.ceiling);
        }

        /// Marginal withholding is never negative and non-decreasing in the base.
        #[test]
        fn prop_marginal_monotonic_and_non_negative(
            a in 0i64..2_000_000,
            b in 0i64..2_000_000,
            dependents in 0u32..6,
        ) {
            let table = irrf_table();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let d_lo = marginal_discount(Decimal::new(lo, 2), dependents, &table);
            let d_hi = marginal_discount(Decimal::new(hi, 2), dependents, &table);
            prop_assert!(d_lo >= Decimal::ZERO);
            prop_assert!(d_lo <= d_hi);
        }

        /// More dependents never increase the withholding.
        #[test]
        fn prop_marginal_anti_monotonic_in_dependents(
            cents in 0i64..2_000_000,
            dependents in 0u32..6,
        ) {
            let table = irrf_table();
            let base = Decimal::new(cents, 2);
            let fewer = marginal_discount(base, dependents, &table);
            let more = marginal_discount(base, dependents + 1, &table);
            prop_assert!(more <= fewer);
        }
    }
}
