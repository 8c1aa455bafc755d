//! Unemployment benefit (seguro-desemprego) calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::tax::round_currency;
use crate::config::TaxTables;

const THREE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Result of the unemployment benefit calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnemploymentResult {
    /// Average of the last three gross salaries.
    pub average_salary: Decimal,
    /// Monthly benefit, clamped between the minimum wage and the
    /// statutory ceiling.
    pub monthly_benefit: Decimal,
    /// Number of benefit installments; zero when the tenure does not
    /// qualify for the given request ordinal.
    pub installments: u32,
}

/// Calculates the monthly unemployment benefit and installment count.
///
/// The benefit applies a tiered multiplier to the average of the last
/// three salaries: a single tier supplies `rate × average + addend`,
/// with the result clamped to the minimum wage below and the statutory
/// ceiling above. The installment count is a step function of months
/// worked, with a different threshold ladder for the first, second, and
/// third-or-later request.
///
/// # Legal Reference
///
/// Lei 7.998/1990 arts. 4-5 and CODEFAT Resolução 957/2022.
pub fn calculate_unemployment_benefit(
    last_salaries: [Decimal; 3],
    months_worked: u32,
    request_number: u32,
    tables: &TaxTables,
) -> UnemploymentResult {
    let average_salary =
        round_currency((last_salaries[0] + last_salaries[1] + last_salaries[2]) / THREE);

    let tier = tables
        .unemployment
        .tiers
        .iter()
        .find(|t| match t.upper_bound {
            Some(bound) => average_salary <= bound,
            None => true,
        });

    let raw_benefit = match tier {
        Some(tier) => average_salary * tier.rate + tier.addend,
        None => Decimal::ZERO,
    };

    let monthly_benefit = round_currency(
        raw_benefit
            .max(tables.minimum_wage)
            .min(tables.unemployment.ceiling),
    );

    UnemploymentResult {
        average_salary,
        monthly_benefit,
        installments: installment_count(months_worked, request_number),
    }
}

/// The installment-count step function.
///
/// Thresholds loosen with each successive request: a first request
/// needs at least 12 months worked, later requests qualify from 9
/// (second) or 6 (third onward).
fn installment_count(months_worked: u32, request_number: u32) -> u32 {
    match request_number {
        0 | 1 => match months_worked {
            0..=11 => 0,
            12..=23 => 4,
            _ => 5,
        },
        2 => match months_worked {
            0..=8 => 0,
            9..=11 => 3,
            12..=23 => 4,
            _ => 5,
        },
        _ => match months_worked {
            0..=5 => 0,
            6..=11 => 3,
            12..=23 => 4,
            _ => 5,
        },
    }
}
