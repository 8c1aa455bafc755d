//! Overtime calculator with the weekly-rest-day (DSR) reflection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::tax::round_currency;

/// The statutory monthly divisor for an hourly rate (220 hours).
pub const MONTHLY_HOURS: Decimal = Decimal::from_parts(220, 0, 0, false, 0);

const SIX: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Result of the overtime calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// The base hourly rate (salary / 220).
    pub hourly_rate: Decimal,
    /// Value of the overtime hours with the surcharge applied.
    pub overtime_value: Decimal,
    /// The weekly-rest-day reflection (overtime / 6), zero when not
    /// requested.
    pub dsr_value: Decimal,
    /// Overtime plus the DSR reflection.
    pub total: Decimal,
}

/// Calculates overtime pay at a percentage surcharge over the hourly rate.
///
/// The hourly rate divides the monthly salary by the statutory 220
/// hours. Overtime worked on a salaried schedule also reflects into the
/// paid weekly rest day at one sixth of the overtime value.
///
/// # Arguments
///
/// * `monthly_salary` - The monthly gross salary
/// * `hours` - Overtime hours worked in the period
/// * `surcharge_percent` - The surcharge over the base rate (50 for the
///   statutory minimum, 100 for Sundays and holidays)
/// * `include_dsr` - Whether to add the weekly-rest-day reflection
///
/// # Legal Reference
///
/// CF/1988 art. 7 XVI (50% minimum surcharge); Lei 605/1949 and
/// Súmula 172 TST (DSR reflection).
pub fn calculate_overtime(
    monthly_salary: Decimal,
    hours: Decimal,
    surcharge_percent: Decimal,
    include_dsr: bool,
) -> OvertimeResult {
    let hourly_rate = round_currency(monthly_salary / MONTHLY_HOURS);
    let multiplier = Decimal::ONE + surcharge_percent / ONE_HUNDRED;
    let overtime_value = round_currency(hourly_rate * multiplier * hours);

    let dsr_value = if include_dsr {
        round_currency(overtime_value / SIX)
    } else {
        Decimal::ZERO
    };

    OvertimeResult {
        hourly_rate,
        overtime_value,
        dsr_value,
        total: overtime_value + dsr_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// OT-001: the statutory 50% surcharge
    #[test]
    fn test_fifty_percent_surcharge() {
        let result = calculate_overtime(dec("2200.00"), dec("10"), dec("50"), false);
        assert_eq!(result.hourly_rate, dec("10.00"));
        assert_eq!(result.overtime_value, dec("150.00"));
        assert_eq!(result.dsr_value, dec("0"));
        assert_eq!(result.total, dec("150.00"));
    }

    /// OT-002: 100% surcharge doubles the rate
    #[test]
    fn test_hundred_percent_surcharge() {
        let result = calculate_overtime(dec("2200.00"), dec("10"), dec("100"), false);
        assert_eq!(result.overtime_value, dec("200.00"));
    }

    /// OT-003: the DSR reflection is one sixth of the overtime value
    #[test]
    fn test_dsr_reflection() {
        let result = calculate_overtime(dec("2200.00"), dec("12"), dec("50"), true);
        assert_eq!(result.overtime_value, dec("180.00"));
        assert_eq!(result.dsr_value, dec("30.00"));
        assert_eq!(result.total, dec("210.00"));
    }

    /// OT-004: fractional hours and rates round at each stage
    #[test]
    fn test_rounding() {
        // 3000 / 220 = 13.636... -> 13.64; 13.64 * 1.5 * 7.5 = 153.45
        let result = calculate_overtime(dec("3000.00"), dec("7.5"), dec("50"), false);
        assert_eq!(result.hourly_rate, dec("13.64"));
        assert_eq!(result.overtime_value, dec("153.45"));
    }

    /// OT-005: zero hours pay nothing
    #[test]
    fn test_zero_hours() {
        let result = calculate_overtime(dec("3000.00"), dec("0"), dec("50"), true);
        assert_eq!(result.total, dec("0"));
    }
}
