//! Configuration types for statutory tax tables.
//!
//! This module contains the strongly-typed table structures that are
//! deserialized from YAML configuration files. The tables are revised once
//! per calendar year; the engine reads every rate and threshold from them
//! and hard-codes nothing.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the statutory table set.
#[derive(Debug, Clone, Deserialize)]
pub struct TableSetMetadata {
    /// The human-readable name of the table set.
    pub name: String,
    /// The revision of this configuration (e.g., "2025-01").
    pub version: String,
    /// URL to the official source of the statutory values.
    pub source_url: String,
}

/// A bracket of a progressive (INSS-style) table.
///
/// Progressive computation sums `rate × slice-within-bracket` across all
/// brackets up to the base. All bounds are finite; bases above the last
/// bound pay the table's fixed ceiling contribution.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressiveBracket {
    /// The inclusive upper bound of this bracket.
    pub upper_bound: Decimal,
    /// The contribution rate applied to the slice within this bracket.
    pub rate: Decimal,
}

/// A bracket of a marginal (IRRF-style) table.
///
/// Marginal computation applies a single bracket's rate to the whole
/// taxable base minus a fixed deduction.
#[derive(Debug, Clone, Deserialize)]
pub struct MarginalBracket {
    /// The inclusive upper bound of this bracket; `None` means unbounded
    /// and is only valid on the final bracket.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// The withholding rate applied to the whole taxable base.
    pub rate: Decimal,
    /// The fixed deduction subtracted after applying the rate.
    pub deduction: Decimal,
}

/// A tier of a single-lookup table (`rate × base + addend`).
///
/// Used by the unemployment-benefit formula and the FGTS anniversary
/// withdrawal schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct TierBracket {
    /// The inclusive upper bound of this tier; `None` means unbounded
    /// and is only valid on the final tier.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// The multiplier applied to the base amount.
    pub rate: Decimal,
    /// The fixed amount added after applying the rate.
    pub addend: Decimal,
}

/// Progressive social-security (INSS) withholding table.
#[derive(Debug, Clone, Deserialize)]
pub struct InssTable {
    /// The fixed contribution for bases above the last bracket bound.
    pub ceiling: Decimal,
    /// The progressive brackets, ordered by ascending bound.
    pub brackets: Vec<ProgressiveBracket>,
}

/// Marginal income-tax (IRRF) withholding table.
#[derive(Debug, Clone, Deserialize)]
pub struct IrrfTable {
    /// The deduction from the taxable base per declared dependent.
    pub dependent_deduction: Decimal,
    /// The marginal brackets, ordered by ascending bound.
    pub brackets: Vec<MarginalBracket>,
}

/// Unemployment-benefit (seguro-desemprego) tier table.
#[derive(Debug, Clone, Deserialize)]
pub struct UnemploymentTable {
    /// The maximum monthly benefit amount.
    pub ceiling: Decimal,
    /// The benefit tiers over the average salary, ordered by ascending bound.
    pub tiers: Vec<TierBracket>,
}

/// FGTS anniversary-withdrawal (saque-aniversário) tier table.
#[derive(Debug, Clone, Deserialize)]
pub struct FgtsWithdrawalTable {
    /// The withdrawal tiers over the fund balance, ordered by ascending bound.
    pub tiers: Vec<TierBracket>,
}

/// The complete statutory table set for one calendar year.
///
/// Deserialized from a single `tables/<year>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTables {
    /// The calendar year these tables take effect.
    pub effective_year: i32,
    /// The national minimum monthly wage.
    pub minimum_wage: Decimal,
    /// Social-security withholding table.
    pub inss: InssTable,
    /// Income-tax withholding table.
    pub irrf: IrrfTable,
    /// Unemployment-benefit table.
    pub unemployment: UnemploymentTable,
    /// FGTS anniversary-withdrawal table.
    pub fgts_withdrawal: FgtsWithdrawalTable,
}

impl TaxTables {
    /// Validates the structural invariants of every table.
    ///
    /// Bracket and tier bounds must be strictly ascending, an unbounded
    /// entry may only appear last, and the final IRRF bracket and
    /// unemployment/FGTS tiers must be unbounded so every base matches.
    pub fn validate(&self) -> EngineResult<()> {
        if self.inss.brackets.is_empty() {
            return Err(EngineError::InvalidTable {
                table: "inss".to_string(),
                message: "table must contain at least one bracket".to_string(),
            });
        }
        validate_ascending(
            "inss",
            self.inss.brackets.iter().map(|b| Some(b.upper_bound)),
            false,
        )?;
        validate_ascending(
            "irrf",
            self.irrf.brackets.iter().map(|b| b.upper_bound),
            true,
        )?;
        validate_ascending(
            "unemployment",
            self.unemployment.tiers.iter().map(|t| t.upper_bound),
            true,
        )?;
        validate_ascending(
            "fgts_withdrawal",
            self.fgts_withdrawal.tiers.iter().map(|t| t.upper_bound),
            true,
        )?;
        Ok(())
    }
}

/// Checks that bounds are strictly ascending and that `None` (unbounded)
/// appears only in the final position. When `require_open_end` is set, the
/// final entry must be unbounded.
fn validate_ascending<I>(table: &str, bounds: I, require_open_end: bool) -> EngineResult<()>
where
    I: Iterator<Item = Option<Decimal>>,
{
    let bounds: Vec<Option<Decimal>> = bounds.collect();

    if bounds.is_empty() {
        return Err(EngineError::InvalidTable {
            table: table.to_string(),
            message: "table must contain at least one bracket".to_string(),
        });
    }

    let mut previous: Option<Decimal> = None;
    for (index, bound) in bounds.iter().enumerate() {
        match bound {
            Some(value) => {
                if let Some(prev) = previous {
                    if *value <= prev {
                        return Err(EngineError::InvalidTable {
                            table: table.to_string(),
                            message: "bracket bounds must be strictly ascending".to_string(),
                        });
                    }
                }
                previous = Some(*value);
            }
            None => {
                if index != bounds.len() - 1 {
                    return Err(EngineError::InvalidTable {
                        table: table.to_string(),
                        message: "unbounded bracket is only valid in the final position"
                            .to_string(),
                    });
                }
            }
        }
    }

    if require_open_end && bounds.last().is_some_and(|b| b.is_some()) {
        return Err(EngineError::InvalidTable {
            table: table.to_string(),
            message: "final bracket must be unbounded".to_string(),
        });
    }

    Ok(())
}
