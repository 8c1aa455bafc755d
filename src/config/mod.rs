//! Configuration loading and management for the Termination Calculation Engine.
//!
//! This module provides functionality to load the annually-versioned
//! statutory tax tables from YAML files, including the INSS and IRRF
//! withholding tables, the seguro-desemprego tiers, the minimum wage, and
//! the FGTS saque-aniversário schedule.
//!
//! # Example
//!
//! ```no_run
//! use clt_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded table set: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FgtsWithdrawalTable, InssTable, IrrfTable, MarginalBracket, ProgressiveBracket,
    TableSetMetadata, TaxTables, TierBracket, UnemploymentTable,
};
