//! Core data models for the Termination Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod inputs;
mod termination;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, Discounts, Earnings, TerminationMeta, TerminationResult,
    Totals,
};
pub use inputs::TerminationInput;
pub use termination::{NoticeType, TerminationReason};
