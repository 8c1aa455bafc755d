//! Termination Calculation Engine for Brazilian CLT Employment
//!
//! This crate provides functionality for computing severance ("rescisão"),
//! payroll, and benefit amounts under the Brazilian labor-law statute (CLT),
//! driven by annually-versioned statutory tax tables.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
