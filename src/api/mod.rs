//! HTTP API module for the CLT calculation engine.
//!
//! This module provides the REST API endpoints for termination
//! settlements and the auxiliary payroll calculators.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    FgtsWithdrawalRequest, InvestmentRequest, OvertimeRequest, TerminationRequest,
    UnemploymentRequest, VacationRequest,
};
pub use response::ApiError;
pub use state::AppState;
