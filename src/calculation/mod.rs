//! Calculation rules for the CLT termination and payroll engine.
//!
//! Each rule lives in its own module and returns a small result struct
//! carrying its computed values and, for the termination pipeline, an
//! [`crate::models::AuditStep`] documenting the decision. The
//! [`termination`] module chains the rules into the fixed settlement
//! pipeline; the remaining calculators stand alone.

pub mod entitlement;
pub mod fgts_penalty;
pub mod fund_withdrawal;
pub mod investment;
pub mod notice;
pub mod overtime;
pub mod salary_balance;
pub mod tax;
pub mod tenure;
pub mod termination;
pub mod thirteenth;
pub mod unemployment;
pub mod vacation;

pub use entitlement::{resolve_entitlements, EntitlementFlags};
pub use fgts_penalty::{calculate_fgts_penalty, FgtsPenaltyResult};
pub use fund_withdrawal::{calculate_fund_withdrawal, FundWithdrawalResult};
pub use investment::{project_investment, InvestmentProjection};
pub use notice::{calculate_notice, NoticeResult};
pub use overtime::{calculate_overtime, OvertimeResult, MONTHLY_HOURS};
pub use salary_balance::{calculate_salary_balance, SalaryBalanceResult, MONTH_DAYS};
pub use tax::{marginal_discount, progressive_discount, round_currency};
pub use termination::calculate_termination;
pub use thirteenth::{calculate_thirteenth, ThirteenthResult};
pub use unemployment::{calculate_unemployment_benefit, UnemploymentResult};
pub use vacation::{
    calculate_standalone_vacation, calculate_vacation, VacationPayResult, VacationResult,
};
