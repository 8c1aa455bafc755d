//! Termination reason and notice type enumerations.
//!
//! These closed enums drive all entitlement logic. Every consumer matches
//! exhaustively, so adding a variant forces every call site to be revisited
//! by the compiler.

use serde::{Deserialize, Serialize};

/// The legal reason a contract is being terminated.
///
/// # Example
///
/// ```
/// use clt_engine::models::TerminationReason;
///
/// let reason: TerminationReason =
///     serde_json::from_str("\"dismissal_without_cause\"").unwrap();
/// assert_eq!(reason, TerminationReason::DismissalWithoutCause);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Employer-initiated dismissal without just cause (CLT art. 477).
    DismissalWithoutCause,
    /// Dismissal for just cause (CLT art. 482); forfeits most entitlements.
    DismissalWithCause,
    /// Employee-initiated resignation.
    Resignation,
    /// Termination by mutual agreement (CLT art. 484-A); halves notice
    /// and the FGTS penalty.
    MutualAgreement,
    /// Natural end of a probationary contract (CLT art. 445).
    ProbationEnd,
    /// Early termination of a probationary contract by the employer
    /// (CLT art. 479).
    ProbationEarlyByEmployer,
    /// Early termination of a probationary contract by the employee
    /// (CLT art. 480).
    ProbationEarlyByEmployee,
    /// Termination by the employee's death.
    Death,
}

impl TerminationReason {
    /// Returns the notice types that are legally coherent for this reason.
    ///
    /// The engine never rejects other combinations — it records an audit
    /// warning and computes anyway — but callers building input forms can
    /// use this subset directly.
    pub fn allowed_notice_types(&self) -> &'static [NoticeType] {
        match self {
            TerminationReason::DismissalWithoutCause
            | TerminationReason::ProbationEarlyByEmployer => {
                &[NoticeType::Worked, NoticeType::Indemnified]
            }
            TerminationReason::Resignation | TerminationReason::ProbationEarlyByEmployee => {
                &[NoticeType::Worked, NoticeType::NotFulfilled]
            }
            TerminationReason::MutualAgreement => {
                &[NoticeType::Worked, NoticeType::Indemnified]
            }
            TerminationReason::DismissalWithCause
            | TerminationReason::ProbationEnd
            | TerminationReason::Death => &[NoticeType::NotApplicable],
        }
    }
}

/// How the statutory notice period (aviso prévio) is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeType {
    /// The notice period is worked through.
    Worked,
    /// The employer pays the notice period in lieu (indemnified).
    Indemnified,
    /// A resigning employee does not honor the notice; its value is
    /// deducted from the settlement.
    NotFulfilled,
    /// No notice applies to this termination reason.
    NotApplicable,
}
