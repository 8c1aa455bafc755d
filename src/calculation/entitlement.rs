//! Entitlement resolution per termination reason.
//!
//! Maps each [`TerminationReason`] to the set of boolean entitlement
//! flags that downstream rules consume. The match is exhaustive on
//! purpose: a new reason variant cannot compile without a row here.

use serde::Serialize;

use crate::models::TerminationReason;

/// Entitlement flags resolved from a termination reason.
///
/// Each flag gates one downstream rule; the resolver is the single
/// place in the engine where the termination reason is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntitlementFlags {
    /// The employer owes the notice value in lieu of the worked period.
    pub indemnified_notice: bool,
    /// The notice value is deducted from an employee who did not honor it.
    pub notice_deduction: bool,
    /// The full 40% FGTS penalty applies (mutual agreement halves it
    /// to 20% via [`EntitlementFlags::mutual_agreement`]).
    pub full_fgts_penalty: bool,
    /// Mutual-agreement termination: notice value and FGTS penalty halve.
    pub mutual_agreement: bool,
    /// Dismissal for just cause: proportional vacation, 13th salary, and
    /// the FGTS penalty are all forfeited.
    pub for_cause: bool,
    /// A probationary contract reaching its natural end: no notice in
    /// either direction.
    pub probation_end: bool,
}

/// Resolves the entitlement flags for a termination reason.
///
/// # Legal Reference
///
/// CLT arts. 477-484-A and Lei 8.036/1990 art. 18 (FGTS penalty).
pub fn resolve_entitlements(reason: TerminationReason) -> EntitlementFlags {
    match reason {
        TerminationReason::DismissalWithoutCause
        | TerminationReason::ProbationEarlyByEmployer => EntitlementFlags {
            indemnified_notice: true,
            notice_deduction: false,
            full_fgts_penalty: true,
            mutual_agreement: false,
            for_cause: false,
            probation_end: false,
        },
        TerminationReason::Resignation | TerminationReason::ProbationEarlyByEmployee => {
            EntitlementFlags {
                indemnified_notice: false,
                notice_deduction: true,
                full_fgts_penalty: false,
                mutual_agreement: false,
                for_cause: false,
                probation_end: false,
            }
        }
        TerminationReason::MutualAgreement => EntitlementFlags {
            indemnified_notice: true,
            notice_deduction: false,
            full_fgts_penalty: false,
            mutual_agreement: true,
            for_cause: false,
            probation_end: false,
        },
        TerminationReason::DismissalWithCause => EntitlementFlags {
            indemnified_notice: false,
            notice_deduction: false,
            full_fgts_penalty: false,
            mutual_agreement: false,
            for_cause: true,
            probation_end: false,
        },
        TerminationReason::ProbationEnd => EntitlementFlags {
            indemnified_notice: false,
            notice_deduction: false,
            full_fgts_penalty: false,
            mutual_agreement: false,
            for_cause: false,
            probation_end: true,
        },
        TerminationReason::Death => EntitlementFlags {
            indemnified_notice: false,
            notice_deduction: false,
            full_fgts_penalty: false,
            mutual_agreement: false,
            for_cause: false,
            probation_end: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// EN-001: dismissal without cause gets notice and the full penalty
    #[test]
    fn test_dismissal_without_cause() {
        let flags = resolve_entitlements(TerminationReason::DismissalWithoutCause);
        assert!(flags.indemnified_notice);
        assert!(flags.full_fgts_penalty);
        assert!(!flags.notice_deduction);
        assert!(!flags.for_cause);
    }

    /// EN-002: resignation owes the notice instead of receiving it
    #[test]
    fn test_resignation() {
        let flags = resolve_entitlements(TerminationReason::Resignation);
        assert!(flags.notice_deduction);
        assert!(!flags.indemnified_notice);
        assert!(!flags.full_fgts_penalty);
    }

    /// EN-003: mutual agreement halves notice and penalty
    #[test]
    fn test_mutual_agreement() {
        let flags = resolve_entitlements(TerminationReason::MutualAgreement);
        assert!(flags.mutual_agreement);
        assert!(flags.indemnified_notice);
        assert!(!flags.full_fgts_penalty);
    }

    /// EN-004: just cause forfeits everything discretionary
    #[test]
    fn test_dismissal_with_cause() {
        let flags = resolve_entitlements(TerminationReason::DismissalWithCause);
        assert!(flags.for_cause);
        assert!(!flags.indemnified_notice);
        assert!(!flags.notice_deduction);
        assert!(!flags.full_fgts_penalty);
    }

    /// EN-005: early probation break by the employer mirrors dismissal
    /// without cause
    #[test]
    fn test_probation_early_by_employer() {
        assert_eq!(
            resolve_entitlements(TerminationReason::ProbationEarlyByEmployer),
            resolve_entitlements(TerminationReason::DismissalWithoutCause)
        );
    }

    /// EN-006: early probation break by the employee mirrors resignation
    #[test]
    fn test_probation_early_by_employee() {
        assert_eq!(
            resolve_entitlements(TerminationReason::ProbationEarlyByEmployee),
            resolve_entitlements(TerminationReason::Resignation)
        );
    }

    /// EN-007: natural probation end has no notice either way
    #[test]
    fn test_probation_end() {
        let flags = resolve_entitlements(TerminationReason::ProbationEnd);
        assert!(flags.probation_end);
        assert!(!flags.indemnified_notice);
        assert!(!flags.notice_deduction);
        assert!(!flags.full_fgts_penalty);
    }

    /// EN-008: death keeps proportional entitlements, no notice, no penalty
    #[test]
    fn test_death() {
        let flags = resolve_entitlements(TerminationReason::Death);
        assert!(!flags.indemnified_notice);
        assert!(!flags.notice_deduction);
        assert!(!flags.full_fgts_penalty);
        assert!(!flags.for_cause);
    }
}
