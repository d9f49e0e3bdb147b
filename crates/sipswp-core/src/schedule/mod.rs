//! Month-by-month balance schedules for SIP accumulation and SWP drawdown.

pub mod sip;
pub mod swp;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::types::Money;
use crate::PlannerResult;

pub const MONTHS_PER_YEAR: u32 = 12;

/// A single elapsed month in a projection schedule.
///
/// `cash_flow` is signed: a positive contribution for SIP rows, a negative
/// withdrawal for SWP rows, so that for every row
/// `closing_balance == opening_balance + interest_earned + cash_flow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub opening_balance: Money,
    pub cash_flow: Money,
    pub interest_earned: Money,
    pub closing_balance: Money,
}

/// Reject a zero-length projection term.
///
/// Zero or negative monetary and rate inputs are deliberately NOT rejected;
/// they produce a degenerate but well-defined schedule.
pub(crate) fn validate_term(field: &str, years: u32) -> PlannerResult<()> {
    if years == 0 {
        return Err(PlannerError::InvalidInput {
            field: field.into(),
            reason: "Term must be at least 1 year".into(),
        });
    }
    Ok(())
}
