use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::PlannerResult;

use super::{validate_term, ScheduleRow, MONTHS_PER_YEAR};

/// Input for a SIP accumulation projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_investment: Money,
    /// Annual return as a fraction (0.12 = 12%)
    pub annual_rate: Rate,
    pub years: u32,
}

/// Output of `project_sip`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipOutput {
    pub schedule: Vec<ScheduleRow>,
    pub total_invested: Money,
    pub final_balance: Money,
}

/// Build the month-by-month SIP accumulation schedule.
///
/// Interest accrues on the opening balance plus the current month's
/// contribution (front-loaded convention). Every stored monetary field is
/// rounded to two decimal places at the point of computation, and the
/// rounded closing balance is what carries into the next month.
pub fn project_sip(input: &SipInput) -> PlannerResult<ComputationOutput<SipOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_term("years", input.years)?;

    let monthly_rate = input.annual_rate / Decimal::from(MONTHS_PER_YEAR);
    let months = input.years * MONTHS_PER_YEAR;
    // Stored fields are 2dp, so a sub-cent contribution rounds on entry.
    let investment = input.monthly_investment.round_dp(2);

    let mut schedule = Vec::with_capacity(months as usize);
    let mut opening = Decimal::ZERO;

    for month in 1..=months {
        let interest = ((opening + investment) * monthly_rate).round_dp(2);
        let closing = (opening + investment + interest).round_dp(2);

        schedule.push(ScheduleRow {
            month,
            opening_balance: opening,
            cash_flow: investment,
            interest_earned: interest,
            closing_balance: closing,
        });

        opening = closing;
    }

    let output = SipOutput {
        schedule,
        total_invested: investment * Decimal::from(months),
        final_balance: opening,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SIP Accumulation Schedule",
        &serde_json::json!({
            "monthly_investment": input.monthly_investment.to_string(),
            "annual_rate": input.annual_rate.to_string(),
            "years": input.years,
        }),
        warnings,
        elapsed,
        output,
    ))
}
