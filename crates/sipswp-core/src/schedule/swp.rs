use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::PlannerResult;

use super::{validate_term, ScheduleRow, MONTHS_PER_YEAR};

/// Input for an SWP drawdown projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpInput {
    pub initial_corpus: Money,
    pub monthly_withdrawal: Money,
    /// Annual return as a fraction (0.08 = 8%)
    pub annual_rate: Rate,
    pub years: u32,
}

/// Output of `project_swp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpOutput {
    pub schedule: Vec<ScheduleRow>,
    /// Balance as reported at loop exit: the final closing balance on a
    /// full-term run, or the last positive opening balance when the corpus
    /// depletes (see `project_swp`).
    pub remaining_balance: Money,
    pub depleted: bool,
}

/// Build the month-by-month SWP drawdown schedule.
///
/// Interest accrues on the opening balance only; the withdrawal is then
/// taken. The schedule truncates at the first month whose closing balance
/// is zero or negative: that depleting row is kept, but the opening balance
/// is not advanced past it, so the reported remaining balance is the last
/// positive opening balance rather than the negative closing value.
pub fn project_swp(input: &SwpInput) -> PlannerResult<ComputationOutput<SwpOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_term("years", input.years)?;

    let monthly_rate = input.annual_rate / Decimal::from(MONTHS_PER_YEAR);
    let months = input.years * MONTHS_PER_YEAR;
    // Stored fields are 2dp, so sub-cent corpus and withdrawal round on entry.
    let withdrawal = input.monthly_withdrawal.round_dp(2);

    let mut schedule = Vec::with_capacity(months as usize);
    let mut opening = input.initial_corpus.round_dp(2);
    let mut depleted = false;

    for month in 1..=months {
        let interest = (opening * monthly_rate).round_dp(2);
        let closing = (opening + interest - withdrawal).round_dp(2);

        schedule.push(ScheduleRow {
            month,
            opening_balance: opening,
            cash_flow: -withdrawal,
            interest_earned: interest,
            closing_balance: closing,
        });

        if closing <= Decimal::ZERO {
            // Keep the depleting row but do not advance the opening balance.
            depleted = true;
            warnings.push(format!("Corpus depleted in month {month}; schedule truncated"));
            break;
        }

        opening = closing;
    }

    let output = SwpOutput {
        schedule,
        remaining_balance: opening,
        depleted,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SWP Drawdown Schedule",
        &serde_json::json!({
            "initial_corpus": input.initial_corpus.to_string(),
            "monthly_withdrawal": input.monthly_withdrawal.to_string(),
            "annual_rate": input.annual_rate.to_string(),
            "years": input.years,
        }),
        warnings,
        elapsed,
        output,
    ))
}
