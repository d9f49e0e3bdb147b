use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::schedule::sip::{project_sip, SipInput};
use crate::schedule::swp::{project_swp, SwpInput};
use crate::schedule::ScheduleRow;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::words::amount_in_words;
use crate::PlannerResult;

/// The six scalars collected by a presentation shell.
///
/// Return rates arrive as percentages (12.0 = 12%) and are converted to
/// fractions here, at the shell boundary, before reaching the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub sip_monthly_investment: Money,
    pub sip_years: u32,
    pub sip_annual_return_pct: Decimal,
    pub swp_monthly_withdrawal: Money,
    pub swp_years: u32,
    pub swp_annual_return_pct: Decimal,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            sip_monthly_investment: dec!(30000),
            sip_years: 8,
            sip_annual_return_pct: dec!(12),
            swp_monthly_withdrawal: dec!(40000),
            swp_years: 25,
            swp_annual_return_pct: dec!(8),
        }
    }
}

/// One human-formatted metric/value pair on the Summary sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub label: String,
    pub value: String,
}

/// The full plan output before spreadsheet serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub sip_schedule: Vec<ScheduleRow>,
    pub swp_schedule: Vec<ScheduleRow>,
    pub summary: Vec<SummaryEntry>,
}

/// Run the full projection chain and assemble the report.
///
/// The SIP's final closing balance becomes the SWP's initial corpus; both
/// terminal balances are also rendered in words on the summary.
pub fn build_plan(request: &PlanRequest) -> PlannerResult<ComputationOutput<Report>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    let hundred = dec!(100);

    let sip = project_sip(&SipInput {
        monthly_investment: request.sip_monthly_investment,
        annual_rate: request.sip_annual_return_pct / hundred,
        years: request.sip_years,
    })?;
    warnings.extend(sip.warnings.iter().cloned());
    let sip_out = sip.result;

    let swp = project_swp(&SwpInput {
        initial_corpus: sip_out.final_balance,
        monthly_withdrawal: request.swp_monthly_withdrawal,
        annual_rate: request.swp_annual_return_pct / hundred,
        years: request.swp_years,
    })?;
    warnings.extend(swp.warnings.iter().cloned());
    let swp_out = swp.result;

    let corpus_words = amount_in_words(sip_out.final_balance)?;
    let remaining_words = amount_in_words(swp_out.remaining_balance)?;

    let summary = vec![
        entry(
            "SIP Monthly Investment",
            format_money(request.sip_monthly_investment),
        ),
        entry("SIP Duration", format!("{} years", request.sip_years)),
        entry(
            "SIP Annual Return",
            format_percent(request.sip_annual_return_pct),
        ),
        entry("Total SIP Invested", format_money(sip_out.total_invested)),
        entry("Final Corpus (SIP)", format_money(sip_out.final_balance)),
        entry("Corpus in Words", corpus_words),
        entry(
            "SWP Monthly Withdrawal",
            format_money(request.swp_monthly_withdrawal),
        ),
        entry("SWP Duration", format!("{} years", request.swp_years)),
        entry(
            "SWP Annual Return",
            format_percent(request.swp_annual_return_pct),
        ),
        entry(
            "Remaining Corpus after SWP",
            format_money(swp_out.remaining_balance),
        ),
        entry("Remaining Corpus in Words", remaining_words),
    ];

    let report = Report {
        sip_schedule: sip_out.schedule,
        swp_schedule: swp_out.schedule,
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SIP + SWP Plan Report",
        request,
        warnings,
        elapsed,
        report,
    ))
}

fn entry(label: &str, value: String) -> SummaryEntry {
    SummaryEntry {
        label: label.to_string(),
        value,
    }
}

/// Render with exactly two decimal places, no grouping ("12.00").
fn fixed2(v: Decimal) -> String {
    let mut s = v.round_dp(2).to_string();
    match s.find('.') {
        None => s.push_str(".00"),
        Some(idx) => {
            if s.len() - idx - 1 == 1 {
                s.push('0');
            }
        }
    }
    s
}

/// Rupee figure with western 3-digit thousands groups and two decimals.
fn format_money(v: Money) -> String {
    let v = v.round_dp(2);
    let negative = v.is_sign_negative() && !v.is_zero();
    let s = v.abs().to_string();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (s, String::new()),
    };
    let mut frac = frac_part;
    while frac.len() < 2 {
        frac.push('0');
    }

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    format!("₹{}{}.{}", if negative { "-" } else { "" }, grouped, frac)
}

fn format_percent(pct: Decimal) -> String {
    format!("{}%", fixed2(pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn one_year_request() -> PlanRequest {
        PlanRequest {
            sip_monthly_investment: dec!(30000),
            sip_years: 1,
            sip_annual_return_pct: dec!(12),
            swp_monthly_withdrawal: dec!(20000),
            swp_years: 5,
            swp_annual_return_pct: dec!(8),
        }
    }

    #[test]
    fn test_summary_order_and_values() {
        let plan = build_plan(&one_year_request()).unwrap();
        let report = &plan.result;

        let labels: Vec<&str> = report.summary.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "SIP Monthly Investment",
                "SIP Duration",
                "SIP Annual Return",
                "Total SIP Invested",
                "Final Corpus (SIP)",
                "Corpus in Words",
                "SWP Monthly Withdrawal",
                "SWP Duration",
                "SWP Annual Return",
                "Remaining Corpus after SWP",
                "Remaining Corpus in Words",
            ]
        );

        assert_eq!(report.summary[0].value, "₹30,000.00");
        assert_eq!(report.summary[1].value, "1 years");
        assert_eq!(report.summary[2].value, "12.00%");
        assert_eq!(report.summary[3].value, "₹360,000.00");
        assert_eq!(report.summary[4].value, "₹384,279.83");
        assert_eq!(
            report.summary[5].value,
            "three lakh eighty-four thousand two hundred seventy-nine rupees, eighty-three paise"
        );
        assert_eq!(report.summary[6].value, "₹20,000.00");
        assert_eq!(report.summary[8].value, "8.00%");
    }

    #[test]
    fn test_sip_final_seeds_swp_corpus() {
        let plan = build_plan(&one_year_request()).unwrap();
        let report = &plan.result;
        assert_eq!(report.sip_schedule.len(), 12);
        assert_eq!(
            report.swp_schedule[0].opening_balance,
            report.sip_schedule.last().unwrap().closing_balance
        );
    }

    #[test]
    fn test_depletion_warning_propagates() {
        // 384k at 8% cannot fund 20k/month for five years
        let plan = build_plan(&one_year_request()).unwrap();
        assert!(plan
            .warnings
            .iter()
            .any(|w| w.contains("Corpus depleted")));
    }

    #[test]
    fn test_idempotent_given_identical_inputs() {
        let request = one_year_request();
        let first = build_plan(&request).unwrap();
        let second = build_plan(&request).unwrap();
        assert_eq!(first.result, second.result);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(0)), "₹0.00");
        assert_eq!(format_money(dec!(0.5)), "₹0.50");
        assert_eq!(format_money(dec!(30000)), "₹30,000.00");
        assert_eq!(format_money(dec!(1234567.89)), "₹1,234,567.89");
        assert_eq!(format_money(dec!(-17950.6)), "₹-17,950.60");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(12)), "12.00%");
        assert_eq!(format_percent(dec!(8.5)), "8.50%");
    }
}
