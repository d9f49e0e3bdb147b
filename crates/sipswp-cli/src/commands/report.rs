use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::fs;

use sipswp_core::report::excel;
use sipswp_core::report::plan::{build_plan, PlanRequest};

use crate::input;

/// Arguments for full workbook generation
#[derive(Args)]
pub struct ReportArgs {
    /// Monthly SIP investment (₹)
    #[arg(long, default_value = "30000")]
    pub sip_amount: Decimal,

    /// SIP duration in years
    #[arg(long, default_value_t = 8)]
    pub sip_years: u32,

    /// SIP annual return (%)
    #[arg(long, default_value = "12")]
    pub sip_return: Decimal,

    /// Monthly SWP withdrawal (₹)
    #[arg(long, default_value = "40000")]
    pub swp_amount: Decimal,

    /// SWP duration in years
    #[arg(long, default_value_t = 25)]
    pub swp_years: u32,

    /// SWP annual return (%)
    #[arg(long, default_value = "8")]
    pub swp_return: Decimal,

    /// Path to a JSON request file (overrides the individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Where to write the workbook
    #[arg(long, default_value = "SIP_SWP_Report.xlsx")]
    pub out: String,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: PlanRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PlanRequest {
            sip_monthly_investment: args.sip_amount,
            sip_years: args.sip_years,
            sip_annual_return_pct: args.sip_return,
            swp_monthly_withdrawal: args.swp_amount,
            swp_years: args.swp_years,
            swp_annual_return_pct: args.swp_return,
        }
    };

    let plan = build_plan(&request)?;
    let workbook = excel::render_workbook(&plan.result)?;
    fs::write(&args.out, &workbook)
        .map_err(|e| format!("Failed to write '{}': {}", args.out, e))?;

    // Replace the bulky schedules with counts; the workbook has the rows.
    let report = &plan.result;
    let mut value = serde_json::to_value(&plan)?;
    value["result"] = serde_json::json!({
        "workbook": args.out,
        "sip_months": report.sip_schedule.len(),
        "swp_months": report.swp_schedule.len(),
        "summary": &report.summary,
    });
    Ok(value)
}
