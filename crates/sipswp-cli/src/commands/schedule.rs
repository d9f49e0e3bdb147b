use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use sipswp_core::schedule::sip::{project_sip, SipInput};
use sipswp_core::schedule::swp::{project_swp, SwpInput};

/// Arguments for a SIP accumulation schedule
#[derive(Args)]
pub struct SipArgs {
    /// Monthly investment amount (₹)
    #[arg(long, default_value = "30000")]
    pub amount: Decimal,

    /// Duration in years
    #[arg(long, default_value_t = 8)]
    pub years: u32,

    /// Annual return (%)
    #[arg(long = "return", default_value = "12")]
    pub annual_return: Decimal,
}

/// Arguments for an SWP drawdown schedule
#[derive(Args)]
pub struct SwpArgs {
    /// Initial corpus (₹)
    #[arg(long)]
    pub corpus: Decimal,

    /// Monthly withdrawal amount (₹)
    #[arg(long, default_value = "40000")]
    pub amount: Decimal,

    /// Duration in years
    #[arg(long, default_value_t = 25)]
    pub years: u32,

    /// Annual return (%)
    #[arg(long = "return", default_value = "8")]
    pub annual_return: Decimal,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = project_sip(&SipInput {
        monthly_investment: args.amount,
        annual_rate: args.annual_return / dec!(100),
        years: args.years,
    })?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_swp(args: SwpArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = project_swp(&SwpInput {
        initial_corpus: args.corpus,
        monthly_withdrawal: args.amount,
        annual_rate: args.annual_return / dec!(100),
        years: args.years,
    })?;
    Ok(serde_json::to_value(result)?)
}
