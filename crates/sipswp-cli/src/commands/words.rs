use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sipswp_core::words::amount_in_words;

/// Arguments for spelling an amount in words
#[derive(Args)]
pub struct WordsArgs {
    /// Amount in rupees
    #[arg(long)]
    pub amount: Decimal,
}

pub fn run_words(args: WordsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let words = amount_in_words(args.amount)?;
    Ok(serde_json::json!({
        "result": {
            "amount": args.amount.to_string(),
            "words": words,
        }
    }))
}
