//! Currency-in-words rendering with Indian (lakh/crore) grouping.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::PlannerError;
use crate::types::Money;
use crate::PlannerResult;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Practical range cap so rupee counts stay well inside u64 and the crore
/// recursion stays readable.
const MAX_AMOUNT: Decimal = dec!(999_999_999_999.99);

/// Render a monetary amount as English words with lakh/crore grouping,
/// e.g. `12345678.05` becomes
/// "one crore twenty-three lakh forty-five thousand six hundred
/// seventy-eight rupees, five paise".
///
/// The amount is rounded to whole paise first; the paise clause is always
/// present ("zero paise" when there is none). Negative and out-of-range
/// amounts are rejected.
pub fn amount_in_words(amount: Money) -> PlannerResult<String> {
    if amount < Decimal::ZERO {
        return Err(PlannerError::InvalidInput {
            field: "amount".into(),
            reason: "Amount must be non-negative".into(),
        });
    }
    if amount > MAX_AMOUNT {
        return Err(PlannerError::InvalidInput {
            field: "amount".into(),
            reason: "Amount exceeds the supported range".into(),
        });
    }

    let rounded = amount.round_dp(2);
    let rupees = rounded.trunc().to_u64().ok_or_else(|| PlannerError::InvalidInput {
        field: "amount".into(),
        reason: "Amount exceeds the supported range".into(),
    })?;
    let paise = ((rounded - rounded.trunc()) * dec!(100))
        .to_u64()
        .unwrap_or(0);

    Ok(format!(
        "{} rupees, {} paise",
        integer_words(rupees),
        integer_words(paise)
    ))
}

/// Spell a non-negative integer using Indian grouping.
fn integer_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    let mut parts: Vec<String> = Vec::new();
    compose(n, &mut parts);
    parts.join(" ")
}

fn compose(n: u64, parts: &mut Vec<String>) {
    if n >= CRORE {
        // Amounts of a crore crore and beyond recurse ("one hundred crore").
        compose(n / CRORE, parts);
        parts.push("crore".to_string());
        if n % CRORE > 0 {
            compose(n % CRORE, parts);
        }
    } else if n >= LAKH {
        parts.push(two_digits(n / LAKH));
        parts.push("lakh".to_string());
        if n % LAKH > 0 {
            compose(n % LAKH, parts);
        }
    } else if n >= THOUSAND {
        parts.push(two_digits(n / THOUSAND));
        parts.push("thousand".to_string());
        if n % THOUSAND > 0 {
            compose(n % THOUSAND, parts);
        }
    } else if n >= 100 {
        parts.push(ONES[(n / 100) as usize].to_string());
        parts.push("hundred".to_string());
        if n % 100 > 0 {
            compose(n % 100, parts);
        }
    } else {
        parts.push(two_digits(n));
    }
}

fn two_digits(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{}-{}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}
