use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use sipswp_core::report::excel;
use sipswp_core::report::plan::{build_plan, PlanRequest};
use sipswp_core::schedule::swp::{project_swp, SwpInput};
use sipswp_core::words::amount_in_words;

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
fn test_workbook_has_three_named_sheets_in_order() {
    let plan = build_plan(&one_year_request()).unwrap();
    let mut workbook = excel::build_workbook(&plan.result).unwrap();

    assert_eq!(
        workbook.worksheet_from_index(0).unwrap().name(),
        "SIP Calculation"
    );
    assert_eq!(workbook.worksheet_from_index(1).unwrap().name(), "SWP Plan");
    assert_eq!(workbook.worksheet_from_index(2).unwrap().name(), "Summary");
    assert!(workbook.worksheet_from_index(3).is_err());
}

#[test]
fn test_first_sip_data_row_matches_known_projection() {
    let plan = build_plan(&one_year_request()).unwrap();
    let first = &plan.result.sip_schedule[0];

    assert_eq!(first.month, 1);
    assert_eq!(first.opening_balance, dec!(0));
    assert_eq!(first.cash_flow, dec!(30000));
    assert_eq!(first.interest_earned, dec!(300.00));
    assert_eq!(first.closing_balance, dec!(30300.00));

    let bytes = excel::render_workbook(&plan.result).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_summary_remaining_corpus_matches_engine() {
    let request = one_year_request();
    let plan = build_plan(&request).unwrap();
    let report = &plan.result;

    let sip_final = report.sip_schedule.last().unwrap().closing_balance;
    let swp = project_swp(&SwpInput {
        initial_corpus: sip_final,
        monthly_withdrawal: request.swp_monthly_withdrawal,
        annual_rate: request.swp_annual_return_pct / dec!(100),
        years: request.swp_years,
    })
    .unwrap();

    assert_eq!(report.swp_schedule, swp.result.schedule);
    assert_eq!(
        report.summary[10].value,
        amount_in_words(swp.result.remaining_balance).unwrap()
    );
}

#[test]
fn test_plan_request_deserializes_from_shell_json() {
    let json = r#"{
        "sip_monthly_investment": "30000",
        "sip_years": 1,
        "sip_annual_return_pct": "12",
        "swp_monthly_withdrawal": "20000",
        "swp_years": 5,
        "swp_annual_return_pct": "8"
    }"#;
    let request: PlanRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.sip_monthly_investment, dec!(30000));
    assert_eq!(request.swp_years, 5);

    let round_trip: PlanRequest =
        serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
    assert_eq!(round_trip.sip_annual_return_pct, dec!(12));
}
