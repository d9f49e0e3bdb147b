//! Workbook rendering: the two schedule sheets, the summary sheet, and the
//! SIP closing-balance line chart.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Chart, ChartType, Format, FormatBorder, Workbook, Worksheet};

use crate::report::plan::{Report, SummaryEntry};
use crate::schedule::ScheduleRow;
use crate::types::Money;
use crate::PlannerResult;

pub const SIP_SHEET: &str = "SIP Calculation";
pub const SWP_SHEET: &str = "SWP Plan";
pub const SUMMARY_SHEET: &str = "Summary";

const SIP_HEADERS: [&str; 5] = [
    "Month",
    "Opening Balance (₹)",
    "Monthly Investment (₹)",
    "Interest Earned (₹)",
    "Closing Balance (₹)",
];

const SWP_HEADERS: [&str; 5] = [
    "Month",
    "Opening Balance (₹)",
    "Interest Earned (₹)",
    "Monthly Withdrawal (₹)",
    "Closing Balance (₹)",
];

// The chart anchors this many rows below the last data row.
const CHART_GAP_ROWS: u32 = 3;

struct SheetFormats {
    header: Format,
    money: Format,
    month: Format,
}

fn sheet_formats() -> SheetFormats {
    SheetFormats {
        header: Format::new().set_bold().set_border(FormatBorder::Thin),
        money: Format::new().set_num_format("#,##0.00"),
        month: Format::new().set_num_format("0"),
    }
}

/// Assemble the three-sheet workbook for a report.
pub fn build_workbook(report: &Report) -> PlannerResult<Workbook> {
    let mut workbook = Workbook::new();
    let formats = sheet_formats();
    add_sip_sheet(&mut workbook, &report.sip_schedule, &formats)?;
    add_swp_sheet(&mut workbook, &report.swp_schedule, &formats)?;
    add_summary_sheet(&mut workbook, &report.summary, &formats)?;
    Ok(workbook)
}

/// Serialize a report to a complete, self-contained xlsx byte buffer.
///
/// Errors propagate before any bytes are produced, so a failed run never
/// exposes a partial artifact.
pub fn render_workbook(report: &Report) -> PlannerResult<Vec<u8>> {
    let mut workbook = build_workbook(report)?;
    Ok(workbook.save_to_buffer()?)
}

fn add_sip_sheet(
    workbook: &mut Workbook,
    schedule: &[ScheduleRow],
    formats: &SheetFormats,
) -> PlannerResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SIP_SHEET)?;
    write_headers(sheet, &SIP_HEADERS, formats)?;

    for (i, row) in schedule.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_with_format(r, 0, row.month, &formats.month)?;
        sheet.write_with_format(r, 1, money_cell(row.opening_balance), &formats.money)?;
        sheet.write_with_format(r, 2, money_cell(row.cash_flow), &formats.money)?;
        sheet.write_with_format(r, 3, money_cell(row.interest_earned), &formats.money)?;
        sheet.write_with_format(r, 4, money_cell(row.closing_balance), &formats.money)?;
    }

    if !schedule.is_empty() {
        let last_data_row = schedule.len() as u32;

        let mut chart = Chart::new(ChartType::Line);
        chart.title().set_name("SIP Closing Balance");
        chart.x_axis().set_name("Month");
        chart.y_axis().set_name("₹");
        chart
            .add_series()
            .set_name((SIP_SHEET, 0, 4))
            .set_values((SIP_SHEET, 1, 4, last_data_row, 4))
            .set_categories((SIP_SHEET, 1, 0, last_data_row, 0));

        sheet.insert_chart(last_data_row + CHART_GAP_ROWS, 0, &chart)?;
    }

    Ok(())
}

fn add_swp_sheet(
    workbook: &mut Workbook,
    schedule: &[ScheduleRow],
    formats: &SheetFormats,
) -> PlannerResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SWP_SHEET)?;
    write_headers(sheet, &SWP_HEADERS, formats)?;

    for (i, row) in schedule.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_with_format(r, 0, row.month, &formats.month)?;
        sheet.write_with_format(r, 1, money_cell(row.opening_balance), &formats.money)?;
        sheet.write_with_format(r, 2, money_cell(row.interest_earned), &formats.money)?;
        // The withdrawal column shows the magnitude of the negative flow.
        sheet.write_with_format(r, 3, money_cell(-row.cash_flow), &formats.money)?;
        sheet.write_with_format(r, 4, money_cell(row.closing_balance), &formats.money)?;
    }

    Ok(())
}

fn add_summary_sheet(
    workbook: &mut Workbook,
    summary: &[SummaryEntry],
    formats: &SheetFormats,
) -> PlannerResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)?;
    sheet.write_with_format(0, 0, "Metric", &formats.header)?;
    sheet.write_with_format(0, 1, "Value", &formats.header)?;

    for (i, entry) in summary.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, entry.label.as_str())?;
        sheet.write(r, 1, entry.value.as_str())?;
    }

    sheet.set_column_width(0, 28)?;
    sheet.set_column_width(1, 72)?;

    Ok(())
}

fn write_headers(
    sheet: &mut Worksheet,
    headers: &[&str; 5],
    formats: &SheetFormats,
) -> PlannerResult<()> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, &formats.header)?;
    }
    sheet.set_column_width(0, 8)?;
    for col in 1..5 {
        sheet.set_column_width(col, 20)?;
    }
    Ok(())
}

fn money_cell(v: Money) -> f64 {
    v.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::plan::{build_plan, PlanRequest};
    use rust_decimal_macros::dec;

    fn sample_report() -> Report {
        let request = PlanRequest {
            sip_monthly_investment: dec!(30000),
            sip_years: 1,
            sip_annual_return_pct: dec!(12),
            swp_monthly_withdrawal: dec!(20000),
            swp_years: 5,
            swp_annual_return_pct: dec!(8),
        };
        build_plan(&request).unwrap().result
    }

    #[test]
    fn test_sheet_names_and_order() {
        let mut workbook = build_workbook(&sample_report()).unwrap();
        assert_eq!(workbook.worksheet_from_index(0).unwrap().name(), SIP_SHEET);
        assert_eq!(workbook.worksheet_from_index(1).unwrap().name(), SWP_SHEET);
        assert_eq!(
            workbook.worksheet_from_index(2).unwrap().name(),
            SUMMARY_SHEET
        );
        assert!(workbook.worksheet_from_index(3).is_err());
    }

    #[test]
    fn test_buffer_is_zip_container() {
        let bytes = render_workbook(&sample_report()).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_schedules_render() {
        let report = Report {
            sip_schedule: Vec::new(),
            swp_schedule: Vec::new(),
            summary: Vec::new(),
        };
        assert!(render_workbook(&report).is_ok());
    }
}
