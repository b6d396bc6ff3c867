//! Spreadsheet export built with rust_xlsxwriter.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::domain::staff::Staff;
use crate::export::{COLUMNS, record_cells};

const SHEET_NAME: &str = "Staff Data";

/// Renders the staff table as a single-sheet workbook: bold header row,
/// one row per record, columns fitted to content.
pub fn render(staff: &[Staff]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (idx, record) in staff.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, cell) in record_cells(record).into_iter().enumerate() {
            worksheet.write_string(row, col as u16, cell)?;
        }
    }

    worksheet.autofit();

    workbook.save_to_buffer()
}
