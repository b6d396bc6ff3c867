//! Full-table document renderers. Both take the store's `find_all` output
//! (id order) and return the finished document as bytes.

pub mod excel;
pub mod pdf;

use crate::domain::staff::Staff;

/// Column headers shared by both document formats.
pub const COLUMNS: [&str; 4] = ["Id", "Fullname", "BirthDate", "Gender"];

fn record_cells(record: &Staff) -> [String; 4] {
    [
        record.id.clone(),
        record.fullname.clone(),
        record.birth_date.format("%Y-%m-%d").to_string(),
        record.gender.clone(),
    ]
}
