use crate::domain::staff::Staff;

/// Applies the list-screen search filter over the full record set.
///
/// An absent `search` value always means "no filter", whatever dimension was
/// picked, and an unrecognized dimension never filters. `Id` and `Gender`
/// match exactly; `Fullname` is a case-sensitive prefix match.
pub fn filter(records: Vec<Staff>, search_by: Option<&str>, search: Option<&str>) -> Vec<Staff> {
    let Some(search) = search else {
        return records;
    };

    match search_by {
        Some("Id") => records.into_iter().filter(|s| s.id == search).collect(),
        Some("Fullname") => records
            .into_iter()
            .filter(|s| s.fullname.starts_with(search))
            .collect(),
        Some("Gender") => records
            .into_iter()
            .filter(|s| s.gender == search)
            .collect(),
        _ => records,
    }
}
