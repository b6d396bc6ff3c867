use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ServiceError;

/// One persisted staff row. The id is caller-assigned and immutable once the
/// record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Staff {
    pub id: String,
    pub fullname: String,
    pub birth_date: NaiveDate,
    pub gender: String,
}

/// Raw form submission for create and edit. Every field arrives as a string
/// and goes through [`StaffForm::validate`] before anything touches the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StaffForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub gender: String,
}

/// All reasons a submission was rejected, plus the submitted values so the
/// client can re-present the form as it was filled in.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationFailure {
    pub errors: Vec<String>,
    pub submitted: StaffForm,
}

const MAX_ID_LEN: usize = 8;
const MAX_FULLNAME_LEN: usize = 100;
const MAX_GENDER_LEN: usize = 10;
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

impl StaffForm {
    /// Checks required fields, length limits and the date format, collecting
    /// every problem rather than stopping at the first.
    pub fn validate(&self) -> Result<Staff, ValidationFailure> {
        let mut errors = Vec::new();

        if self.id.is_empty() {
            errors.push("Id is required".to_string());
        } else if self.id.chars().count() > MAX_ID_LEN {
            errors.push(format!("Id must be at most {MAX_ID_LEN} characters"));
        }

        if self.fullname.is_empty() {
            errors.push("Fullname is required".to_string());
        } else if self.fullname.chars().count() > MAX_FULLNAME_LEN {
            errors.push(format!(
                "Fullname must be at most {MAX_FULLNAME_LEN} characters"
            ));
        }

        let birth_date = if self.birth_date.is_empty() {
            errors.push("BirthDate is required".to_string());
            None
        } else {
            match NaiveDate::parse_from_str(&self.birth_date, BIRTH_DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("BirthDate must be a yyyy-MM-dd date".to_string());
                    None
                }
            }
        };

        if self.gender.is_empty() {
            errors.push("Gender is required".to_string());
        } else if self.gender.chars().count() > MAX_GENDER_LEN {
            errors.push(format!("Gender must be at most {MAX_GENDER_LEN} characters"));
        }

        match (errors.is_empty(), birth_date) {
            (true, Some(birth_date)) => Ok(Staff {
                id: self.id.clone(),
                fullname: self.fullname.clone(),
                birth_date,
                gender: self.gender.clone(),
            }),
            _ => Err(ValidationFailure {
                errors,
                submitted: self.clone(),
            }),
        }
    }
}

/// Result of [`StaffStore::replace`]. A keyed update that touches no rows is
/// a concurrency conflict; re-checking existence tells the two conflict
/// cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Written,
    ConflictStillExists,
    ConflictRecordGone,
}

/// Persistence gateway over the staff table. `find_all` yields rows ordered
/// by id so list and export output is reproducible.
#[cfg_attr(feature = "test-support", mockall::automock)]
#[async_trait]
pub trait StaffStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Staff>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Staff>, ServiceError>;
    async fn insert(&self, staff: &Staff) -> Result<(), ServiceError>;
    async fn replace(&self, staff: &Staff) -> Result<ReplaceOutcome, ServiceError>;
    async fn remove(&self, id: &str) -> Result<(), ServiceError>;
    async fn exists(&self, id: &str) -> Result<bool, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> StaffForm {
        StaffForm {
            id: "S001".to_string(),
            fullname: "Anna Nguyen".to_string(),
            birth_date: "1990-04-12".to_string(),
            gender: "Female".to_string(),
        }
    }

    #[test]
    fn valid_form_produces_staff() {
        let staff = valid_form().validate().unwrap();
        assert_eq!(staff.id, "S001");
        assert_eq!(staff.birth_date, NaiveDate::from_ymd_opt(1990, 4, 12).unwrap());
    }

    #[test]
    fn missing_fullname_is_rejected() {
        let form = StaffForm {
            fullname: String::new(),
            ..valid_form()
        };
        let failure = form.validate().unwrap_err();
        assert_eq!(failure.errors, vec!["Fullname is required"]);
        assert_eq!(failure.submitted.id, "S001");
    }

    #[test]
    fn overlong_id_is_rejected() {
        let form = StaffForm {
            id: "S00000001".to_string(),
            ..valid_form()
        };
        let failure = form.validate().unwrap_err();
        assert_eq!(failure.errors, vec!["Id must be at most 8 characters"]);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let form = StaffForm {
            birth_date: "12/04/1990".to_string(),
            ..valid_form()
        };
        let failure = form.validate().unwrap_err();
        assert_eq!(failure.errors, vec!["BirthDate must be a yyyy-MM-dd date"]);
    }

    #[test]
    fn empty_form_collects_every_error() {
        let failure = StaffForm::default().validate().unwrap_err();
        assert_eq!(failure.errors.len(), 4);
    }
}
