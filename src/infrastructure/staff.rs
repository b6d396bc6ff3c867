use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    domain::staff::{ReplaceOutcome, Staff, StaffStore},
    error::ServiceError,
};

pub struct PgStaffStore {
    pool: PgPool,
}

impl PgStaffStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StaffStore for PgStaffStore {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Staff>, ServiceError> {
        let output = sqlx::query_as::<_, Staff>(
            r#"
            SELECT id, fullname, birth_date, gender
            FROM staff
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(output)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Staff>, ServiceError> {
        let output = sqlx::query_as::<_, Staff>(
            r#"
            SELECT id, fullname, birth_date, gender
            FROM staff
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(output)
    }

    #[tracing::instrument(skip(self))]
    async fn insert(&self, staff: &Staff) -> Result<(), ServiceError> {
        sqlx::query(
            r#"
            INSERT INTO staff (id, fullname, birth_date, gender)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&staff.id)
        .bind(&staff.fullname)
        .bind(staff.birth_date)
        .bind(&staff.gender)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ServiceError::Conflict(format!("Staff {} already exists", staff.id))
            }
            _ => ServiceError::Database(e),
        })?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn replace(&self, staff: &Staff) -> Result<ReplaceOutcome, ServiceError> {
        let output = sqlx::query(
            r#"
            UPDATE staff
            SET fullname = $2, birth_date = $3, gender = $4
            WHERE id = $1
            "#,
        )
        .bind(&staff.id)
        .bind(&staff.fullname)
        .bind(staff.birth_date)
        .bind(&staff.gender)
        .execute(&self.pool)
        .await?;

        // A keyed update that touched nothing means another writer got there
        // first; whether the row still exists decides how the caller reacts.
        if output.rows_affected() == 0 {
            if self.exists(&staff.id).await? {
                Ok(ReplaceOutcome::ConflictStillExists)
            } else {
                Ok(ReplaceOutcome::ConflictRecordGone)
            }
        } else {
            Ok(ReplaceOutcome::Written)
        }
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: &str) -> Result<(), ServiceError> {
        // Deleting an already-absent record is not an error.
        sqlx::query(
            r#"
            DELETE FROM staff
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn exists(&self, id: &str) -> Result<bool, ServiceError> {
        let output: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM staff WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(output)
    }
}
