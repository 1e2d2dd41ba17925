// Job repository implementation

use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{Job, JobPatch, JobWithOrganization, NewJob, Organization};
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::Row;
use tracing::instrument;
use uuid::Uuid;

/// Repository for job-related database operations
pub struct JobRepository {
    pool: DbPool,
}

fn job_from_row(row: &PgRow) -> Result<Job, DatabaseError> {
    Ok(Job {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        rate: row.try_get("rate")?,
        schedule_type: row.try_get("schedule_type")?,
        street_address: row.try_get("street_address")?,
        city: row.try_get("city")?,
        province: row.try_get("province")?,
        description: row.try_get("description")?,
        organization_id: row.try_get("organization_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

impl JobRepository {
    /// Create a new JobRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new job
    ///
    /// The identifier is assigned here: UUIDv7 values are time-ordered, which
    /// keeps `find_all_with_organizations` newest-first under `ORDER BY id DESC`.
    ///
    /// # Errors
    /// Returns `DatabaseError::NotFound` when the referenced organization does
    /// not exist (foreign key violation reported by the store).
    #[instrument(skip(self, input), fields(organization_id = %input.organization_id))]
    pub async fn create(&self, input: &NewJob) -> Result<Job, DatabaseError> {
        let now = Utc::now();
        let job = Job {
            id: Uuid::now_v7(),
            name: input.name.clone(),
            rate: input.rate,
            schedule_type: input.schedule_type.clone(),
            street_address: input.street_address.clone(),
            city: input.city.clone(),
            province: input.province.clone(),
            description: input.description.clone(),
            organization_id: input.organization_id,
            created_at: now,
            updated_at: now,
        };

        let result = sqlx::query(
            r#"
            INSERT INTO jobs (
                id, name, rate, schedule_type, street_address, city, province,
                description, organization_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(job.id)
        .bind(&job.name)
        .bind(job.rate)
        .bind(&job.schedule_type)
        .bind(&job.street_address)
        .bind(&job.city)
        .bind(&job.province)
        .bind(&job.description)
        .bind(job.organization_id)
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(self.pool.pool())
        .await
        .map_err(DatabaseError::from);

        match result {
            Ok(_) => {}
            Err(DatabaseError::ForeignKeyViolation(_)) => {
                return Err(DatabaseError::NotFound(format!(
                    "Organization not found: {}",
                    input.organization_id
                )));
            }
            Err(e) => return Err(e),
        }

        tracing::info!(job_id = %job.id, job_name = %job.name, "Job created");
        Ok(job)
    }

    /// Find a job by ID (no organization join)
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DatabaseError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, rate, schedule_type, street_address, city, province,
                   description, organization_id, created_at, updated_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.pool())
        .await?;

        row.as_ref().map(job_from_row).transpose()
    }

    /// Find all jobs joined with their organization, newest first
    ///
    /// The full set is returned on every call; there is no pagination.
    #[instrument(skip(self))]
    pub async fn find_all_with_organizations(
        &self,
    ) -> Result<Vec<JobWithOrganization>, DatabaseError> {
        let rows = sqlx::query(
            r#"
            SELECT
                j.id, j.name, j.rate, j.schedule_type, j.street_address, j.city,
                j.province, j.description, j.organization_id, j.created_at, j.updated_at,
                o.id AS org_id, o.name AS org_name,
                o.created_at AS org_created_at, o.updated_at AS org_updated_at
            FROM jobs j
            JOIN organizations o ON o.id = j.organization_id
            ORDER BY j.id DESC
            "#,
        )
        .fetch_all(self.pool.pool())
        .await?;

        let mut jobs = Vec::with_capacity(rows.len());
        for row in rows {
            let job = job_from_row(&row)?;
            let organization = Organization {
                id: row.try_get("org_id")?,
                name: row.try_get("org_name")?,
                created_at: row.try_get("org_created_at")?,
                updated_at: row.try_get("org_updated_at")?,
            };
            jobs.push(JobWithOrganization { job, organization });
        }

        tracing::debug!(count = jobs.len(), "Listed jobs with organizations");
        Ok(jobs)
    }

    /// Update an existing job
    ///
    /// Only name, rate, schedule type, and description are mutable; the owning
    /// organization and address fields never change through this path.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: &JobPatch) -> Result<Job, DatabaseError> {
        let row = sqlx::query(
            r#"
            UPDATE jobs
            SET name = $2,
                rate = $3,
                schedule_type = $4,
                description = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING id, name, rate, schedule_type, street_address, city, province,
                      description, organization_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(patch.rate)
        .bind(&patch.schedule_type)
        .bind(&patch.description)
        .bind(Utc::now())
        .fetch_optional(self.pool.pool())
        .await?;

        let row = row.ok_or_else(|| DatabaseError::NotFound(format!("Job not found: {}", id)))?;
        let job = job_from_row(&row)?;

        tracing::info!(job_id = %id, job_name = %job.name, "Job updated");
        Ok(job)
    }

    /// Delete a job
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(self.pool.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Job not found: {}", id)));
        }

        tracing::info!(job_id = %id, "Job deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    #[test]
    fn test_v7_identifiers_are_monotonic() {
        // ORDER BY id DESC relies on UUIDv7 byte order following creation order
        let a = Uuid::now_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = Uuid::now_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let c = Uuid::now_v7();
        assert!(a.as_bytes() < b.as_bytes());
        assert!(b.as_bytes() < c.as_bytes());
    }
}
