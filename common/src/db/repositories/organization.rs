// Organization repository implementation

use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::Organization;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

/// Repository for organization-related database operations
pub struct OrganizationRepository {
    pool: DbPool,
}

impl OrganizationRepository {
    /// Create a new OrganizationRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new organization
    #[instrument(skip(self, name))]
    pub async fn create(&self, name: &str) -> Result<Organization, DatabaseError> {
        let now = Utc::now();
        let organization = Organization {
            id: Uuid::now_v7(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO organizations (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(organization.id)
        .bind(&organization.name)
        .bind(organization.created_at)
        .bind(organization.updated_at)
        .execute(self.pool.pool())
        .await?;

        tracing::info!(organization_id = %organization.id, organization_name = %organization.name, "Organization created");
        Ok(organization)
    }

    /// Find an organization by ID
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>, DatabaseError> {
        let organization = sqlx::query_as::<_, Organization>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM organizations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(organization)
    }

    /// Find all organizations, newest first
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Organization>, DatabaseError> {
        let organizations = sqlx::query_as::<_, Organization>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM organizations
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool.pool())
        .await?;

        tracing::debug!(count = organizations.len(), "Listed organizations");
        Ok(organizations)
    }
}
