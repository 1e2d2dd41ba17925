use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::ValidationError;

/// Minimum length for every free-text field accepted on the write path
const MIN_TEXT_LEN: usize = 2;

// ============================================================================
// Job Models
// ============================================================================

/// Job represents one posted position
///
/// The identifier is assigned by the store (UUIDv7, time-ordered) and never
/// reused. The owning organization is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub name: String,
    pub rate: Decimal,
    pub schedule_type: String,
    pub street_address: String,
    pub city: String,
    pub province: String,
    pub description: String,
    pub organization_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Organization represents the employer owning a Job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A Job joined with its owning Organization, as returned by the listing query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobWithOrganization {
    #[serde(flatten)]
    pub job: Job,
    pub organization: Organization,
}

/// Fields supplied when creating a Job (identifier is store-assigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
    pub name: String,
    pub rate: Decimal,
    pub schedule_type: String,
    pub street_address: String,
    pub city: String,
    pub province: String,
    pub description: String,
    pub organization_id: Uuid,
}

/// Fields that may change on an existing Job
///
/// Organization, address, and identifier are immutable via this path, so
/// they have no counterpart here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPatch {
    pub name: String,
    pub rate: Decimal,
    pub schedule_type: String,
    pub description: String,
}

/// Create-vs-edit form submission
///
/// The two modes carry distinct field sets and validation rules, so the mode
/// is explicit rather than inferred from the presence of an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum JobForm {
    Create(NewJob),
    Edit { id: Uuid, patch: JobPatch },
}

impl JobForm {
    /// Validate the form against the rule set of its mode
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            JobForm::Create(new_job) => new_job.validate(),
            JobForm::Edit { patch, .. } => patch.validate(),
        }
    }
}

fn require_min_len(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_TEXT_LEN {
        return Err(ValidationError::InvalidFieldValue {
            field: field.to_string(),
            reason: format!("must be at least {} characters", MIN_TEXT_LEN),
        });
    }
    Ok(())
}

fn require_non_negative(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::InvalidFieldValue {
            field: field.to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    Ok(())
}

impl NewJob {
    /// Check every create-path constraint, reporting the first offending field
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_min_len("name", &self.name)?;
        require_non_negative("rate", self.rate)?;
        require_min_len("schedule_type", &self.schedule_type)?;
        require_min_len("street_address", &self.street_address)?;
        require_min_len("city", &self.city)?;
        require_min_len("province", &self.province)?;
        require_min_len("description", &self.description)?;
        if self.organization_id.is_nil() {
            return Err(ValidationError::MissingField("organization_id".to_string()));
        }
        Ok(())
    }
}

impl JobPatch {
    /// Check every update-path constraint
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_min_len("name", &self.name)?;
        require_non_negative("rate", self.rate)?;
        require_min_len("schedule_type", &self.schedule_type)?;
        require_min_len("description", &self.description)?;
        Ok(())
    }
}

// ============================================================================
// Auth Models
// ============================================================================

/// Claims carried by a validated bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}
