use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::{ErrorResponse, SuccessResponse};
use crate::state::AppState;
use common::db::repositories::job::JobRepository;
use common::models::{Job, JobPatch, JobWithOrganization, NewJob};
use common::telemetry;

/// Request to create a new job
///
/// Every field is required; the identifier is assigned by the store.
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub name: String,
    pub rate: Decimal,
    pub schedule_type: String,
    pub street_address: String,
    pub city: String,
    pub province: String,
    pub description: String,
    pub organization_id: Uuid,
}

impl From<CreateJobRequest> for NewJob {
    fn from(req: CreateJobRequest) -> Self {
        NewJob {
            name: req.name,
            rate: req.rate,
            schedule_type: req.schedule_type,
            street_address: req.street_address,
            city: req.city,
            province: req.province,
            description: req.description,
            organization_id: req.organization_id,
        }
    }
}

/// Request to update an existing job
///
/// Organization and address fields are immutable and have no counterpart here.
#[derive(Debug, Deserialize)]
pub struct UpdateJobRequest {
    pub name: String,
    pub rate: Decimal,
    pub schedule_type: String,
    pub description: String,
}

impl From<UpdateJobRequest> for JobPatch {
    fn from(req: UpdateJobRequest) -> Self {
        JobPatch {
            name: req.name,
            rate: req.rate,
            schedule_type: req.schedule_type,
            description: req.description,
        }
    }
}

/// Create a new job
///
/// Validation runs before any storage access; a request that fails a shape
/// or range constraint never reaches the database.
#[tracing::instrument(skip(state, req))]
pub async fn create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<Json<SuccessResponse<Job>>, ErrorResponse> {
    let input: NewJob = req.into();
    input.validate().map_err(ErrorResponse::from)?;

    let repo = JobRepository::new(state.db_pool.clone());
    let job = repo.create(&input).await.map_err(ErrorResponse::from)?;

    telemetry::record_job_created();
    tracing::info!(job_id = %job.id, "Job created successfully");
    Ok(Json(SuccessResponse::new(job)))
}

/// List all jobs with their organization, newest first
#[tracing::instrument(skip(state))]
pub async fn list_jobs(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Vec<JobWithOrganization>>>, ErrorResponse> {
    let repo = JobRepository::new(state.db_pool.clone());

    let jobs = repo
        .find_all_with_organizations()
        .await
        .map_err(ErrorResponse::from)?;

    telemetry::record_listing_size(jobs.len());
    tracing::debug!(count = jobs.len(), "Listed jobs");
    Ok(Json(SuccessResponse::new(jobs)))
}

/// Get job details by ID (no organization join)
#[tracing::instrument(skip(state))]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse<Job>>, ErrorResponse> {
    let repo = JobRepository::new(state.db_pool.clone());

    let job = repo
        .find_by_id(id)
        .await
        .map_err(ErrorResponse::from)?
        .ok_or_else(|| ErrorResponse::new("not_found", format!("Job not found: {}", id)))?;

    tracing::debug!(job_id = %id, "Retrieved job details");
    Ok(Json(SuccessResponse::new(job)))
}

/// Update a job
///
/// Only name, rate, schedule type, and description may change.
#[tracing::instrument(skip(state, req))]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<SuccessResponse<Job>>, ErrorResponse> {
    let patch: JobPatch = req.into();
    patch.validate().map_err(ErrorResponse::from)?;

    let repo = JobRepository::new(state.db_pool.clone());
    let job = repo.update(id, &patch).await.map_err(ErrorResponse::from)?;

    telemetry::record_job_updated();
    tracing::info!(job_id = %id, "Job updated successfully");
    Ok(Json(SuccessResponse::new(job)))
}

/// Delete a job
#[tracing::instrument(skip(state))]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse<()>>, ErrorResponse> {
    let repo = JobRepository::new(state.db_pool.clone());

    repo.delete(id).await.map_err(ErrorResponse::from)?;

    telemetry::record_job_deleted();
    tracing::info!(job_id = %id, "Job deleted successfully");
    Ok(Json(SuccessResponse::new(())))
}
