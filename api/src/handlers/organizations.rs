use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::{ErrorResponse, SuccessResponse};
use crate::state::AppState;
use common::db::repositories::organization::OrganizationRepository;
use common::models::Organization;

/// Request to create a new organization
#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
}

/// Create a new organization
#[tracing::instrument(skip(state, req))]
pub async fn create_organization(
    State(state): State<AppState>,
    Json(req): Json<CreateOrganizationRequest>,
) -> Result<Json<SuccessResponse<Organization>>, ErrorResponse> {
    if req.name.trim().chars().count() < 2 {
        return Err(ErrorResponse::new(
            "validation_error",
            "Organization name must be at least 2 characters",
        )
        .with_details(serde_json::json!({ "field": "name" })));
    }

    let repo = OrganizationRepository::new(state.db_pool.clone());
    let organization = repo
        .create(req.name.trim())
        .await
        .map_err(ErrorResponse::from)?;

    tracing::info!(organization_id = %organization.id, "Organization created successfully");
    Ok(Json(SuccessResponse::new(organization)))
}

/// List all organizations, newest first
#[tracing::instrument(skip(state))]
pub async fn list_organizations(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Vec<Organization>>>, ErrorResponse> {
    let repo = OrganizationRepository::new(state.db_pool.clone());

    let organizations = repo.find_all().await.map_err(ErrorResponse::from)?;

    tracing::debug!(count = organizations.len(), "Listed organizations");
    Ok(Json(SuccessResponse::new(organizations)))
}

/// Get organization details by ID
#[tracing::instrument(skip(state))]
pub async fn get_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse<Organization>>, ErrorResponse> {
    let repo = OrganizationRepository::new(state.db_pool.clone());

    let organization = repo
        .find_by_id(id)
        .await
        .map_err(ErrorResponse::from)?
        .ok_or_else(|| {
            ErrorResponse::new("not_found", format!("Organization not found: {}", id))
        })?;

    tracing::debug!(organization_id = %id, "Retrieved organization details");
    Ok(Json(SuccessResponse::new(organization)))
}
