use axum::{
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use common::models::UserClaims;

use crate::state::AppState;

/// Authentication middleware that validates JWT bearer tokens
///
/// Tokens are issued by the identity provider; this service only verifies
/// them. Validated claims are pushed into request extensions for handlers.
#[tracing::instrument(skip(state, req, next))]
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // Check if it's a Bearer token
    if !auth_header.starts_with("Bearer ") {
        tracing::warn!("Invalid authorization header format");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = &auth_header[7..]; // Skip "Bearer "

    let claims = validate_token(token, &state)?;

    // Insert claims into request extensions for use by handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Validate a JWT against the configured shared secret
#[tracing::instrument(skip(token, state))]
fn validate_token(token: &str, state: &AppState) -> Result<UserClaims, StatusCode> {
    let jwt_secret = &state.config.auth.jwt_secret;

    let validation = jsonwebtoken::Validation::default();

    let token_data = jsonwebtoken::decode::<UserClaims>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::warn!(error = %e, "Failed to validate token");
        StatusCode::UNAUTHORIZED
    })?;

    // Check if token is expired
    let now = chrono::Utc::now().timestamp();
    if token_data.claims.exp < now {
        tracing::warn!("Token expired");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(token_data.claims)
}
