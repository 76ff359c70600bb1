/**
 * Form Endpoint Handlers
 *
 * HTTP handlers for the template and submission endpoints:
 *
 * - `GET /api/forms` - list available template names
 * - `GET /api/forms/{form_name}` - fetch a template's ordered elements
 * - `PUT /api/forms/{form_name}` - save the full element sequence
 *   (authenticated; the builder's explicit save action)
 * - `POST /api/forms/{form_name}/submit` - store entered values
 *
 * Fetching and submitting are public like the rest of the original
 * surface; saving a layout requires a session because it rewrites what
 * every other user sees.
 */
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::SuccessResponse;
use crate::backend::error::ApiError;
use crate::backend::forms::submissions::{insert_submission, SubmissionValues};
use crate::backend::forms::templates::{get_template, list_template_names, save_template};
use crate::backend::middleware::auth::require_session;
use crate::backend::server::state::AppState;
use crate::shared::forms::{FieldDescriptor, FormTemplate};

/// Response for the template listing
#[derive(Serialize, Deserialize, Debug)]
pub struct FormListResponse {
    pub forms: Vec<String>,
}

/// Body of a builder save: the complete current element sequence
#[derive(Serialize, Deserialize, Debug)]
pub struct SaveFormRequest {
    pub elements: Vec<FieldDescriptor>,
}

/// Body of a submission: values keyed by field id
#[derive(Serialize, Deserialize, Debug)]
pub struct SubmitFormRequest {
    pub values: SubmissionValues,
}

/// List available form template names
pub async fn list_forms(
    State(pool): State<Option<PgPool>>,
) -> Result<Json<FormListResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;
    let forms = list_template_names(&pool).await?;
    Ok(Json(FormListResponse { forms }))
}

/// Fetch one template with its ordered elements
///
/// # Errors
/// * `404 Not Found` - unknown form name
pub async fn get_form(
    State(pool): State<Option<PgPool>>,
    Path(form_name): Path<String>,
) -> Result<Json<FormTemplate>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;

    let template = get_template(&pool, &form_name)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Unknown form requested: {}", form_name);
            ApiError::not_found("form")
        })?;

    Ok(Json(template))
}

/// Save the full element sequence for a template.
///
/// Requires a session. The request replaces the stored order wholesale;
/// two concurrent editors race with last-write-wins semantics.
///
/// # Errors
/// * `401 Unauthorized` - no valid session
pub async fn save_form(
    State(state): State<AppState>,
    Path(form_name): Path<String>,
    headers: HeaderMap,
    Json(request): Json<SaveFormRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let user_id = require_session(&state.sessions, &headers)?;

    let pool = state.db_pool.as_ref().ok_or(ApiError::Unavailable)?;

    save_template(pool, &form_name, &request.elements).await?;
    tracing::info!(
        "Template {} saved by {} ({} elements)",
        form_name,
        user_id,
        request.elements.len()
    );

    Ok(Json(SuccessResponse::ok()))
}

/// Store one submission against a template
///
/// # Errors
/// * `404 Not Found` - unknown form name
pub async fn submit_form(
    State(pool): State<Option<PgPool>>,
    Path(form_name): Path<String>,
    Json(request): Json<SubmitFormRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;

    // A submission must point at a template that exists; values themselves
    // are not validated beyond what the input widgets enforced client-side.
    if get_template(&pool, &form_name).await?.is_none() {
        tracing::warn!("Submission for unknown form: {}", form_name);
        return Err(ApiError::not_found("form"));
    }

    insert_submission(&pool, &form_name, &request.values).await?;
    tracing::info!(
        "Submission stored for {} ({} values)",
        form_name,
        request.values.len()
    );

    Ok(Json(SuccessResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_get_form_without_database() {
        let result = get_form(State(None), Path("site-safety".to_string())).await;
        assert_matches!(result, Err(ApiError::Unavailable));
    }

    #[tokio::test]
    async fn test_save_form_requires_session() {
        let state = AppState::new(None);
        let request = SaveFormRequest { elements: vec![] };
        let result = save_form(
            State(state),
            Path("site-safety".to_string()),
            HeaderMap::new(),
            Json(request),
        )
        .await;
        assert_matches!(result, Err(ApiError::Unauthorized));
    }
}
