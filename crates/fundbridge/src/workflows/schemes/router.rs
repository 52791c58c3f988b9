use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::catalog::SchemeCatalog;
use super::domain::{SchemeId, SchemeRecord};
use super::eligibility::EligibilityEvaluator;
use super::filter::FilterState;
use super::lookup::{EligibilityForm, FormError};
use super::views::{EligibilityReport, FormOptions, SchemeListView};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct SchemeQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequest {
    #[serde(flatten)]
    pub form: EligibilityForm,
    #[serde(default)]
    pub include_breakdown: bool,
}

/// Router exposing catalog browsing and the eligibility check.
pub fn scheme_router(catalog: Arc<SchemeCatalog>) -> Router {
    Router::new()
        .route("/api/v1/schemes", get(list_handler))
        .route("/api/v1/schemes/form-options", get(form_options_handler))
        .route("/api/v1/schemes/eligibility", post(eligibility_handler))
        .route("/api/v1/schemes/:scheme_id", get(detail_handler))
        .with_state(catalog)
}

pub(crate) async fn list_handler(
    State(catalog): State<Arc<SchemeCatalog>>,
    Query(query): Query<SchemeQuery>,
) -> Json<SchemeListView> {
    let filter = FilterState::from_raw(query.search.as_deref(), query.category.as_deref());
    let schemes = filter.apply(catalog.schemes());
    debug!(
        search = %filter.search_term,
        category = ?filter.category,
        matched = schemes.len(),
        "filtered scheme catalog"
    );
    Json(SchemeListView::new(filter, schemes))
}

pub(crate) async fn detail_handler(
    State(catalog): State<Arc<SchemeCatalog>>,
    Path(scheme_id): Path<u32>,
) -> Result<Json<SchemeRecord>, AppError> {
    let scheme = catalog
        .get(SchemeId(scheme_id))
        .ok_or_else(|| AppError::NotFound(format!("scheme {scheme_id}")))?;
    Ok(Json(scheme.clone()))
}

pub(crate) async fn form_options_handler() -> Json<FormOptions> {
    Json(FormOptions::standard())
}

pub(crate) async fn eligibility_handler(
    State(catalog): State<Arc<SchemeCatalog>>,
    Json(request): Json<EligibilityRequest>,
) -> Response {
    let profile = match request.form.to_profile() {
        Ok(profile) => profile,
        Err(error) => {
            let FormError::Incomplete { missing } = &error;
            let missing: Vec<&str> = missing.iter().map(|dimension| dimension.field()).collect();
            let payload = json!({
                "error": error.to_string(),
                "missing": missing,
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let evaluator = EligibilityEvaluator::new();
    let matches = evaluator.evaluate(&catalog, &profile);
    let assessments = request
        .include_breakdown
        .then(|| evaluator.assess_all(&catalog, &profile));

    info!(
        matched = matches.len(),
        breakdown = request.include_breakdown,
        "eligibility check completed"
    );

    let report = EligibilityReport::new(evaluator.threshold(), catalog.len(), matches, assessments);
    (StatusCode::OK, Json(report)).into_response()
}
