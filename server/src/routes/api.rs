//! JSON API handlers.
//!
//! Every handler reads the immutable records in [`AppState`]; the filters
//! are the same ones the pages apply.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use shop::customer::AggregateDrift;
use shop::diagnostics::{SCOOTER_MODELS, SYMPTOMS, ScooterModel, Symptom};
use shop::{Customer, ParseError, RepairJob, StatusFilter, filter_jobs, search_customers};

use crate::state::AppState;

/// Failure returned to API callers as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    BadQuery(#[from] ParseError),
}

impl ApiError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::BadQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "api request rejected");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    #[serde(default)]
    pub q: String,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomersQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct Catalog {
    pub models: &'static [ScooterModel],
    pub symptoms: &'static [Symptom],
}

/// `GET /api/jobs?q=&status=` — jobs matching the search text and status.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobsQuery>,
) -> Result<Json<Vec<RepairJob>>, ApiError> {
    let filter = match query.status.as_deref() {
        None | Some("") => StatusFilter::All,
        Some(raw) => raw.parse()?,
    };
    let jobs = filter_jobs(&state.jobs, &query.q, filter).into_iter().cloned().collect();
    Ok(Json(jobs))
}

/// `GET /api/customers?q=` — customers matching the search text.
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomersQuery>,
) -> Json<Vec<Customer>> {
    Json(search_customers(&state.customers, &query.q).into_iter().cloned().collect())
}

/// `GET /api/diagnostics/catalog` — models and symptoms offered by the wizard.
pub async fn diagnostics_catalog() -> Json<Catalog> {
    Json(Catalog { models: &SCOOTER_MODELS, symptoms: &SYMPTOMS })
}

/// `GET /api/reports/aggregate-drift` — customers whose stored totals
/// disagree with their job records.
pub async fn aggregate_drift(State(state): State<AppState>) -> Json<Vec<AggregateDrift>> {
    Json(shop::customer::aggregate_drift(&state.customers, &state.jobs))
}
