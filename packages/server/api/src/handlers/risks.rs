use crate::handlers::{self, ServiceError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use risk_core::{Subject, TableRow};
use serde::Serialize;
use std::collections::BTreeMap;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/risks",
            get(all_risks).fallback(handlers::not_found),
        )
        .route(
            "/api/risk/:subject",
            get(subject_risk).fallback(handlers::not_found),
        )
}

#[derive(Serialize)]
pub struct AllRisksResponse {
    pub rows: Vec<TableRow>,
    pub totals: BTreeMap<Subject, f64>,
}

/// `GET /api/risks` - the full table with both subjects' raw scores and
/// weighted values, plus per-subject totals.
pub async fn all_risks(
    State(state): State<AppState>,
) -> Result<Json<AllRisksResponse>, ServiceError> {
    let totals = state
        .table
        .all_risks()
        .map_err(|e| {
            tracing::error!("risk table unusable: {}", e);
            ServiceError::from(e)
        })?
        .into_iter()
        .map(|(subject, risk)| (subject, risk.total))
        .collect();

    Ok(Json(AllRisksResponse {
        rows: state.table.combined_rows(),
        totals,
    }))
}

#[derive(Serialize)]
pub struct SubjectRiskResponse {
    pub person: String,
    pub total: f64,
    pub details: Vec<(String, f64)>,
}

/// `GET /api/risk/{subject}` - total and per-factor breakdown for one subject.
pub async fn subject_risk(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> Result<Json<SubjectRiskResponse>, ServiceError> {
    let risk = state.table.weighted_risk_named(&subject).map_err(|e| {
        tracing::warn!("risk lookup rejected: {}", e);
        ServiceError::from(e)
    })?;

    Ok(Json(SubjectRiskResponse {
        person: subject,
        total: risk.total,
        details: risk.details,
    }))
}
