use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::Domain;
use super::repository::{
    ContactDetails, LeadNotifier, RepositoryError, SubmissionId, SubmissionRecord,
    SubmissionRepository,
};
use super::risk::RiskTier;
use super::scoring::DomainScores;
use super::service::{AssessmentIntake, ScreeningService, ScreeningServiceError};

/// Flat request body as posted by the questionnaire frontend: identity fields
/// first, every remaining key treated as a question answer.
#[derive(Debug, Deserialize)]
pub struct ScreeningRequest {
    pub name: String,
    pub email: String,
    pub age: u8,
    // The original intake form called this field marital_status.
    #[serde(alias = "marital_status")]
    pub relationship: String,
    #[serde(flatten)]
    pub answers: BTreeMap<String, String>,
}

impl ScreeningRequest {
    fn into_intake(self) -> AssessmentIntake {
        AssessmentIntake {
            contact: ContactDetails {
                name: self.name,
                email: self.email,
                age: self.age,
                relationship: self.relationship,
            },
            answers: self.answers,
        }
    }
}

/// Response mirroring the original assessment API payload, with the stored
/// submission id appended.
#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub success: bool,
    pub submission_id: SubmissionId,
    pub overall_risk: RiskTier,
    pub domain_scores: DomainScores,
    pub flagged_domains: Vec<Domain>,
    pub message: String,
    pub detailed_message: String,
    pub recommendations: Vec<String>,
}

const DEFAULT_RECENT_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
struct RecentQuery {
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct CatalogEntryView {
    key: &'static str,
    prompt: &'static str,
    domain: Domain,
    domain_label: &'static str,
}

/// Router builder exposing the screening intake, lookup, and catalog
/// endpoints.
pub fn screening_router<R, N>(service: Arc<ScreeningService<R, N>>) -> Router
where
    R: SubmissionRepository + 'static,
    N: LeadNotifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/screenings",
            post(submit_handler::<R, N>).get(recent_handler::<R, N>),
        )
        .route("/api/v1/screenings/catalog", get(catalog_handler::<R, N>))
        .route(
            "/api/v1/screenings/:submission_id",
            get(status_handler::<R, N>),
        )
        .route(
            "/api/v1/screenings/:submission_id/report",
            get(report_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<ScreeningService<R, N>>>,
    axum::Json(request): axum::Json<ScreeningRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: LeadNotifier + 'static,
{
    match service.submit(request.into_intake()) {
        Ok(record) => {
            let response = ScreeningResponse {
                success: true,
                submission_id: record.submission_id,
                overall_risk: record.result.overall_risk,
                domain_scores: record.result.domain_scores,
                flagged_domains: record.result.flagged_domains,
                message: record.result.message,
                detailed_message: record.result.detailed_message,
                recommendations: record.result.recommendations,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(ScreeningServiceError::EmptySubmission) => {
            let payload = json!({
                "error": "Please answer at least one developmental question",
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(ScreeningServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "submission already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn recent_handler<R, N>(
    State(service): State<Arc<ScreeningService<R, N>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: LeadNotifier + 'static,
{
    match service.recent(query.limit.unwrap_or(DEFAULT_RECENT_LIMIT)) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(SubmissionRecord::status_view).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<ScreeningService<R, N>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: LeadNotifier + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "submission not found",
                "submission_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<R, N>(
    State(service): State<Arc<ScreeningService<R, N>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: LeadNotifier + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => {
            let payload = json!({
                "submission_id": record.submission_id.0,
                "overall_risk": record.result.overall_risk,
                "risk_label": record.result.overall_risk.label(),
                "breakdown": record.result.domain_breakdown(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "submission not found",
                "submission_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler<R, N>(
    State(service): State<Arc<ScreeningService<R, N>>>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: LeadNotifier + 'static,
{
    let entries: Vec<CatalogEntryView> = service
        .engine()
        .catalog()
        .questions()
        .map(|question| CatalogEntryView {
            key: question.key,
            prompt: question.prompt,
            domain: question.domain,
            domain_label: question.domain.label(),
        })
        .collect();

    (StatusCode::OK, axum::Json(entries)).into_response()
}
