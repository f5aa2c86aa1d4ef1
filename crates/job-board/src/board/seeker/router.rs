use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicationId, ApplicationSubmission, SeekerActionError};
use super::repository::{NoticePublisher, RepositoryError, SeekerRepository};
use super::service::{JobSeekerService, SeekerServiceError};
use crate::board::domain::{CriteriaError, FilterCriteria, PostingId};
use crate::board::filter::SearchResults;
use crate::error::AppError;

/// Query string accepted by the listing endpoint. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub date_posted: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl TryFrom<SearchQuery> for FilterCriteria {
    type Error = CriteriaError;

    fn try_from(query: SearchQuery) -> Result<Self, Self::Error> {
        Ok(FilterCriteria {
            search_text: query.q.unwrap_or_default(),
            location_text: query.location.unwrap_or_default(),
            job_type: query.job_type.as_deref().unwrap_or_default().parse()?,
            date_posted: query.date_posted.as_deref().unwrap_or_default().parse()?,
            category: query.category.filter(|value| !value.is_empty()),
        })
    }
}

/// Router builder exposing listing and seeker endpoints.
pub fn board_router<R, N>(service: Arc<JobSeekerService<R, N>>) -> Router
where
    R: SeekerRepository + 'static,
    N: NoticePublisher + 'static,
{
    Router::new()
        .route("/api/v1/jobs", get(search_handler::<R, N>))
        .route("/api/v1/jobs/:posting_id", get(posting_handler::<R, N>))
        .route("/api/v1/jobs/:posting_id/save", post(save_handler::<R, N>))
        .route("/api/v1/saved", get(saved_handler::<R, N>))
        .route("/api/v1/applications", post(apply_handler::<R, N>))
        .route(
            "/api/v1/applications/:application_id",
            get(application_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn search_handler<R, N>(
    State(service): State<Arc<JobSeekerService<R, N>>>,
    Query(query): Query<SearchQuery>,
) -> Result<axum::Json<SearchResults>, AppError>
where
    R: SeekerRepository + 'static,
    N: NoticePublisher + 'static,
{
    let criteria = FilterCriteria::try_from(query)?;
    Ok(axum::Json(service.search(&criteria)))
}

pub(crate) async fn posting_handler<R, N>(
    State(service): State<Arc<JobSeekerService<R, N>>>,
    Path(posting_id): Path<u32>,
) -> Response
where
    R: SeekerRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.posting(PostingId(posting_id)) {
        Ok(posting) => (StatusCode::OK, axum::Json(posting)).into_response(),
        Err(error) => error_response(StatusCode::NOT_FOUND, error.to_string()),
    }
}

pub(crate) async fn save_handler<R, N>(
    State(service): State<Arc<JobSeekerService<R, N>>>,
    Path(posting_id): Path<u32>,
) -> Response
where
    R: SeekerRepository + 'static,
    N: NoticePublisher + 'static,
{
    let posting_id = PostingId(posting_id);
    match service.toggle_saved(posting_id) {
        Ok(outcome) => {
            let payload = json!({
                "posting_id": posting_id,
                "saved": outcome.is_saved(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn saved_handler<R, N>(
    State(service): State<Arc<JobSeekerService<R, N>>>,
) -> Response
where
    R: SeekerRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.saved_jobs() {
        Ok(jobs) => (StatusCode::OK, axum::Json(jobs)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn apply_handler<R, N>(
    State(service): State<Arc<JobSeekerService<R, N>>>,
    axum::Json(submission): axum::Json<ApplicationSubmission>,
) -> Response
where
    R: SeekerRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.apply(submission) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.view())).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn application_handler<R, N>(
    State(service): State<Arc<JobSeekerService<R, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: SeekerRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.application(&ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: SeekerServiceError) -> Response {
    let status = match &error {
        SeekerServiceError::Action(SeekerActionError::UnknownPosting(_))
        | SeekerServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SeekerServiceError::Action(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SeekerServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SeekerServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, error.to_string())
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}
