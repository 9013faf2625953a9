use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::listings::{
    format_salary, time_ago, ExperienceLevel, FilterCriteria, Job, JobType, SortKey,
};
use crate::session::{
    ApplicationRepository, Capabilities, JobBoardSession, JobDraft, ManagedJobRepository,
    RepositoryError, Role, SessionError, User,
};

/// Router builder exposing listing, session, application, and management endpoints.
pub fn job_board_router<A, M>(session: Arc<JobBoardSession<A, M>>) -> Router
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs",
            get(list_handler::<A, M>).post(create_job_handler::<A, M>),
        )
        .route(
            "/api/v1/jobs/:job_id",
            get(detail_handler::<A, M>)
                .put(update_job_handler::<A, M>)
                .delete(delete_job_handler::<A, M>),
        )
        .route(
            "/api/v1/jobs/:job_id/applications",
            post(apply_handler::<A, M>),
        )
        .route("/api/v1/applications", get(applications_handler::<A, M>))
        .route(
            "/api/v1/session",
            get(session_handler::<A, M>)
                .post(sign_in_handler::<A, M>)
                .delete(sign_out_handler::<A, M>),
        )
        .with_state(session)
}

/// Query string for the listing endpoint. List values are comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct JobListQuery {
    #[serde(default)]
    pub job_types: Option<String>,
    #[serde(default)]
    pub locations: Option<String>,
    #[serde(default)]
    pub experience_levels: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown job type '{0}'")]
    UnknownJobType(String),
    #[error("unknown experience level '{0}'")]
    UnknownExperienceLevel(String),
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),
}

impl JobListQuery {
    pub fn into_criteria(self) -> Result<(FilterCriteria, SortKey), QueryError> {
        let job_types = split_list(self.job_types.as_deref())
            .map(|label| {
                JobType::parse(label).ok_or_else(|| QueryError::UnknownJobType(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let experience_levels = split_list(self.experience_levels.as_deref())
            .map(|label| {
                ExperienceLevel::parse(label)
                    .ok_or_else(|| QueryError::UnknownExperienceLevel(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let locations = split_list(self.locations.as_deref())
            .map(str::to_string)
            .collect();
        let sort = match self.sort.as_deref() {
            Some(raw) => {
                SortKey::parse(raw).ok_or_else(|| QueryError::UnknownSortKey(raw.to_string()))?
            }
            None => SortKey::default(),
        };

        Ok((
            FilterCriteria {
                job_types,
                locations,
                experience_levels,
                search_query: self.q.unwrap_or_default(),
            },
            sort,
        ))
    }
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

/// Job detail as the detail pane renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailView {
    #[serde(flatten)]
    pub job: Job,
    pub salary_label: String,
    pub posted_ago: String,
    pub has_applied: bool,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub user: Option<User>,
    pub capabilities: Capabilities,
}

pub(crate) async fn list_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
    Query(query): Query<JobListQuery>,
) -> Response
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    let (criteria, sort) = match query.into_criteria() {
        Ok(parsed) => parsed,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match session.view(&criteria, sort) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => session_error_response(error),
    }
}

pub(crate) async fn detail_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
    Path(job_id): Path<String>,
) -> Response
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    let detail = session.job(&job_id).and_then(|job| {
        let has_applied = session.has_applied(&job.id)?;
        Ok(JobDetailView {
            salary_label: format_salary(&job.salary),
            posted_ago: time_ago(&job.posted_date, Utc::now()),
            has_applied,
            job,
        })
    });

    match detail {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => session_error_response(error),
    }
}

pub(crate) async fn apply_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
    Path(job_id): Path<String>,
) -> Response
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    match session.apply(&job_id) {
        Ok(application) => (StatusCode::CREATED, Json(application)).into_response(),
        Err(error) => session_error_response(error),
    }
}

pub(crate) async fn applications_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
) -> Response
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    match session.applied_jobs() {
        Ok(applied) => (StatusCode::OK, Json(applied)).into_response(),
        Err(error) => session_error_response(error),
    }
}

pub(crate) async fn create_job_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
    Json(draft): Json<JobDraft>,
) -> Response
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    match session.add_job(draft) {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(error) => session_error_response(error),
    }
}

pub(crate) async fn update_job_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
    Path(job_id): Path<String>,
    Json(draft): Json<JobDraft>,
) -> Response
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    match session.update_job(&job_id, draft) {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(error) => session_error_response(error),
    }
}

pub(crate) async fn delete_job_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
    Path(job_id): Path<String>,
) -> Response
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    match session.delete_job(&job_id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => session_error_response(error),
    }
}

pub(crate) async fn session_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
) -> Json<SessionView>
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    Json(SessionView {
        user: session.current_user(),
        capabilities: session.capabilities(),
    })
}

pub(crate) async fn sign_in_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
    Json(request): Json<SignInRequest>,
) -> Response
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    match session.sign_in(&request.email, request.role) {
        Ok(user) => {
            let view = SessionView {
                capabilities: Capabilities::for_user(Some(&user)),
                user: Some(user),
            };
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => session_error_response(error),
    }
}

pub(crate) async fn sign_out_handler<A, M>(
    State(session): State<Arc<JobBoardSession<A, M>>>,
) -> StatusCode
where
    A: ApplicationRepository + 'static,
    M: ManagedJobRepository + 'static,
{
    session.sign_out();
    StatusCode::NO_CONTENT
}

/// Single status mapping for session failures, shared with [`crate::error::AppError`].
pub(crate) fn session_error_response(error: SessionError) -> Response {
    let status = match &error {
        SessionError::MissingEmail | SessionError::Draft(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SessionError::NotSignedIn => StatusCode::UNAUTHORIZED,
        SessionError::Forbidden { .. } => StatusCode::FORBIDDEN,
        SessionError::UnknownJob(_) | SessionError::Repository(RepositoryError::NotFound) => {
            StatusCode::NOT_FOUND
        }
        SessionError::AlreadyApplied(_) | SessionError::Repository(RepositoryError::Conflict) => {
            StatusCode::CONFLICT
        }
        SessionError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
