pub mod auth;
pub mod sections;

use axum::extract::{Path, Query};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, middleware};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::error::AppError;
use crate::graph::CourseFilter;
use crate::models::{CourseDetail, CourseView};
use crate::services::CatalogService;
use crate::state::AppState;

use self::sections::Panel;

#[derive(Deserialize)]
struct CourseQueryParams {
    #[serde(default)]
    tag: Option<String>,
}

#[derive(Deserialize)]
struct SectionQueryParams {
    #[serde(default)]
    section: Option<String>,
}

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/profile", get(auth::profile))
        .layer(middleware::from_fn(auth::require_bearer));

    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses))
        .route("/courses/{id}", get(course_detail))
        .route("/courses/{id}/info", get(info_section))
        .route("/courses/{id}/career", get(career_section))
        .route("/courses/{id}/recognition", get(recognition_section))
        .route("/courses/{id}/eligibility", get(eligibility_section))
        .route("/courses/{id}/curriculum", get(curriculum_section))
        .route("/close-modal", get(close_modal))
        .route("/auth/callback", post(auth::auth_callback))
        .nest("/api", protected)
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn close_modal() -> StatusCode {
    StatusCode::OK
}

fn parse_course_id(raw: &str) -> Result<i64, AppError> {
    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest("Invalid course ID".to_string()))?;
    if id == 0 {
        return Err(AppError::BadRequest("ID is required".to_string()));
    }
    Ok(id)
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<Vec<CourseView>>, AppError> {
    let service = CatalogService::new(state.courses.clone());
    let filter = CourseFilter {
        tag: params.tag.filter(|tag| !tag.is_empty()),
    };
    let courses = service.fetch_courses(&filter).await?;
    Ok(Json(courses))
}

async fn course_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseDetail>, AppError> {
    let id = parse_course_id(&id)?;
    let service = CatalogService::new(state.courses.clone());
    let detail = service.course_detail(id, &state.enquire_form_url).await?;
    Ok(Json(detail))
}

async fn section_fragment(
    state: &AppState,
    id: &str,
    panel: Panel,
    section: Option<&str>,
) -> Result<Response, AppError> {
    let id = parse_course_id(id)?;
    let service = CatalogService::new(state.courses.clone());
    let course = service.fetch_course_by_id(id).await?;
    if !course.is_found() {
        return Err(AppError::NotFound);
    }

    let html = panel.fragment(&course, section);
    Ok(([(CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response())
}

async fn info_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SectionQueryParams>,
) -> Result<Response, AppError> {
    section_fragment(&state, &id, Panel::Info, params.section.as_deref()).await
}

async fn career_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SectionQueryParams>,
) -> Result<Response, AppError> {
    section_fragment(&state, &id, Panel::Career, params.section.as_deref()).await
}

async fn recognition_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SectionQueryParams>,
) -> Result<Response, AppError> {
    section_fragment(&state, &id, Panel::Recognition, params.section.as_deref()).await
}

async fn eligibility_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SectionQueryParams>,
) -> Result<Response, AppError> {
    section_fragment(&state, &id, Panel::Eligibility, params.section.as_deref()).await
}

async fn curriculum_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SectionQueryParams>,
) -> Result<Response, AppError> {
    section_fragment(&state, &id, Panel::Curriculum, params.section.as_deref()).await
}
