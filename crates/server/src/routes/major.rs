use crate::{
    dtos::{
        common::{ErrorResponse, MessageResponse},
        major::{MajorRequest, MajorResponse},
    },
    error::{AppError, parse_id},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use database::services::major::MajorService;

const INVALID_MAJOR_ID: &str = "Invalid or missing major_id";

/// Create a major
#[utoipa::path(
    post,
    path = "/majors",
    request_body = MajorRequest,
    responses(
        (status = 201, description = "Major created", body = MajorResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 409, description = "Major code already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Majors"
)]
pub async fn create_major(
    State(state): State<AppState>,
    payload: Result<Json<MajorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MajorResponse>), AppError> {
    let Json(request) = payload?;
    let major = MajorService::create_major(&state.db, request.validate()?).await?;

    Ok((StatusCode::CREATED, Json(major.into())))
}

/// List every major
#[utoipa::path(
    get,
    path = "/majors",
    responses(
        (status = 200, description = "All majors", body = [MajorResponse]),
        (status = 404, description = "No majors found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Majors"
)]
pub async fn get_majors(
    State(state): State<AppState>,
) -> Result<Json<Vec<MajorResponse>>, AppError> {
    let majors = MajorService::get_majors(&state.db).await?;
    Ok(Json(majors.into_iter().map(Into::into).collect()))
}

/// Get a major by its code
#[utoipa::path(
    get,
    path = "/majors/code/{major_code}",
    params(
        ("major_code" = String, Path, description = "Major code")
    ),
    responses(
        (status = 200, description = "Major found", body = MajorResponse),
        (status = 404, description = "Major not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Majors"
)]
pub async fn get_major_by_code(
    State(state): State<AppState>,
    Path(major_code): Path<String>,
) -> Result<Json<MajorResponse>, AppError> {
    if major_code.trim().is_empty() {
        return Err(AppError::BadRequest("Missing major_code".to_string()));
    }

    let major = MajorService::get_major_by_code(&state.db, &major_code).await?;
    Ok(Json(major.into()))
}

/// Get a major by id
#[utoipa::path(
    get,
    path = "/majors/{id}",
    params(
        ("id" = i32, Path, description = "Major ID")
    ),
    responses(
        (status = 200, description = "Major found", body = MajorResponse),
        (status = 400, description = "Invalid major ID format", body = ErrorResponse),
        (status = 404, description = "Major not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Majors"
)]
pub async fn get_major_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MajorResponse>, AppError> {
    let major_id = parse_id(&id, "Invalid major ID format")?;
    let major = MajorService::get_major_by_id(&state.db, major_id).await?;

    Ok(Json(major.into()))
}

/// Overwrite a major
#[utoipa::path(
    put,
    path = "/majors/{id}",
    params(
        ("id" = i32, Path, description = "Major ID")
    ),
    request_body = MajorRequest,
    responses(
        (status = 200, description = "Major updated", body = MajorResponse),
        (status = 400, description = "Invalid ID or missing fields", body = ErrorResponse),
        (status = 404, description = "Major not found", body = ErrorResponse),
        (status = 409, description = "Major code already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Majors"
)]
pub async fn update_major(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MajorRequest>, JsonRejection>,
) -> Result<Json<MajorResponse>, AppError> {
    let major_id = parse_id(&id, INVALID_MAJOR_ID)?;
    let Json(request) = payload?;
    let major = MajorService::update_major(&state.db, major_id, request.validate()?).await?;

    Ok(Json(major.into()))
}

/// Delete a major with its categories, groups and courses
#[utoipa::path(
    delete,
    path = "/majors/{id}",
    params(
        ("id" = i32, Path, description = "Major ID")
    ),
    responses(
        (status = 200, description = "Major and related records deleted", body = MessageResponse),
        (status = 400, description = "Invalid major ID", body = ErrorResponse),
        (status = 404, description = "Major not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Majors"
)]
pub async fn delete_major(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let major_id = parse_id(&id, INVALID_MAJOR_ID)?;
    MajorService::delete_major(&state.db, major_id, state.major_delete_policy).await?;

    Ok(Json(MessageResponse::new(
        "Major and related courses successfully deleted",
    )))
}
