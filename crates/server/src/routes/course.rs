use crate::{
    dtos::{
        common::{ErrorResponse, MessageResponse},
        course::{CourseRequest, CourseResponse},
    },
    error::{AppError, parse_id},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use database::{entities::course, services::course::CourseService};

/// Create a course
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Missing fields or unknown category/group", body = ErrorResponse),
        (status = 409, description = "Course with this ID already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    let Json(request) = payload?;
    let course = CourseService::create_course(&state.db, request.validate_create()?).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// List every course
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "All courses", body = [CourseResponse]),
        (status = 404, description = "No courses found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = CourseService::get_courses(&state.db).await?;
    Ok(to_responses(courses))
}

/// Get a course by its code
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "Course code, e.g. CS101")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = CourseService::get_course_by_id(&state.db, &id).await?;
    Ok(Json(course.into()))
}

/// Overwrite a course; category and group links are cleared unless supplied
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "Course code, e.g. CS101")
    ),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Missing fields or unknown category/group", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Json<CourseResponse>, AppError> {
    let Json(request) = payload?;
    let course = CourseService::update_course(&state.db, &id, request.validate_update()?).await?;

    Ok(Json(course.into()))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "Course code, e.g. CS101")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::delete_course(&state.db, &id).await?;
    Ok(Json(MessageResponse::new("Course successfully deleted")))
}

/// List the courses filed directly under a category
#[utoipa::path(
    get,
    path = "/courses/by-category/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Courses of the category, possibly none", body = [CourseResponse]),
        (status = 400, description = "Invalid category ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_courses_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let category_id = parse_id(&category_id, "Category ID is required")?;
    let courses = CourseService::get_courses_by_category(&state.db, category_id).await?;

    Ok(to_responses(courses))
}

/// List the courses of a group
#[utoipa::path(
    get,
    path = "/courses/by-group/{group_id}",
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Courses of the group, possibly none", body = [CourseResponse]),
        (status = 400, description = "Invalid group ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_courses_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let group_id = parse_id(&group_id, "Group ID is required")?;
    let courses = CourseService::get_courses_by_group(&state.db, group_id).await?;

    Ok(to_responses(courses))
}

fn to_responses(courses: Vec<course::Model>) -> Json<Vec<CourseResponse>> {
    Json(courses.into_iter().map(Into::into).collect())
}
