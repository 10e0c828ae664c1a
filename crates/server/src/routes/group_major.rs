use crate::{
    dtos::{
        common::{ErrorResponse, MessageResponse},
        group_major::{GroupMajorRequest, GroupMajorResponse},
    },
    error::{AppError, parse_id},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use database::services::group_major::GroupMajorService;

const INVALID_GROUP_ID: &str = "Invalid group ID";

/// Create a group under an existing category
#[utoipa::path(
    post,
    path = "/groups",
    request_body = GroupMajorRequest,
    responses(
        (status = 201, description = "Group created", body = GroupMajorResponse),
        (status = 400, description = "Missing fields or unknown category", body = ErrorResponse),
        (status = 409, description = "Group already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
pub async fn create_group(
    State(state): State<AppState>,
    payload: Result<Json<GroupMajorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GroupMajorResponse>), AppError> {
    let Json(request) = payload?;
    let group = GroupMajorService::create_group(&state.db, request.validate()?).await?;

    Ok((StatusCode::CREATED, Json(group.into())))
}

/// List every group
#[utoipa::path(
    get,
    path = "/groups",
    responses(
        (status = 200, description = "All groups", body = [GroupMajorResponse]),
        (status = 404, description = "No groups found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
pub async fn get_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<GroupMajorResponse>>, AppError> {
    let groups = GroupMajorService::get_groups(&state.db).await?;
    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

/// Get a group by id
#[utoipa::path(
    get,
    path = "/groups/{id}",
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group found", body = GroupMajorResponse),
        (status = 400, description = "Invalid group ID", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
pub async fn get_group_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GroupMajorResponse>, AppError> {
    let group_id = parse_id(&id, INVALID_GROUP_ID)?;
    let group = GroupMajorService::get_group_by_id(&state.db, group_id).await?;

    Ok(Json(group.into()))
}

/// Overwrite a group
#[utoipa::path(
    put,
    path = "/groups/{id}",
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    request_body = GroupMajorRequest,
    responses(
        (status = 200, description = "Group updated", body = GroupMajorResponse),
        (status = 400, description = "Invalid ID, missing fields or unknown category", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<GroupMajorRequest>, JsonRejection>,
) -> Result<Json<GroupMajorResponse>, AppError> {
    let group_id = parse_id(&id, INVALID_GROUP_ID)?;
    let Json(request) = payload?;
    let group = GroupMajorService::update_group(&state.db, group_id, request.validate()?).await?;

    Ok(Json(group.into()))
}

/// Delete a group and its courses
#[utoipa::path(
    delete,
    path = "/groups/{id}",
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group deleted", body = MessageResponse),
        (status = 400, description = "Invalid group ID", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let group_id = parse_id(&id, INVALID_GROUP_ID)?;
    GroupMajorService::delete_group(&state.db, group_id).await?;

    Ok(Json(MessageResponse::new("Group Major successfully deleted")))
}

/// List the groups of a category
#[utoipa::path(
    get,
    path = "/groups/by-category/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Groups of the category, possibly none", body = [GroupMajorResponse]),
        (status = 400, description = "Invalid category ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
pub async fn get_groups_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<GroupMajorResponse>>, AppError> {
    let category_id = parse_id(&category_id, "Category ID is required")?;
    let groups = GroupMajorService::get_groups_by_category(&state.db, category_id).await?;

    Ok(Json(groups.into_iter().map(Into::into).collect()))
}
