use crate::{
    dtos::{
        category::{CategoryRequest, CategoryResponse},
        common::{ErrorResponse, MessageResponse},
    },
    error::{AppError, parse_id},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use database::services::category::CategoryService;

const INVALID_CATEGORY_ID: &str = "Invalid category_id format";

/// Create a category under an existing major
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Missing fields or unknown major", body = ErrorResponse),
        (status = 409, description = "Category already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    let Json(request) = payload?;
    let category = CategoryService::create_category(&state.db, request.validate()?).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// List every category
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories, possibly none", body = [CategoryResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = CategoryService::get_categories(&state.db).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 400, description = "Invalid category ID format", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category_id = parse_id(&id, INVALID_CATEGORY_ID)?;
    let category = CategoryService::get_category_by_id(&state.db, category_id).await?;

    Ok(Json(category.into()))
}

/// Overwrite a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Invalid ID, missing fields or unknown major", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category_id = parse_id(&id, INVALID_CATEGORY_ID)?;
    let Json(request) = payload?;
    let category =
        CategoryService::update_category(&state.db, category_id, request.validate()?).await?;

    Ok(Json(category.into()))
}

/// Delete a category with its groups and courses
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 400, description = "Invalid category ID format", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let category_id = parse_id(&id, INVALID_CATEGORY_ID)?;
    CategoryService::delete_category(&state.db, category_id).await?;

    Ok(Json(MessageResponse::new("Category successfully deleted")))
}

/// List the categories of a major, looked up by major code
#[utoipa::path(
    get,
    path = "/categories/by-major/{major_code}",
    params(
        ("major_code" = String, Path, description = "Major code")
    ),
    responses(
        (status = 200, description = "Categories of the major, possibly none", body = [CategoryResponse]),
        (status = 400, description = "Major code is required", body = ErrorResponse),
        (status = 404, description = "Major not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_categories_by_major_code(
    State(state): State<AppState>,
    Path(major_code): Path<String>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = CategoryService::get_categories_by_major_code(&state.db, &major_code).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
