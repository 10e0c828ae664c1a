use crate::routes::{category, course, group_major, health, major, root};
use axum::Json;
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        major::create_major,
        major::get_majors,
        major::get_major_by_code,
        major::get_major_by_id,
        major::update_major,
        major::delete_major,
        category::create_category,
        category::get_categories,
        category::get_category_by_id,
        category::update_category,
        category::delete_category,
        category::get_categories_by_major_code,
        group_major::create_group,
        group_major::get_groups,
        group_major::get_group_by_id,
        group_major::update_group,
        group_major::delete_group,
        group_major::get_groups_by_category,
        course::create_course,
        course::get_courses,
        course::get_course_by_id,
        course::update_course,
        course::delete_course,
        course::get_courses_by_category,
        course::get_courses_by_group
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Majors", description = "Academic programs"),
        (name = "Categories", description = "Requirement categories of a major"),
        (name = "Groups", description = "Course groups within a category"),
        (name = "Courses", description = "Curriculum courses"),
    ),
    info(
        title = "Curriculum Catalog API",
        version = "1.0.0",
        description = "Majors, categories, groups and courses of an academic curriculum",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
