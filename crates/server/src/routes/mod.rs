pub mod category;
pub mod course;
pub mod group_major;
pub mod health;
pub mod major;
pub mod root;

use crate::{doc, state::AppState};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

/// Every catalog route, bound to the shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(doc::openapi_json))
        .route("/majors", get(major::get_majors).post(major::create_major))
        .route(
            "/majors/{id}",
            get(major::get_major_by_id)
                .put(major::update_major)
                .delete(major::delete_major),
        )
        .route("/majors/code/{major_code}", get(major::get_major_by_code))
        .route(
            "/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/categories/{id}",
            get(category::get_category_by_id)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        .route(
            "/categories/by-major/{major_code}",
            get(category::get_categories_by_major_code),
        )
        .route(
            "/groups",
            get(group_major::get_groups).post(group_major::create_group),
        )
        .route(
            "/groups/{id}",
            get(group_major::get_group_by_id)
                .put(group_major::update_group)
                .delete(group_major::delete_group),
        )
        .route(
            "/groups/by-category/{category_id}",
            get(group_major::get_groups_by_category),
        )
        .route("/courses", get(course::get_courses).post(course::create_course))
        .route(
            "/courses/{id}",
            get(course::get_course_by_id)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route(
            "/courses/by-category/{category_id}",
            get(course::get_courses_by_category),
        )
        .route("/courses/by-group/{group_id}", get(course::get_courses_by_group))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
