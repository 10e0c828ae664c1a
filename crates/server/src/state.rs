use database::services::major::MajorDeletePolicy;
use sea_orm::DatabaseConnection;

/// Shared by every handler through axum's `State` extractor
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub major_delete_policy: MajorDeletePolicy,
}

impl AppState {
    pub fn new(db: DatabaseConnection, major_delete_policy: MajorDeletePolicy) -> Self {
        Self {
            db,
            major_delete_policy,
        }
    }
}
