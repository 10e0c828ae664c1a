use super::cascade::{self, CascadeSummary};
use crate::{
    entities::{category, major},
    error::ServiceError,
};
use models::major::NewMajor;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

const MAJOR_CODE_TAKEN: &str = "Major code already exists";
const MAJOR_NOT_FOUND: &str = "Major not found";

/// What deleting a major without any categories should do
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MajorDeletePolicy {
    /// Delete it as an empty cascade
    #[default]
    AllowEmpty,
    /// Refuse with "not found" and leave the major in place
    RequireCategories,
}

pub struct MajorService;

impl MajorService {
    pub async fn create_major(
        db: &DatabaseConnection,
        new_major: NewMajor,
    ) -> Result<major::Model, ServiceError> {
        if Self::find_by_code(db, &new_major.major_code).await?.is_some() {
            log::warn!("Rejected duplicate major code {}", new_major.major_code);
            return Err(ServiceError::Conflict(MAJOR_CODE_TAKEN.to_string()));
        }

        let created = Self::to_active_model(new_major)
            .insert(db)
            .await
            .map_err(|e| ServiceError::from_write(e, MAJOR_CODE_TAKEN))?;

        log::info!("Created major {} ({})", created.major_id, created.major_code);
        Ok(created)
    }

    /// All majors by id; an empty catalog is reported as not found
    pub async fn get_majors(db: &DatabaseConnection) -> Result<Vec<major::Model>, ServiceError> {
        let majors = major::Entity::find()
            .order_by_asc(major::Column::MajorId)
            .all(db)
            .await?;

        if majors.is_empty() {
            return Err(ServiceError::NotFound("No majors found".to_string()));
        }

        Ok(majors)
    }

    pub async fn get_major_by_code(
        db: &DatabaseConnection,
        major_code: &str,
    ) -> Result<major::Model, ServiceError> {
        Self::find_by_code(db, major_code)
            .await?
            .ok_or_else(|| ServiceError::NotFound(MAJOR_NOT_FOUND.to_string()))
    }

    pub async fn get_major_by_id(
        db: &DatabaseConnection,
        major_id: i32,
    ) -> Result<major::Model, ServiceError> {
        major::Entity::find_by_id(major_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(MAJOR_NOT_FOUND.to_string()))
    }

    /// Overwrites every field of an existing major
    pub async fn update_major(
        db: &DatabaseConnection,
        major_id: i32,
        new_major: NewMajor,
    ) -> Result<major::Model, ServiceError> {
        Self::get_major_by_id(db, major_id).await?;

        if let Some(other) = Self::find_by_code(db, &new_major.major_code).await?
            && other.major_id != major_id
        {
            log::warn!(
                "Rejected code change of major {major_id}: {} belongs to major {}",
                other.major_code,
                other.major_id
            );
            return Err(ServiceError::Conflict(MAJOR_CODE_TAKEN.to_string()));
        }

        let mut active = Self::to_active_model(new_major);
        active.major_id = Set(major_id);

        let updated = active
            .update(db)
            .await
            .map_err(|e| ServiceError::from_write(e, MAJOR_CODE_TAKEN))?;

        log::info!("Updated major {major_id}");
        Ok(updated)
    }

    /// Deletes a major with its categories, their groups and all linked courses
    /// in one transaction
    pub async fn delete_major(
        db: &DatabaseConnection,
        major_id: i32,
        policy: MajorDeletePolicy,
    ) -> Result<CascadeSummary, ServiceError> {
        let txn = db.begin().await?;

        if major::Entity::find_by_id(major_id).one(&txn).await?.is_none() {
            return Err(ServiceError::NotFound(MAJOR_NOT_FOUND.to_string()));
        }

        let category_ids: Vec<i32> = category::Entity::find()
            .filter(category::Column::MajorId.eq(major_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|c| c.category_id)
            .collect();

        if category_ids.is_empty() && policy == MajorDeletePolicy::RequireCategories {
            return Err(ServiceError::NotFound(
                "No categories found related to this major".to_string(),
            ));
        }

        let summary = cascade::delete_categories(&txn, category_ids).await?;
        major::Entity::delete_by_id(major_id).exec(&txn).await?;
        txn.commit().await?;

        log::info!(
            "Deleted major {major_id} with {} categories, {} groups and {} courses",
            summary.categories,
            summary.groups,
            summary.courses
        );
        Ok(summary)
    }

    /// Fails with a validation error when a payload points at a missing major
    pub(crate) async fn ensure_exists(
        db: &DatabaseConnection,
        major_id: i32,
    ) -> Result<(), ServiceError> {
        match major::Entity::find_by_id(major_id).one(db).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::Validation(
                "Invalid major_id: No matching major found".to_string(),
            )),
        }
    }

    async fn find_by_code(
        db: &DatabaseConnection,
        major_code: &str,
    ) -> Result<Option<major::Model>, ServiceError> {
        log::debug!("Looking up major by code {major_code}");
        Ok(major::Entity::find()
            .filter(major::Column::MajorCode.eq(major_code))
            .one(db)
            .await?)
    }

    fn to_active_model(new_major: NewMajor) -> major::ActiveModel {
        major::ActiveModel {
            major_id: NotSet,
            major_code: Set(new_major.major_code),
            major_name_th: Set(new_major.name_th),
            major_name_eng: Set(new_major.name_eng),
            major_year: Set(new_major.year),
            major_unit: Set(new_major.unit),
            status: Set(new_major.status),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        entities::group_major,
        services::fixtures::{
            affected, assert_select, category_row, executed_sql, group_row, major_row,
        },
    };
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn new_major(code: &str) -> NewMajor {
        NewMajor {
            major_code: code.to_string(),
            name_th: "วิทยาการคอมพิวเตอร์".to_string(),
            name_eng: "Computer Science".to_string(),
            year: 2567,
            unit: 128,
            status: Some("active".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_major() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<major::Model>::new()])
            .append_query_results([vec![major_row(1, "CS")]])
            .into_connection();

        let created = MajorService::create_major(&db, new_major("CS")).await.unwrap();
        assert_eq!(created, major_row(1, "CS"));
    }

    #[tokio::test]
    async fn test_create_major_duplicate_code() {
        // Only the lookup is queued: an insert attempt would fail with a database error
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major_row(1, "CS")]])
            .into_connection();

        let result = MajorService::create_major(&db, new_major("CS")).await;
        assert!(matches!(result, Err(ServiceError::Conflict(msg)) if msg == MAJOR_CODE_TAKEN));
    }

    #[tokio::test]
    async fn test_get_majors_empty_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<major::Model>::new()])
            .into_connection();

        let result = MajorService::get_majors(&db).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_major_by_code_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<major::Model>::new()])
            .into_connection();

        let result = MajorService::get_major_by_code(&db, "NOPE").await;
        assert!(matches!(result, Err(ServiceError::NotFound(msg)) if msg == MAJOR_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_major_keeps_own_code() {
        let mut renamed = major_row(1, "CS");
        renamed.major_name_eng = "Computing".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major_row(1, "CS")]])
            .append_query_results([vec![major_row(1, "CS")]])
            .append_query_results([vec![renamed.clone()]])
            .into_connection();

        let mut changes = new_major("CS");
        changes.name_eng = "Computing".to_string();

        let updated = MajorService::update_major(&db, 1, changes).await.unwrap();
        assert_eq!(updated, renamed);
    }

    #[tokio::test]
    async fn test_update_major_code_collision() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major_row(1, "CS")]])
            .append_query_results([vec![major_row(2, "SE")]])
            .into_connection();

        let result = MajorService::update_major(&db, 1, new_major("SE")).await;
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_major_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<major::Model>::new()])
            .into_connection();

        let result = MajorService::update_major(&db, 9, new_major("CS")).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_major_cascades() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major_row(1, "CS")]])
            .append_query_results([vec![category_row(10, 1), category_row(11, 1)]])
            .append_query_results([vec![group_row(100, 10)]])
            .append_exec_results([affected(4), affected(1), affected(2), affected(1)])
            .into_connection();

        let summary = MajorService::delete_major(&db, 1, MajorDeletePolicy::AllowEmpty)
            .await
            .unwrap();

        assert_eq!(
            summary,
            CascadeSummary {
                courses: 4,
                groups: 1,
                categories: 2,
            }
        );

        let sql = executed_sql(db);
        assert_eq!(sql.len(), 9, "{sql:#?}");
        assert_eq!(sql[0], "BEGIN");
        assert_select(&sql[1], "major");
        assert_select(&sql[2], "category");
        assert_select(&sql[3], "group_major");
        assert_eq!(
            sql[4],
            r#"DELETE FROM "course" WHERE "course"."category_id" IN ($1, $2) OR "course"."group_id" IN ($3)"#
        );
        assert_eq!(
            sql[5],
            r#"DELETE FROM "group_major" WHERE "group_major"."category_id" IN ($1, $2)"#
        );
        assert_eq!(
            sql[6],
            r#"DELETE FROM "category" WHERE "category"."category_id" IN ($1, $2)"#
        );
        assert_eq!(sql[7], r#"DELETE FROM "major" WHERE "major"."major_id" = $1"#);
        assert_eq!(sql[8], "COMMIT");
    }

    #[tokio::test]
    async fn test_delete_major_without_categories_allowed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major_row(1, "CS")]])
            .append_query_results([Vec::<category::Model>::new()])
            .append_exec_results([affected(1)])
            .into_connection();

        let summary = MajorService::delete_major(&db, 1, MajorDeletePolicy::AllowEmpty)
            .await
            .unwrap();
        assert_eq!(summary, CascadeSummary::default());

        let sql = executed_sql(db);
        let deletes: Vec<&str> = sql
            .iter()
            .map(String::as_str)
            .filter(|stmt| stmt.starts_with("DELETE"))
            .collect();
        assert_eq!(deletes, [r#"DELETE FROM "major" WHERE "major"."major_id" = $1"#]);
        assert_eq!(sql.last().map(String::as_str), Some("COMMIT"));
    }

    #[tokio::test]
    async fn test_delete_major_without_categories_required() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major_row(1, "CS")]])
            .append_query_results([Vec::<category::Model>::new()])
            .into_connection();

        let result = MajorService::delete_major(&db, 1, MajorDeletePolicy::RequireCategories).await;
        assert!(matches!(
            result,
            Err(ServiceError::NotFound(msg)) if msg == "No categories found related to this major"
        ));

        // Nothing was deleted and the transaction was abandoned
        let sql = executed_sql(db);
        assert!(sql.iter().all(|stmt| !stmt.starts_with("DELETE")), "{sql:#?}");
        assert_eq!(sql.last().map(String::as_str), Some("ROLLBACK"));
    }

    #[tokio::test]
    async fn test_delete_major_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<major::Model>::new()])
            .into_connection();

        let result = MajorService::delete_major(&db, 1, MajorDeletePolicy::AllowEmpty).await;
        assert!(matches!(result, Err(ServiceError::NotFound(msg)) if msg == MAJOR_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_delete_major_failure_rolls_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major_row(1, "CS")]])
            .append_query_results([vec![category_row(10, 1)]])
            .append_query_results([Vec::<group_major::Model>::new()])
            .append_exec_results([affected(2)])
            .append_exec_errors([sea_orm::DbErr::Custom("lost connection".to_string())])
            .into_connection();

        let result = MajorService::delete_major(&db, 1, MajorDeletePolicy::AllowEmpty).await;
        assert!(matches!(result, Err(ServiceError::Database(_))));

        // The course delete already ran, so only a rollback keeps the catalog intact
        let sql = executed_sql(db);
        assert_eq!(sql.first().map(String::as_str), Some("BEGIN"));
        assert!(sql[4].starts_with(r#"DELETE FROM "course""#), "{sql:#?}");
        assert!(sql[5].starts_with(r#"DELETE FROM "group_major""#), "{sql:#?}");
        assert_eq!(sql.last().map(String::as_str), Some("ROLLBACK"));
        assert!(!sql.iter().any(|stmt| stmt == "COMMIT"));
        assert!(!sql.iter().any(|stmt| stmt.starts_with(r#"DELETE FROM "major""#)));
    }
}
