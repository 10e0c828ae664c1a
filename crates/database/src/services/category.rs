use super::{
    cascade::{self, CascadeSummary},
    major::MajorService,
};
use crate::{entities::category, error::ServiceError};
use models::category::NewCategory;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

const CATEGORY_EXISTS: &str = "Category with this ID already exists";
const CATEGORY_NOT_FOUND: &str = "Category not found";

pub struct CategoryService;

impl CategoryService {
    pub async fn create_category(
        db: &DatabaseConnection,
        new_category: NewCategory,
    ) -> Result<category::Model, ServiceError> {
        MajorService::ensure_exists(db, new_category.major_id).await?;

        let created = Self::to_active_model(new_category)
            .insert(db)
            .await
            .map_err(|e| ServiceError::from_write(e, CATEGORY_EXISTS))?;

        log::info!(
            "Created category {} under major {}",
            created.category_id,
            created.major_id
        );
        Ok(created)
    }

    /// All categories by id, possibly none
    pub async fn get_categories(
        db: &DatabaseConnection,
    ) -> Result<Vec<category::Model>, ServiceError> {
        Ok(category::Entity::find()
            .order_by_asc(category::Column::CategoryId)
            .all(db)
            .await?)
    }

    pub async fn get_category_by_id(
        db: &DatabaseConnection,
        category_id: i32,
    ) -> Result<category::Model, ServiceError> {
        category::Entity::find_by_id(category_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(CATEGORY_NOT_FOUND.to_string()))
    }

    pub async fn update_category(
        db: &DatabaseConnection,
        category_id: i32,
        new_category: NewCategory,
    ) -> Result<category::Model, ServiceError> {
        Self::get_category_by_id(db, category_id).await?;
        MajorService::ensure_exists(db, new_category.major_id).await?;

        let mut active = Self::to_active_model(new_category);
        active.category_id = Set(category_id);

        let updated = active
            .update(db)
            .await
            .map_err(|e| ServiceError::from_write(e, CATEGORY_EXISTS))?;

        log::info!("Updated category {category_id}");
        Ok(updated)
    }

    /// Deletes a category with its groups and linked courses in one transaction
    pub async fn delete_category(
        db: &DatabaseConnection,
        category_id: i32,
    ) -> Result<CascadeSummary, ServiceError> {
        let txn = db.begin().await?;

        if category::Entity::find_by_id(category_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(ServiceError::NotFound(CATEGORY_NOT_FOUND.to_string()));
        }

        let summary = cascade::delete_categories(&txn, vec![category_id]).await?;
        txn.commit().await?;

        log::info!(
            "Deleted category {category_id} with {} groups and {} courses",
            summary.groups,
            summary.courses
        );
        Ok(summary)
    }

    /// Categories of the major with the given code
    pub async fn get_categories_by_major_code(
        db: &DatabaseConnection,
        major_code: &str,
    ) -> Result<Vec<category::Model>, ServiceError> {
        if major_code.trim().is_empty() {
            return Err(ServiceError::Validation("Major Code is required".to_string()));
        }

        let major = MajorService::get_major_by_code(db, major_code).await?;

        Ok(category::Entity::find()
            .filter(category::Column::MajorId.eq(major.major_id))
            .order_by_asc(category::Column::CategoryId)
            .all(db)
            .await?)
    }

    /// Fails with a validation error when a payload points at a missing category
    pub(crate) async fn ensure_exists(
        db: &DatabaseConnection,
        category_id: i32,
    ) -> Result<(), ServiceError> {
        match category::Entity::find_by_id(category_id).one(db).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::Validation(
                "Invalid category_id: No matching category found".to_string(),
            )),
        }
    }

    fn to_active_model(new_category: NewCategory) -> category::ActiveModel {
        category::ActiveModel {
            category_id: NotSet,
            category_name: Set(new_category.name),
            category_unit: Set(new_category.unit),
            major_id: Set(new_category.major_id),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        entities::{group_major, major},
        services::fixtures::{
            affected, assert_select, category_row, executed_sql, group_row, major_row,
        },
    };
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn new_category(major_id: i32) -> NewCategory {
        NewCategory {
            name: "General Education".to_string(),
            unit: 30,
            major_id,
        }
    }

    #[tokio::test]
    async fn test_create_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major_row(1, "CS")]])
            .append_query_results([vec![category_row(10, 1)]])
            .into_connection();

        let created = CategoryService::create_category(&db, new_category(1))
            .await
            .unwrap();
        assert_eq!(created, category_row(10, 1));
    }

    #[tokio::test]
    async fn test_create_category_unknown_major() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<major::Model>::new()])
            .into_connection();

        let result = CategoryService::create_category(&db, new_category(42)).await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(msg)) if msg == "Invalid major_id: No matching major found"
        ));
    }

    #[tokio::test]
    async fn test_get_categories_empty_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<category::Model>::new()])
            .into_connection();

        let categories = CategoryService::get_categories(&db).await.unwrap();
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<category::Model>::new()])
            .into_connection();

        let result = CategoryService::update_category(&db, 7, new_category(1)).await;
        assert!(matches!(result, Err(ServiceError::NotFound(msg)) if msg == CATEGORY_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_category_unknown_major() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![category_row(10, 1)]])
            .append_query_results([Vec::<major::Model>::new()])
            .into_connection();

        let result = CategoryService::update_category(&db, 10, new_category(2)).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_category_cascades() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![category_row(10, 1)]])
            .append_query_results([vec![group_row(100, 10), group_row(101, 10)]])
            .append_exec_results([affected(5), affected(2), affected(1)])
            .into_connection();

        let summary = CategoryService::delete_category(&db, 10).await.unwrap();
        assert_eq!(
            summary,
            CascadeSummary {
                courses: 5,
                groups: 2,
                categories: 1,
            }
        );

        // Courses filed directly under the category go too, not only those in its groups
        let sql = executed_sql(db);
        assert_eq!(sql.len(), 7, "{sql:#?}");
        assert_eq!(sql[0], "BEGIN");
        assert_select(&sql[1], "category");
        assert_select(&sql[2], "group_major");
        assert_eq!(
            sql[3],
            r#"DELETE FROM "course" WHERE "course"."category_id" IN ($1) OR "course"."group_id" IN ($2, $3)"#
        );
        assert_eq!(
            sql[4],
            r#"DELETE FROM "group_major" WHERE "group_major"."category_id" IN ($1)"#
        );
        assert_eq!(
            sql[5],
            r#"DELETE FROM "category" WHERE "category"."category_id" IN ($1)"#
        );
        assert_eq!(sql[6], "COMMIT");
    }

    #[tokio::test]
    async fn test_delete_category_failure_rolls_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![category_row(10, 1)]])
            .append_query_results([vec![group_row(100, 10)]])
            .append_exec_results([affected(3), affected(1)])
            .append_exec_errors([sea_orm::DbErr::Custom("lost connection".to_string())])
            .into_connection();

        let result = CategoryService::delete_category(&db, 10).await;
        assert!(matches!(result, Err(ServiceError::Database(_))));

        let sql = executed_sql(db);
        assert!(sql[5].starts_with(r#"DELETE FROM "category""#), "{sql:#?}");
        assert_eq!(sql.last().map(String::as_str), Some("ROLLBACK"));
        assert!(!sql.iter().any(|stmt| stmt == "COMMIT"));
    }

    #[tokio::test]
    async fn test_delete_category_without_groups() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![category_row(10, 1)]])
            .append_query_results([Vec::<group_major::Model>::new()])
            .append_exec_results([affected(0), affected(0), affected(1)])
            .into_connection();

        let summary = CategoryService::delete_category(&db, 10).await.unwrap();
        assert_eq!(summary.categories, 1);
        assert_eq!(summary.groups, 0);
    }

    #[tokio::test]
    async fn test_categories_by_unknown_major_code() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<major::Model>::new()])
            .into_connection();

        let result = CategoryService::get_categories_by_major_code(&db, "NOPE").await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_categories_by_major_code_without_categories() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major_row(1, "CS")]])
            .append_query_results([Vec::<category::Model>::new()])
            .into_connection();

        let categories = CategoryService::get_categories_by_major_code(&db, "CS")
            .await
            .unwrap();
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_categories_by_blank_major_code() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = CategoryService::get_categories_by_major_code(&db, "  ").await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
