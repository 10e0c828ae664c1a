use super::category::CategoryService;
use crate::{
    entities::{course, group_major},
    error::ServiceError,
};
use models::group_major::NewGroupMajor;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

const GROUP_EXISTS: &str = "Group Major with this ID already exists";
const GROUP_NOT_FOUND: &str = "Group Major not found";

pub struct GroupMajorService;

impl GroupMajorService {
    pub async fn create_group(
        db: &DatabaseConnection,
        new_group: NewGroupMajor,
    ) -> Result<group_major::Model, ServiceError> {
        CategoryService::ensure_exists(db, new_group.category_id).await?;

        let created = Self::to_active_model(new_group)
            .insert(db)
            .await
            .map_err(|e| ServiceError::from_write(e, GROUP_EXISTS))?;

        log::info!(
            "Created group {} under category {}",
            created.group_id,
            created.category_id
        );
        Ok(created)
    }

    /// All groups by id; none at all is reported as not found
    pub async fn get_groups(
        db: &DatabaseConnection,
    ) -> Result<Vec<group_major::Model>, ServiceError> {
        let groups = group_major::Entity::find()
            .order_by_asc(group_major::Column::GroupId)
            .all(db)
            .await?;

        if groups.is_empty() {
            return Err(ServiceError::NotFound("No Group Majors found".to_string()));
        }

        Ok(groups)
    }

    pub async fn get_group_by_id(
        db: &DatabaseConnection,
        group_id: i32,
    ) -> Result<group_major::Model, ServiceError> {
        group_major::Entity::find_by_id(group_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(GROUP_NOT_FOUND.to_string()))
    }

    pub async fn update_group(
        db: &DatabaseConnection,
        group_id: i32,
        new_group: NewGroupMajor,
    ) -> Result<group_major::Model, ServiceError> {
        Self::get_group_by_id(db, group_id).await?;
        CategoryService::ensure_exists(db, new_group.category_id).await?;

        let mut active = Self::to_active_model(new_group);
        active.group_id = Set(group_id);

        let updated = active
            .update(db)
            .await
            .map_err(|e| ServiceError::from_write(e, GROUP_EXISTS))?;

        log::info!("Updated group {group_id}");
        Ok(updated)
    }

    /// Deletes a group and the courses linked to it; returns the number of courses removed
    pub async fn delete_group(db: &DatabaseConnection, group_id: i32) -> Result<u64, ServiceError> {
        let txn = db.begin().await?;

        if group_major::Entity::find_by_id(group_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(ServiceError::NotFound(GROUP_NOT_FOUND.to_string()));
        }

        let courses = course::Entity::delete_many()
            .filter(course::Column::GroupId.eq(group_id))
            .exec(&txn)
            .await?
            .rows_affected;

        group_major::Entity::delete_by_id(group_id).exec(&txn).await?;
        txn.commit().await?;

        log::info!("Deleted group {group_id} with {courses} courses");
        Ok(courses)
    }

    /// Groups filed under a category; the category itself is not checked
    pub async fn get_groups_by_category(
        db: &DatabaseConnection,
        category_id: i32,
    ) -> Result<Vec<group_major::Model>, ServiceError> {
        log::debug!("Listing groups of category {category_id}");
        Ok(group_major::Entity::find()
            .filter(group_major::Column::CategoryId.eq(category_id))
            .order_by_asc(group_major::Column::GroupId)
            .all(db)
            .await?)
    }

    /// Fails with a validation error when a payload points at a missing group
    pub(crate) async fn ensure_exists(
        db: &DatabaseConnection,
        group_id: i32,
    ) -> Result<(), ServiceError> {
        match group_major::Entity::find_by_id(group_id).one(db).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::Validation(
                "Invalid group_id: No matching group found".to_string(),
            )),
        }
    }

    fn to_active_model(new_group: NewGroupMajor) -> group_major::ActiveModel {
        group_major::ActiveModel {
            group_id: NotSet,
            group_name: Set(new_group.name),
            group_unit: Set(new_group.unit),
            category_id: Set(new_group.category_id),
        }
    }
}
