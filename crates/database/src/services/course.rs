use super::{category::CategoryService, group_major::GroupMajorService};
use crate::{entities::course, error::ServiceError};
use models::course::{CourseChanges, NewCourse};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

const COURSE_EXISTS: &str = "Course with this ID already exists";
const COURSE_NOT_FOUND: &str = "Course not found";

pub struct CourseService;

impl CourseService {
    pub async fn create_course(
        db: &DatabaseConnection,
        new_course: NewCourse,
    ) -> Result<course::Model, ServiceError> {
        if course::Entity::find_by_id(new_course.course_id.as_str())
            .one(db)
            .await?
            .is_some()
        {
            log::warn!("Rejected duplicate course {}", new_course.course_id);
            return Err(ServiceError::Conflict(COURSE_EXISTS.to_string()));
        }

        Self::ensure_links(db, &new_course.fields).await?;

        let freesubject = new_course.freesubject();
        let mut active = Self::to_active_model(new_course.fields);
        active.course_id = Set(new_course.course_id);
        active.freesubject = Set(freesubject);

        let created = active
            .insert(db)
            .await
            .map_err(|e| ServiceError::from_write(e, COURSE_EXISTS))?;

        log::info!("Created course {}", created.course_id);
        Ok(created)
    }

    /// All courses by code; none at all is reported as not found
    pub async fn get_courses(db: &DatabaseConnection) -> Result<Vec<course::Model>, ServiceError> {
        let courses = course::Entity::find()
            .order_by_asc(course::Column::CourseId)
            .all(db)
            .await?;

        if courses.is_empty() {
            return Err(ServiceError::NotFound("No courses found".to_string()));
        }

        Ok(courses)
    }

    pub async fn get_course_by_id(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<course::Model, ServiceError> {
        course::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(COURSE_NOT_FOUND.to_string()))
    }

    /// Replaces a course's fields. Links that are not supplied are cleared.
    pub async fn update_course(
        db: &DatabaseConnection,
        course_id: &str,
        changes: CourseChanges,
    ) -> Result<course::Model, ServiceError> {
        Self::get_course_by_id(db, course_id).await?;
        Self::ensure_links(db, &changes).await?;

        let mut active = Self::to_active_model(changes);
        active.course_id = Set(course_id.to_string());

        let updated = active
            .update(db)
            .await
            .map_err(|e| ServiceError::from_write(e, COURSE_EXISTS))?;

        log::info!("Updated course {course_id}");
        Ok(updated)
    }

    pub async fn delete_course(db: &DatabaseConnection, course_id: &str) -> Result<(), ServiceError> {
        Self::get_course_by_id(db, course_id).await?;

        let result = course::Entity::delete_by_id(course_id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(COURSE_NOT_FOUND.to_string()));
        }

        log::info!("Deleted course {course_id}");
        Ok(())
    }

    /// Courses filed directly under a category; the category itself is not checked
    pub async fn get_courses_by_category(
        db: &DatabaseConnection,
        category_id: i32,
    ) -> Result<Vec<course::Model>, ServiceError> {
        log::debug!("Listing courses of category {category_id}");
        Ok(course::Entity::find()
            .filter(course::Column::CategoryId.eq(category_id))
            .order_by_asc(course::Column::CourseId)
            .all(db)
            .await?)
    }

    /// Courses filed under a group; the group itself is not checked
    pub async fn get_courses_by_group(
        db: &DatabaseConnection,
        group_id: i32,
    ) -> Result<Vec<course::Model>, ServiceError> {
        log::debug!("Listing courses of group {group_id}");
        Ok(course::Entity::find()
            .filter(course::Column::GroupId.eq(group_id))
            .order_by_asc(course::Column::CourseId)
            .all(db)
            .await?)
    }

    async fn ensure_links(db: &DatabaseConnection, fields: &CourseChanges) -> Result<(), ServiceError> {
        if let Some(category_id) = fields.category_id {
            CategoryService::ensure_exists(db, category_id).await?;
        }
        if let Some(group_id) = fields.group_id {
            GroupMajorService::ensure_exists(db, group_id).await?;
        }
        Ok(())
    }

    fn to_active_model(fields: CourseChanges) -> course::ActiveModel {
        course::ActiveModel {
            course_id: NotSet,
            course_name_th: Set(fields.name_th),
            course_name_eng: Set(fields.name_eng),
            course_unit: Set(fields.unit),
            course_theory: Set(fields.theory),
            course_practice: Set(fields.practice),
            category_research: Set(fields.category_research),
            category_id: Set(fields.category_id),
            group_id: Set(fields.group_id),
            freesubject: match fields.freesubject {
                Some(freesubject) => Set(freesubject),
                None => NotSet,
            },
        }
    }
}
