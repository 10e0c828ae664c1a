use crate::entities::{category, course, group_major};
use sea_orm::{ColumnTrait, Condition, DatabaseTransaction, DbErr, EntityTrait, QueryFilter};

/// Rows removed by a cascading delete, not counting the root row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    pub courses: u64,
    pub groups: u64,
    pub categories: u64,
}

/// Deletes the given categories together with their groups and every course
/// linked to either of them.
///
/// Children go first so no statement trips a foreign key. Callers run this
/// inside their own transaction and commit after removing the root row.
pub(crate) async fn delete_categories(
    txn: &DatabaseTransaction,
    category_ids: Vec<i32>,
) -> Result<CascadeSummary, DbErr> {
    if category_ids.is_empty() {
        return Ok(CascadeSummary::default());
    }

    let group_ids: Vec<i32> = group_major::Entity::find()
        .filter(group_major::Column::CategoryId.is_in(category_ids.clone()))
        .all(txn)
        .await?
        .into_iter()
        .map(|g| g.group_id)
        .collect();

    let mut linked = Condition::any().add(course::Column::CategoryId.is_in(category_ids.clone()));
    if !group_ids.is_empty() {
        linked = linked.add(course::Column::GroupId.is_in(group_ids));
    }

    let courses = course::Entity::delete_many()
        .filter(linked)
        .exec(txn)
        .await?
        .rows_affected;

    let groups = group_major::Entity::delete_many()
        .filter(group_major::Column::CategoryId.is_in(category_ids.clone()))
        .exec(txn)
        .await?
        .rows_affected;

    let categories = category::Entity::delete_many()
        .filter(category::Column::CategoryId.is_in(category_ids))
        .exec(txn)
        .await?
        .rows_affected;

    Ok(CascadeSummary {
        courses,
        groups,
        categories,
    })
}
