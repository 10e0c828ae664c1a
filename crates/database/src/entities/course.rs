use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
    // Course codes are supplied by the caller, e.g. "CS101"
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    pub course_name_th: String,
    pub course_name_eng: String,
    pub course_unit: i32,
    pub course_theory: i32,
    pub course_practice: i32,
    pub category_research: Option<String>,
    pub category_id: Option<i32>,
    pub group_id: Option<i32>,
    pub freesubject: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::CategoryId"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::group_major::Entity",
        from = "Column::GroupId",
        to = "super::group_major::Column::GroupId"
    )]
    GroupMajor,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::group_major::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupMajor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
