use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i32,
    pub category_name: String,
    pub category_unit: i32,
    pub major_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::major::Entity",
        from = "Column::MajorId",
        to = "super::major::Column::MajorId"
    )]
    Major,
    #[sea_orm(has_many = "super::group_major::Entity")]
    GroupMajors,
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
}

impl Related<super::major::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Major.def()
    }
}

impl Related<super::group_major::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupMajors.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
