use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "major")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub major_id: i32,
    #[sea_orm(unique)]
    pub major_code: String,
    pub major_name_th: String,
    pub major_name_eng: String,
    pub major_year: i32,
    pub major_unit: i32,
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::category::Entity")]
    Categories,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
