use database::entities::group_major;
use models::{
    group_major::NewGroupMajor,
    validation::{MissingFields, Required},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of group create and update requests
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GroupMajorRequest {
    pub group_name: Option<String>,
    pub group_unit: Option<i32>,
    pub category_id: Option<i32>,
}

impl GroupMajorRequest {
    pub fn validate(self) -> Result<NewGroupMajor, MissingFields> {
        let mut required = Required::new();
        let group = NewGroupMajor {
            name: required.text("group_name", self.group_name),
            unit: required.value("group_unit", self.group_unit),
            category_id: required.value("category_id", self.category_id),
        };
        required.finish()?;

        Ok(group)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GroupMajorResponse {
    pub group_id: i32,
    pub group_name: String,
    pub group_unit: i32,
    pub category_id: i32,
}

impl From<group_major::Model> for GroupMajorResponse {
    fn from(model: group_major::Model) -> Self {
        Self {
            group_id: model.group_id,
            group_name: model.group_name,
            group_unit: model.group_unit,
            category_id: model.category_id,
        }
    }
}
