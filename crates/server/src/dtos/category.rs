use database::entities::category;
use models::{
    category::NewCategory,
    validation::{MissingFields, Required},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of category create and update requests
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub category_name: Option<String>,
    pub category_unit: Option<i32>,
    pub major_id: Option<i32>,
}

impl CategoryRequest {
    pub fn validate(self) -> Result<NewCategory, MissingFields> {
        let mut required = Required::new();
        let category = NewCategory {
            name: required.text("category_name", self.category_name),
            unit: required.value("category_unit", self.category_unit),
            major_id: required.value("major_id", self.major_id),
        };
        required.finish()?;

        Ok(category)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub category_id: i32,
    pub category_name: String,
    pub category_unit: i32,
    pub major_id: i32,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            category_id: model.category_id,
            category_name: model.category_name,
            category_unit: model.category_unit,
            major_id: model.major_id,
        }
    }
}
