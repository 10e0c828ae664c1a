use database::entities::major;
use models::{
    major::NewMajor,
    validation::{MissingFields, Required, non_blank},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of major create and update requests
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MajorRequest {
    pub major_code: Option<String>,
    #[serde(rename = "majorNameTH")]
    pub major_name_th: Option<String>,
    #[serde(rename = "majorNameENG")]
    pub major_name_eng: Option<String>,
    #[serde(rename = "majorYear")]
    pub major_year: Option<i32>,
    #[serde(rename = "majorUnit")]
    pub major_unit: Option<i32>,
    pub status: Option<String>,
}

impl MajorRequest {
    pub fn validate(self) -> Result<NewMajor, MissingFields> {
        let mut required = Required::new();
        let major = NewMajor {
            major_code: required.text("major_code", self.major_code),
            name_th: required.text("majorNameTH", self.major_name_th),
            name_eng: required.text("majorNameENG", self.major_name_eng),
            year: required.value("majorYear", self.major_year),
            unit: required.value("majorUnit", self.major_unit),
            status: non_blank(self.status),
        };
        required.finish()?;

        Ok(major)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MajorResponse {
    pub major_id: i32,
    pub major_code: String,
    #[serde(rename = "majorNameTH")]
    pub major_name_th: String,
    #[serde(rename = "majorNameENG")]
    pub major_name_eng: String,
    #[serde(rename = "majorYear")]
    pub major_year: i32,
    #[serde(rename = "majorUnit")]
    pub major_unit: i32,
    pub status: Option<String>,
}

impl From<major::Model> for MajorResponse {
    fn from(model: major::Model) -> Self {
        Self {
            major_id: model.major_id,
            major_code: model.major_code,
            major_name_th: model.major_name_th,
            major_name_eng: model.major_name_eng,
            major_year: model.major_year,
            major_unit: model.major_unit,
            status: model.status,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_uses_wire_names() {
        let request: MajorRequest = serde_json::from_value(json!({
            "major_code": "CS",
            "majorNameTH": "วิทยาการคอมพิวเตอร์",
            "majorNameENG": "Computer Science",
            "majorYear": 2567,
            "majorUnit": 128
        }))
        .unwrap();

        let major = request.validate().unwrap();
        assert_eq!(major.major_code, "CS");
        assert_eq!(major.year, 2567);
        assert_eq!(major.status, None);
    }

    #[test]
    fn test_validate_lists_missing_fields() {
        let request = MajorRequest {
            major_code: Some("CS".to_string()),
            major_name_eng: Some(String::new()),
            ..Default::default()
        };

        let err = request.validate().unwrap_err();
        assert_eq!(
            err.fields(),
            ["majorNameTH", "majorNameENG", "majorYear", "majorUnit"]
        );
    }
}
