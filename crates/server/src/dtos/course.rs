use database::entities::course;
use models::{
    course::{CourseChanges, NewCourse},
    validation::{MissingFields, Required, non_blank},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of course create and update requests.
///
/// `course_id` is only read on create; updates take the code from the path.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CourseRequest {
    pub course_id: Option<String>,
    #[serde(rename = "courseNameTH")]
    pub course_name_th: Option<String>,
    #[serde(rename = "courseNameENG")]
    pub course_name_eng: Option<String>,
    #[serde(rename = "courseUnit")]
    pub course_unit: Option<i32>,
    #[serde(rename = "courseTheory")]
    pub course_theory: Option<i32>,
    #[serde(rename = "coursePractice")]
    pub course_practice: Option<i32>,
    #[serde(rename = "categoryResearch")]
    pub category_research: Option<String>,
    pub category_id: Option<i32>,
    pub group_id: Option<i32>,
    pub freesubject: Option<bool>,
}

impl CourseRequest {
    pub fn validate_create(self) -> Result<NewCourse, MissingFields> {
        let mut required = Required::new();
        let course_id = required.text("course_id", self.course_id.clone());
        let fields = self.collect(&mut required);
        required.finish()?;

        Ok(NewCourse {
            course_id: course_id.trim().to_string(),
            fields,
        })
    }

    pub fn validate_update(self) -> Result<CourseChanges, MissingFields> {
        let mut required = Required::new();
        let fields = self.collect(&mut required);
        required.finish()?;

        Ok(fields)
    }

    fn collect(self, required: &mut Required) -> CourseChanges {
        CourseChanges {
            name_th: required.text("courseNameTH", self.course_name_th),
            name_eng: required.text("courseNameENG", self.course_name_eng),
            unit: required.value("courseUnit", self.course_unit),
            theory: required.value("courseTheory", self.course_theory),
            practice: required.value("coursePractice", self.course_practice),
            category_research: non_blank(self.category_research),
            category_id: self.category_id,
            group_id: self.group_id,
            freesubject: self.freesubject,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub course_id: String,
    #[serde(rename = "courseNameTH")]
    pub course_name_th: String,
    #[serde(rename = "courseNameENG")]
    pub course_name_eng: String,
    #[serde(rename = "courseUnit")]
    pub course_unit: i32,
    #[serde(rename = "courseTheory")]
    pub course_theory: i32,
    #[serde(rename = "coursePractice")]
    pub course_practice: i32,
    #[serde(rename = "categoryResearch")]
    pub category_research: Option<String>,
    pub category_id: Option<i32>,
    pub group_id: Option<i32>,
    pub freesubject: bool,
}

impl From<course::Model> for CourseResponse {
    fn from(model: course::Model) -> Self {
        Self {
            course_id: model.course_id,
            course_name_th: model.course_name_th,
            course_name_eng: model.course_name_eng,
            course_unit: model.course_unit,
            course_theory: model.course_theory,
            course_practice: model.course_practice,
            category_research: model.category_research,
            category_id: model.category_id,
            group_id: model.group_id,
            freesubject: model.freesubject,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn request() -> CourseRequest {
        serde_json::from_value(json!({
            "course_id": "CS101",
            "courseNameTH": "การเขียนโปรแกรมเบื้องต้น",
            "courseNameENG": "Introduction to Programming",
            "courseUnit": 3,
            "courseTheory": 2,
            "coursePractice": 1
        }))
        .unwrap()
    }

    #[test]
    fn test_create_defaults() {
        let course = request().validate_create().unwrap();

        assert_eq!(course.course_id, "CS101");
        assert_eq!(course.fields.category_id, None);
        assert_eq!(course.fields.group_id, None);
        assert!(!course.freesubject());
    }

    #[test]
    fn test_create_requires_course_id() {
        let mut request = request();
        request.course_id = None;

        let err = request.validate_create().unwrap_err();
        assert_eq!(err.fields(), ["course_id"]);
    }

    #[test]
    fn test_update_ignores_course_id() {
        let mut request = request();
        request.course_id = None;
        request.course_practice = Some(0);

        let changes = request.validate_update().unwrap();
        assert_eq!(changes.practice, 0);
    }

    #[test]
    fn test_update_requires_names() {
        let request = CourseRequest {
            course_unit: Some(3),
            course_theory: Some(3),
            course_practice: Some(0),
            ..Default::default()
        };

        let err = request.validate_update().unwrap_err();
        assert_eq!(err.fields(), ["courseNameTH", "courseNameENG"]);
    }
}
