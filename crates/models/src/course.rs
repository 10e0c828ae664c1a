/// A validated course to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    /// Opaque course code, e.g. "CS101"
    pub course_id: String,
    pub fields: CourseChanges,
}

/// The overwritable part of a course.
///
/// Updates replace every field: absent links and research notes become null.
/// `freesubject` is the exception and is left alone when not supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseChanges {
    pub name_th: String,
    pub name_eng: String,
    pub unit: i32,
    /// Lecture hours
    pub theory: i32,
    /// Lab hours
    pub practice: i32,
    pub category_research: Option<String>,
    pub category_id: Option<i32>,
    pub group_id: Option<i32>,
    pub freesubject: Option<bool>,
}

impl NewCourse {
    /// Free electives are opt-in
    pub fn freesubject(&self) -> bool {
        self.fields.freesubject.unwrap_or(false)
    }
}
