/// A validated major record, used for both create and full overwrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMajor {
    /// Program code, unique across all majors
    pub major_code: String,
    pub name_th: String,
    pub name_eng: String,
    /// Curriculum year
    pub year: i32,
    /// Total credit units required by the program
    pub unit: i32,
    pub status: Option<String>,
}
