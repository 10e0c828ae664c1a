/// A validated category record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub unit: i32,
    /// The major this category belongs to
    pub major_id: i32,
}
