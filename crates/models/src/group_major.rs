/// A validated group record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroupMajor {
    pub name: String,
    pub unit: i32,
    /// The category this group belongs to
    pub category_id: i32,
}
