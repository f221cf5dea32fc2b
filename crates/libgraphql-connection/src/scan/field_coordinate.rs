/// Identifies a single field declaration by its parent type's name and its
/// own name (`User.posts`).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldCoordinate {
    pub type_name: String,
    pub field_name: String,
}
impl FieldCoordinate {
    pub fn new(
        type_name: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
        }
    }
}
impl std::fmt::Display for FieldCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)
    }
}
