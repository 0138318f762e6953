//! Tag entity.

/// A label attached to articles through the `article_tags` join table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}
