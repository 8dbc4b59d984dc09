/// A normalized (lowercase, without `#`) tag.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag {
    pub id: String,
}

impl From<String> for Tag {
    fn from(id: String) -> Self {
        Self { id }
    }
}

impl From<Tag> for String {
    fn from(from: Tag) -> Self {
        from.id
    }
}
