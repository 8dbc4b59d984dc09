use std::{borrow::Borrow, fmt};

use uuid::Uuid;

/// Opaque identifier of locations and users.
///
/// Locations get random ids, users keep the subject of the
/// identity provider.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(String);

impl Id {
    /// A random id (UUID v4 without hyphens).
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Id {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Id {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<Id> for String {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
