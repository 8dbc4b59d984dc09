use strum::{AsRefStr, Display, EnumString};

use crate::{id::*, time::*};

/// A user profile. The `id` is the subject of the identity provider.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id           : Id,
    pub email        : String,
    pub display_name : Option<String>,
    pub role         : Role,
    pub created_at   : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Guest  = 0,
    User   = 1,
    Editor = 2,
}

impl Role {
    pub const fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Guest),
            1 => Some(Self::User),
            2 => Some(Self::Editor),
            _ => None,
        }
    }

    pub const fn to_i16(self) -> i16 {
        self as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_ordered() {
        assert!(Role::Guest < Role::User);
        assert!(Role::User < Role::Editor);
        assert_eq!(Role::default(), Role::Guest);
    }

    #[test]
    fn role_conversions() {
        for role in [Role::Guest, Role::User, Role::Editor] {
            assert_eq!(Role::from_i16(role.to_i16()), Some(role));
            assert_eq!(role.as_ref().parse::<Role>().unwrap(), role);
        }
        assert_eq!(Role::from_i16(3), None);
        assert_eq!(Role::Editor.to_string(), "editor");
    }
}
