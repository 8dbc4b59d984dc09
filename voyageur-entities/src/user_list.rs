use strum::{AsRefStr, Display, EnumString};

use crate::{id::*, time::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum UserListKind {
    Favorite,
    WantToGo,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListEntry {
    pub user_id     : Id,
    pub location_id : Id,
    pub list        : UserListKind,
    pub created_at  : Timestamp,
}
