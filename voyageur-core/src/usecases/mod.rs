mod authorize;
mod change_user_role;
mod create_location;
mod delete_location;
mod error;
mod load_locations;
mod rate_location;
mod register_user;
mod update_location;
mod user_lists;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, change_user_role::*, create_location::*, delete_location::*, error::Error,
    load_locations::*, rate_location::*, register_user::*, update_location::*, user_lists::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::{
            activity::*, geo::*, id::*, location::*, rating::*, tag::*, time::*, user::*,
            user_list::*,
        },
        repositories::*,
    };
}
