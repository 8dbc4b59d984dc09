// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use voyageur_core::{
    entities::{
        geo::*, id::*, location::*, rating::*, tag::*, time::*, user::*, user_list::*, activity::*,
    },
    repositories::{self as repo, *},
};

use super::{models, schema, DbConnection, DbReadOnly, DbReadWrite};

mod location;
mod rating;
mod tag;
mod user;
mod user_list;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

/// Fails with [`repo::Error::NotFound`] if no row has been affected.
fn expect_affected(count: usize) -> Result<()> {
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

// Shared connections must not be used for writing.
macro_rules! write_access {
    (read_write, $call:expr) => {
        $call
    };
    (read_only, $call:expr) => {
        Err(repo::Error::Other(anyhow::anyhow!(
            "Write access on a read-only connection"
        )))
    };
}

macro_rules! impl_repos {
    ($db:ty, $access:ident) => {
        #[allow(unused_variables)]
        impl LocationRepo for $db {
            fn create_location(&self, l: Location) -> Result<()> {
                write_access!($access, location::create_location(&mut self.conn.borrow_mut(), &l))
            }
            fn update_location(&self, l: &Location) -> Result<()> {
                write_access!($access, location::update_location(&mut self.conn.borrow_mut(), l))
            }
            fn delete_location(&self, id: &str) -> Result<()> {
                write_access!($access, location::delete_location(&mut self.conn.borrow_mut(), id))
            }
            fn get_location(&self, id: &str) -> Result<Location> {
                location::get_location(&mut self.conn.borrow_mut(), id)
            }
            fn get_locations(&self, ids: &[&str]) -> Result<Vec<Location>> {
                location::get_locations(&mut self.conn.borrow_mut(), ids)
            }
            fn all_locations(&self) -> Result<Vec<Location>> {
                location::all_locations(&mut self.conn.borrow_mut())
            }
            fn locations_by_tag(&self, tag: &str) -> Result<Vec<Location>> {
                location::locations_by_tag(&mut self.conn.borrow_mut(), tag)
            }
            fn try_get_location_by_place_id(&self, place_id: &str) -> Result<Option<Location>> {
                location::try_get_location_by_place_id(&mut self.conn.borrow_mut(), place_id)
            }
            fn set_editorial_score(&self, id: &str, score: Option<EditorialScore>) -> Result<()> {
                write_access!(
                    $access,
                    location::set_editorial_score(&mut self.conn.borrow_mut(), id, score)
                )
            }
            fn set_guide_award(&self, id: &str, guide_id: &str, award: GuideAward) -> Result<()> {
                write_access!(
                    $access,
                    location::set_guide_award(&mut self.conn.borrow_mut(), id, guide_id, award)
                )
            }
            fn set_place_id(&self, id: &str, place_id: &str) -> Result<()> {
                write_access!(
                    $access,
                    location::set_place_id(&mut self.conn.borrow_mut(), id, place_id)
                )
            }
        }

        #[allow(unused_variables)]
        impl TagRepo for $db {
            fn create_tag_if_it_does_not_exist(&self, t: &Tag) -> Result<()> {
                write_access!(
                    $access,
                    tag::create_tag_if_it_does_not_exist(&mut self.conn.borrow_mut(), t)
                )
            }
            fn all_tags(&self) -> Result<Vec<Tag>> {
                tag::all_tags(&mut self.conn.borrow_mut())
            }
        }

        #[allow(unused_variables)]
        impl UserRepo for $db {
            fn create_user(&self, u: &User) -> Result<()> {
                write_access!($access, user::create_user(&mut self.conn.borrow_mut(), u))
            }
            fn update_user(&self, u: &User) -> Result<()> {
                write_access!($access, user::update_user(&mut self.conn.borrow_mut(), u))
            }
            fn all_users(&self) -> Result<Vec<User>> {
                user::all_users(&mut self.conn.borrow_mut())
            }
            fn get_user(&self, id: &str) -> Result<User> {
                user::get_user(&mut self.conn.borrow_mut(), id)
            }
        }

        #[allow(unused_variables)]
        impl PersonalRatingRepo for $db {
            fn upsert_personal_rating(&self, r: &PersonalRating) -> Result<()> {
                write_access!(
                    $access,
                    rating::upsert_personal_rating(&mut self.conn.borrow_mut(), r)
                )
            }
            fn try_get_personal_rating(
                &self,
                location_id: &str,
                user_id: &str,
            ) -> Result<Option<PersonalRating>> {
                rating::try_get_personal_rating(&mut self.conn.borrow_mut(), location_id, user_id)
            }
            fn community_rating(&self, location_id: &str) -> Result<CommunityRating> {
                rating::community_rating(&mut self.conn.borrow_mut(), location_id)
            }
        }

        #[allow(unused_variables)]
        impl UserListRepo for $db {
            fn add_to_user_list(&self, e: &UserListEntry) -> Result<()> {
                write_access!($access, user_list::add_to_user_list(&mut self.conn.borrow_mut(), e))
            }
            fn remove_from_user_list(
                &self,
                user_id: &str,
                list: UserListKind,
                location_id: &str,
            ) -> Result<()> {
                write_access!(
                    $access,
                    user_list::remove_from_user_list(
                        &mut self.conn.borrow_mut(),
                        user_id,
                        list,
                        location_id
                    )
                )
            }
            fn user_list(&self, user_id: &str, list: UserListKind) -> Result<Vec<Id>> {
                user_list::user_list(&mut self.conn.borrow_mut(), user_id, list)
            }
        }
    };
}

impl_repos!(DbReadOnly<'_>, read_only);
impl_repos!(DbReadWrite<'_>, read_write);
impl_repos!(DbConnection<'_>, read_write);
