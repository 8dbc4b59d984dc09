// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use thiserror::Error;

use crate::entities::{
    id::*, location::*, rating::*, tag::*, user::*, user_list::*,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait LocationRepo {
    fn create_location(&self, location: Location) -> Result<()>;
    fn update_location(&self, location: &Location) -> Result<()>;
    fn delete_location(&self, id: &str) -> Result<()>;

    fn get_location(&self, id: &str) -> Result<Location>;
    fn get_locations(&self, ids: &[&str]) -> Result<Vec<Location>>;
    fn all_locations(&self) -> Result<Vec<Location>>;
    fn locations_by_tag(&self, tag: &str) -> Result<Vec<Location>>;
    fn try_get_location_by_place_id(&self, place_id: &str) -> Result<Option<Location>>;

    fn set_editorial_score(&self, id: &str, score: Option<EditorialScore>) -> Result<()>;
    fn set_guide_award(&self, id: &str, guide_id: &str, award: GuideAward) -> Result<()>;
    fn set_place_id(&self, id: &str, place_id: &str) -> Result<()>;
}

pub trait TagRepo {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()>;
    fn all_tags(&self) -> Result<Vec<Tag>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn all_users(&self) -> Result<Vec<User>>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        match self.get_user(id) {
            Ok(user) => Ok(Some(user)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

pub trait PersonalRatingRepo {
    /// Replaces a previous rating of the same user.
    fn upsert_personal_rating(&self, rating: &PersonalRating) -> Result<()>;
    fn try_get_personal_rating(
        &self,
        location_id: &str,
        user_id: &str,
    ) -> Result<Option<PersonalRating>>;
    fn community_rating(&self, location_id: &str) -> Result<CommunityRating>;
}

pub trait UserListRepo {
    /// Adding an existing entry again is a no-op.
    fn add_to_user_list(&self, entry: &UserListEntry) -> Result<()>;
    fn remove_from_user_list(
        &self,
        user_id: &str,
        list: UserListKind,
        location_id: &str,
    ) -> Result<()>;
    fn user_list(&self, user_id: &str, list: UserListKind) -> Result<Vec<Id>>;
}
