use std::{cell::RefCell, result};

use super::prelude::*;
use crate::repositories::Error as RepoError;

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub locations: RefCell<Vec<Location>>,
    pub tags: RefCell<Vec<Tag>>,
    pub users: RefCell<Vec<User>>,
    pub personal_ratings: RefCell<Vec<PersonalRating>>,
    pub user_lists: RefCell<Vec<UserListEntry>>,
}

impl MockDb {
    pub fn add_user(&self, id: &str, role: Role) -> User {
        let user = User {
            id: id.into(),
            email: format!("{id}@example.com"),
            display_name: None,
            role,
            created_at: Timestamp::now(),
        };
        self.users.borrow_mut().push(user.clone());
        user
    }

    fn modify_location(&self, id: &str, f: impl FnOnce(&mut Location)) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let location = locations
            .iter_mut()
            .find(|l| l.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        f(location);
        Ok(())
    }
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: Location) -> RepoResult<()> {
        if self.locations.borrow().iter().any(|l| l.id == location.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.locations.borrow_mut().push(location);
        Ok(())
    }

    fn update_location(&self, location: &Location) -> RepoResult<()> {
        self.modify_location(location.id.as_str(), |l| *l = location.clone())
    }

    fn delete_location(&self, id: &str) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let len = locations.len();
        locations.retain(|l| l.id.as_str() != id);
        if locations.len() == len {
            return Err(RepoError::NotFound);
        }
        self.personal_ratings
            .borrow_mut()
            .retain(|r| r.location_id.as_str() != id);
        self.user_lists
            .borrow_mut()
            .retain(|e| e.location_id.as_str() != id);
        Ok(())
    }

    fn get_location(&self, id: &str) -> RepoResult<Location> {
        self.locations
            .borrow()
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_locations(&self, ids: &[&str]) -> RepoResult<Vec<Location>> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .filter(|l| ids.contains(&l.id.as_str()))
            .cloned()
            .collect())
    }

    fn all_locations(&self) -> RepoResult<Vec<Location>> {
        Ok(self.locations.borrow().clone())
    }

    fn locations_by_tag(&self, tag: &str) -> RepoResult<Vec<Location>> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .filter(|l| l.tags.iter().any(|t| t == tag))
            .cloned()
            .collect())
    }

    fn try_get_location_by_place_id(&self, place_id: &str) -> RepoResult<Option<Location>> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .find(|l| l.place_id() == Some(place_id))
            .cloned())
    }

    fn set_editorial_score(&self, id: &str, score: Option<EditorialScore>) -> RepoResult<()> {
        self.modify_location(id, |l| l.ratings.editorial = score)
    }

    fn set_guide_award(&self, id: &str, guide_id: &str, award: GuideAward) -> RepoResult<()> {
        self.modify_location(id, |l| {
            l.ratings.guide_award = Some(award);
            l.external_ids.guide_id = Some(guide_id.to_owned());
        })
    }

    fn set_place_id(&self, id: &str, place_id: &str) -> RepoResult<()> {
        self.modify_location(id, |l| l.external_ids.place_id = Some(place_id.to_owned()))
    }
}

impl TagRepo for MockDb {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> RepoResult<()> {
        if !self.tags.borrow().contains(tag) {
            self.tags.borrow_mut().push(tag.clone());
        }
        Ok(())
    }

    fn all_tags(&self) -> RepoResult<Vec<Tag>> {
        Ok(self.tags.borrow().clone())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.id == user.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *existing = user.clone();
        Ok(())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl PersonalRatingRepo for MockDb {
    fn upsert_personal_rating(&self, rating: &PersonalRating) -> RepoResult<()> {
        let mut ratings = self.personal_ratings.borrow_mut();
        ratings.retain(|r| !(r.location_id == rating.location_id && r.user_id == rating.user_id));
        ratings.push(rating.clone());
        Ok(())
    }

    fn try_get_personal_rating(
        &self,
        location_id: &str,
        user_id: &str,
    ) -> RepoResult<Option<PersonalRating>> {
        Ok(self
            .personal_ratings
            .borrow()
            .iter()
            .find(|r| r.location_id.as_str() == location_id && r.user_id.as_str() == user_id)
            .cloned())
    }

    fn community_rating(&self, location_id: &str) -> RepoResult<CommunityRating> {
        Ok(self
            .personal_ratings
            .borrow()
            .iter()
            .filter(|r| r.location_id.as_str() == location_id)
            .fold(CommunityRatingBuilder::default(), |mut acc, r| {
                acc += r.value;
                acc
            })
            .build())
    }
}

impl UserListRepo for MockDb {
    fn add_to_user_list(&self, entry: &UserListEntry) -> RepoResult<()> {
        let exists = self.user_lists.borrow().iter().any(|e| {
            e.user_id == entry.user_id && e.list == entry.list && e.location_id == entry.location_id
        });
        if !exists {
            self.user_lists.borrow_mut().push(entry.clone());
        }
        Ok(())
    }

    fn remove_from_user_list(
        &self,
        user_id: &str,
        list: UserListKind,
        location_id: &str,
    ) -> RepoResult<()> {
        self.user_lists.borrow_mut().retain(|e| {
            !(e.user_id.as_str() == user_id
                && e.list == list
                && e.location_id.as_str() == location_id)
        });
        Ok(())
    }

    fn user_list(&self, user_id: &str, list: UserListKind) -> RepoResult<Vec<Id>> {
        Ok(self
            .user_lists
            .borrow()
            .iter()
            .filter(|e| e.user_id.as_str() == user_id && e.list == list)
            .map(|e| e.location_id.clone())
            .collect())
    }
}
