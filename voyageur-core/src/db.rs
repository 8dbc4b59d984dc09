use crate::repositories::*;

/// All repositories of the location store.
pub trait Db: LocationRepo + TagRepo + UserRepo + PersonalRatingRepo + UserListRepo {}

impl<T> Db for T where T: LocationRepo + TagRepo + UserRepo + PersonalRatingRepo + UserListRepo {}
