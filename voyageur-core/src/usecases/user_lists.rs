use super::prelude::*;

pub fn add_to_user_list<D: Db>(
    db: &D,
    user: &User,
    list: UserListKind,
    location_id: &str,
) -> Result<()> {
    let location = db.get_location(location_id)?;
    db.add_to_user_list(&UserListEntry {
        user_id: user.id.clone(),
        location_id: location.id,
        list,
        created_at: Timestamp::now(),
    })?;
    Ok(())
}

pub fn remove_from_user_list<R: UserListRepo>(
    repo: &R,
    user: &User,
    list: UserListKind,
    location_id: &str,
) -> Result<()> {
    repo.remove_from_user_list(user.id.as_str(), list, location_id)?;
    Ok(())
}

pub fn load_user_list<D: Db>(db: &D, user: &User, list: UserListKind) -> Result<Vec<Location>> {
    let ids = db.user_list(user.id.as_str(), list)?;
    let ids: Vec<_> = ids.iter().map(Id::as_str).collect();
    Ok(db.get_locations(&ids)?)
}
