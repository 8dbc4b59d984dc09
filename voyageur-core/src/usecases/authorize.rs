use super::prelude::*;
use crate::authorization::user::authorize_role;

/// Loads the registered user behind an authenticated identity.
pub fn authorize_user<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    repo.try_get_user(user_id)?.ok_or(Error::Unauthorized)
}

/// Like [`authorize_user`] but additionally requires the editor role.
pub fn authorize_editor<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    let user = authorize_user(repo, user_id)?;
    authorize_role(&user, Role::Editor)?;
    Ok(user)
}
