use super::prelude::*;

/// Profile data of an identity that was verified by the identity provider.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Id,
    pub email: String,
    pub display_name: Option<String>,
}

impl NewUser {
    fn into_user(self) -> Result<User> {
        let NewUser {
            id,
            email,
            display_name,
        } = self;
        if !id.is_valid() {
            return Err(Error::Unauthorized);
        }
        let email = email.trim().to_lowercase();
        if !fast_chemail::is_valid_email(&email) {
            return Err(Error::Email);
        }
        Ok(User {
            id,
            email,
            display_name: display_name
                .map(|n| n.trim().to_owned())
                .filter(|n| !n.is_empty()),
            role: Role::User,
            created_at: Timestamp::now(),
        })
    }
}

/// Creates the profile of a newly signed up identity.
pub fn register_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    if repo.try_get_user(new_user.id.as_str())?.is_some() {
        return Err(Error::UserExists);
    }
    let user = new_user.into_user()?;
    log::debug!("Creating new user: id = {}", user.id);
    repo.create_user(&user)?;
    Ok(user)
}

/// Returns the existing profile or creates it, e.g. after an OAuth sign-in.
pub fn get_or_register_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    if let Some(user) = repo.try_get_user(new_user.id.as_str())? {
        return Ok(user);
    }
    register_user(repo, new_user)
}

pub fn load_users<R: UserRepo>(repo: &R) -> Result<Vec<User>> {
    Ok(repo.all_users()?)
}
