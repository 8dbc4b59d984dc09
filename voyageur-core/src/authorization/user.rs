use std::result::Result as StdResult;

use thiserror::Error;

use crate::entities::user::{Role, User};

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

pub fn authorize_editor(user: &User) -> Result<()> {
    authorize_role(user, Role::Editor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::time::Timestamp;

    fn user_with_role(role: Role) -> User {
        User {
            id: "u".into(),
            email: "u@example.com".into(),
            display_name: None,
            role,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn only_editors_may_curate() {
        assert!(authorize_editor(&user_with_role(Role::Editor)).is_ok());
        assert!(authorize_editor(&user_with_role(Role::User)).is_err());
        assert!(authorize_editor(&user_with_role(Role::Guest)).is_err());
        assert!(authorize_role(&user_with_role(Role::User), Role::User).is_ok());
    }
}
