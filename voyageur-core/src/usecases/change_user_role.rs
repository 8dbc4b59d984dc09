use super::prelude::*;
use crate::authorization::user::authorize_editor;

/// Editors may change the role of every user except their own.
pub fn change_user_role<R: UserRepo>(
    repo: &R,
    account: &User,
    user_id: &str,
    role: Role,
) -> Result<User> {
    log::info!("Changing role to {:?} for {}", role, user_id);
    authorize_editor(account)?;
    if account.id.as_str() == user_id {
        return Err(Error::Forbidden);
    }
    let mut user = repo.try_get_user(user_id)?.ok_or(Error::UserDoesNotExist)?;
    user.role = role;
    repo.update_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn promote_user_to_editor() {
        let db = MockDb::default();
        let editor = db.add_user("editor", Role::Editor);
        db.add_user("alice", Role::User);
        let alice = change_user_role(&db, &editor, "alice", Role::Editor).unwrap();
        assert_eq!(alice.role, Role::Editor);
        assert_eq!(db.get_user("alice").unwrap().role, Role::Editor);
    }

    #[test]
    fn users_cannot_change_roles() {
        let db = MockDb::default();
        let alice = db.add_user("alice", Role::User);
        db.add_user("bob", Role::User);
        assert!(matches!(
            change_user_role(&db, &alice, "bob", Role::Editor),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            change_user_role(&db, &alice, "alice", Role::Editor),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn editors_cannot_demote_themselves() {
        let db = MockDb::default();
        let editor = db.add_user("editor", Role::Editor);
        assert!(matches!(
            change_user_role(&db, &editor, "editor", Role::User),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            change_user_role(&db, &editor, "nobody", Role::User),
            Err(Error::UserDoesNotExist)
        ));
    }
}
