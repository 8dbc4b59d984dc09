use anyhow::anyhow;

use super::*;

fn new_user_model(u: &User) -> models::NewUser<'_> {
    models::NewUser {
        id: u.id.as_str(),
        email: &u.email,
        display_name: u.display_name.as_deref(),
        role: u.role.to_i16(),
        created_at: u.created_at.as_millis(),
    }
}

fn load_user(u: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        email,
        display_name,
        role,
        created_at,
    } = u;
    let role = Role::from_i16(role).ok_or_else(|| anyhow!("Invalid role of user {id}: {role}"))?;
    Ok(User {
        id: id.into(),
        email,
        display_name,
        role,
        created_at: Timestamp::from_millis(created_at),
    })
}

pub(super) fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    diesel::insert_into(schema::users::table)
        .values(&new_user_model(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(u.id.as_str())))
        .set(&new_user_model(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

pub(super) fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    load_user(
        dsl::users
            .filter(dsl::id.eq(id))
            .first::<models::UserEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

pub(super) fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    dsl::users
        .order_by(dsl::created_at)
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect()
}
