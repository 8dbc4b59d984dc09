use super::*;

pub fn create_location(
    connections: &sqlite::Connections,
    account_id: &str,
    new_location: usecases::NewLocation,
) -> Result<location::Location> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let editor = usecases::authorize_editor(conn, account_id)?;
        usecases::create_location(conn, &editor, new_location).inspect_err(|err| {
            log::warn!("Failed to create location: {err}");
        })
    })?)
}

pub fn update_location(
    connections: &sqlite::Connections,
    account_id: &str,
    id: &str,
    update: usecases::NewLocation,
) -> Result<location::Location> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::authorize_editor(conn, account_id)?;
        usecases::update_location(conn, id, update).inspect_err(|err| {
            log::warn!("Failed to update location {id}: {err}");
        })
    })?)
}

pub fn delete_location(
    connections: &sqlite::Connections,
    account_id: &str,
    id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::authorize_editor(conn, account_id)?;
        usecases::delete_location(conn, id)
    })?)
}

pub fn set_editorial_score(
    connections: &sqlite::Connections,
    account_id: &str,
    id: &str,
    score: Option<f64>,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::authorize_editor(conn, account_id)?;
        usecases::set_editorial_score(conn, id, score)
    })?)
}

pub fn rate_location(
    connections: &sqlite::Connections,
    account_id: &str,
    id: &str,
    value: u8,
) -> Result<rating::PersonalRating> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user(conn, account_id)?;
        usecases::rate_location(conn, &user, id, value)
    })?)
}

pub fn change_user_role(
    connections: &sqlite::Connections,
    account_id: &str,
    user_id: &str,
    role: user::Role,
) -> Result<user::User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_user(conn, account_id)?;
        usecases::change_user_role(conn, &account, user_id, role).inspect_err(|err| {
            log::warn!("Failed to change role of user {user_id}: {err}");
        })
    })?)
}
