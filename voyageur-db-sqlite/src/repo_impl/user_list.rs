use super::*;

pub(super) fn add_to_user_list(conn: &mut SqliteConnection, e: &UserListEntry) -> Result<()> {
    let model = models::UserListEntry {
        user_id: e.user_id.to_string(),
        list: e.list.to_string(),
        location_id: e.location_id.to_string(),
        created_at: e.created_at.as_millis(),
    };
    diesel::insert_or_ignore_into(schema::user_list_entry::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn remove_from_user_list(
    conn: &mut SqliteConnection,
    user_id: &str,
    list: UserListKind,
    location_id: &str,
) -> Result<()> {
    use schema::user_list_entry::dsl;
    diesel::delete(
        dsl::user_list_entry
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::list.eq(list.as_ref()))
            .filter(dsl::location_id.eq(location_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn user_list(
    conn: &mut SqliteConnection,
    user_id: &str,
    list: UserListKind,
) -> Result<Vec<Id>> {
    use schema::user_list_entry::dsl;
    Ok(dsl::user_list_entry
        .select(dsl::location_id)
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::list.eq(list.as_ref()))
        .order_by(dsl::created_at)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}
