use super::*;

pub(super) fn create_tag_if_it_does_not_exist(conn: &mut SqliteConnection, t: &Tag) -> Result<()> {
    let res = diesel::insert_into(schema::tags::table)
        .values(&models::Tag { id: t.id.clone() })
        .execute(conn);
    if let Err(err) = res {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                // that's ok :)
            }
            _ => {
                return Err(from_diesel_err(err));
            }
        }
    }
    Ok(())
}

pub(super) fn all_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .order_by(dsl::id)
        .load::<models::Tag>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::Tag { id }| Tag { id })
        .collect())
}
