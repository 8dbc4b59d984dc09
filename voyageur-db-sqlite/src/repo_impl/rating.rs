use std::collections::HashMap;

use super::*;

fn load_personal_rating(r: models::PersonalRating) -> PersonalRating {
    let models::PersonalRating {
        location_id,
        user_id,
        value,
        created_at,
    } = r;
    PersonalRating {
        location_id: location_id.into(),
        user_id: user_id.into(),
        value: PersonalRatingValue::from(value.clamp(0, i16::from(u8::MAX)) as u8),
        created_at: Timestamp::from_millis(created_at),
    }
}

pub(super) fn upsert_personal_rating(conn: &mut SqliteConnection, r: &PersonalRating) -> Result<()> {
    let model = models::PersonalRating {
        location_id: r.location_id.to_string(),
        user_id: r.user_id.to_string(),
        value: i16::from(u8::from(r.value)),
        created_at: r.created_at.as_millis(),
    };
    diesel::replace_into(schema::personal_rating::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn try_get_personal_rating(
    conn: &mut SqliteConnection,
    location_id: &str,
    user_id: &str,
) -> Result<Option<PersonalRating>> {
    use schema::personal_rating::dsl;
    Ok(dsl::personal_rating
        .filter(dsl::location_id.eq(location_id))
        .filter(dsl::user_id.eq(user_id))
        .first::<models::PersonalRating>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_personal_rating))
}

pub(super) fn community_rating(
    conn: &mut SqliteConnection,
    location_id: &str,
) -> Result<CommunityRating> {
    Ok(community_ratings(conn, Some(&[location_id][..]))?
        .remove(location_id)
        .unwrap_or_default())
}

/// Community ratings of the given locations or of all locations.
pub(super) fn community_ratings(
    conn: &mut SqliteConnection,
    location_ids: Option<&[&str]>,
) -> Result<HashMap<String, CommunityRating>> {
    use schema::personal_rating::dsl;
    let mut query = dsl::personal_rating
        .select((dsl::location_id, dsl::value))
        .into_boxed();
    if let Some(ids) = location_ids {
        query = query.filter(dsl::location_id.eq_any(ids));
    }
    let values = query.load::<(String, i16)>(conn).map_err(from_diesel_err)?;
    let mut builders: HashMap<String, CommunityRatingBuilder> = HashMap::new();
    for (location_id, value) in values {
        *builders.entry(location_id).or_default() +=
            PersonalRatingValue::from(value.clamp(0, i16::from(u8::MAX)) as u8);
    }
    Ok(builders
        .into_iter()
        .map(|(id, builder)| (id, builder.build()))
        .collect())
}
