use super::prelude::*;

/// Sets or clears the editorial score of a location.
pub fn set_editorial_score<R: LocationRepo>(
    repo: &R,
    location_id: &str,
    score: Option<f64>,
) -> Result<()> {
    let score = score.map(EditorialScore::from);
    if score.is_some_and(|s| !s.is_valid()) {
        return Err(Error::EditorialScore);
    }
    repo.set_editorial_score(location_id, score)?;
    Ok(())
}

/// Stores the rating of a user, replacing any previous one.
pub fn rate_location<D: Db>(
    db: &D,
    user: &User,
    location_id: &str,
    value: u8,
) -> Result<PersonalRating> {
    let value = PersonalRatingValue::from(value);
    if !value.is_valid() {
        return Err(Error::PersonalRating);
    }
    // the location must exist
    let location = db.get_location(location_id)?;
    let rating = PersonalRating {
        location_id: location.id,
        user_id: user.id.clone(),
        value,
        created_at: Timestamp::now(),
    };
    db.upsert_personal_rating(&rating)?;
    Ok(rating)
}

pub fn load_personal_rating<R: PersonalRatingRepo>(
    repo: &R,
    user: &User,
    location_id: &str,
) -> Result<Option<PersonalRating>> {
    Ok(repo.try_get_personal_rating(location_id, user.id.as_str())?)
}

pub fn load_community_rating<R: PersonalRatingRepo>(
    repo: &R,
    location_id: &str,
) -> Result<CommunityRating> {
    Ok(repo.community_rating(location_id)?)
}
