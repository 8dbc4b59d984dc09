use super::{create_location::*, prelude::*};

/// Replaces the editable fields of a location. Community ratings, guide
/// data and list memberships are kept.
pub fn update_location<D: Db>(db: &D, id: &str, update: NewLocation) -> Result<Location> {
    let mut location = db.get_location(id)?;
    let LocationFields {
        name,
        description,
        kind,
        pos,
        address,
        tags,
        editorial_score,
        place_id,
    } = update.validate()?;
    store_tags(db, &tags)?;
    location.name = name;
    location.description = description;
    location.kind = kind;
    location.pos = pos;
    location.address = address;
    location.tags = tags;
    location.ratings.editorial = editorial_score;
    location.external_ids.place_id = place_id;
    log::debug!("Updating location {}", location.id);
    db.update_location(&location)?;
    Ok(location)
}
