use std::collections::HashMap;

use anyhow::anyhow;

use super::*;

const MAX_IDS_PER_QUERY: usize = 500;

fn new_location_model(l: &Location) -> models::NewLocation<'_> {
    let (lat, lng) = l.pos.to_lat_lng_deg();
    models::NewLocation {
        id: l.id.as_str(),
        created_at: l.created.at.as_millis(),
        created_by: l.created.by.as_ref().map(Id::as_str),
        name: &l.name,
        description: &l.description,
        kind: l.kind.as_ref().map(|k| k.as_ref()),
        lat,
        lng,
        address: l.address.as_deref(),
        editorial_score: l.ratings.editorial.map(f64::from),
        external_rating: l.ratings.external.map(|r| r.value),
        external_review_count: l.ratings.external.map(|r| r.review_count as i64),
        guide_award: l.ratings.guide_award.as_ref().map(|a| a.as_ref()),
        place_id: l.external_ids.place_id.as_deref(),
        guide_id: l.external_ids.guide_id.as_deref(),
    }
}

fn load_location(
    entity: models::LocationEntity,
    tags: Vec<String>,
    community: CommunityRating,
) -> Result<Location> {
    let models::LocationEntity {
        id,
        created_at,
        created_by,
        name,
        description,
        kind,
        lat,
        lng,
        address,
        editorial_score,
        external_rating,
        external_review_count,
        guide_award,
        place_id,
        guide_id,
    } = entity;
    let kind = kind
        .map(|k| k.parse::<LocationKind>())
        .transpose()
        .map_err(|_| anyhow!("Invalid kind of location {id}"))?;
    let guide_award = guide_award
        .map(|a| a.parse::<GuideAward>())
        .transpose()
        .map_err(|_| anyhow!("Invalid guide award of location {id}"))?;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid position of location {id}: {lat},{lng}"))?;
    Ok(Location {
        id: id.into(),
        created: Activity {
            at: Timestamp::from_millis(created_at),
            by: created_by.map(Into::into),
        },
        name,
        description,
        kind,
        pos,
        address,
        tags,
        ratings: LocationRatings {
            editorial: editorial_score.map(EditorialScore::from),
            community,
            external: external_rating.map(|value| ExternalRating {
                value,
                review_count: external_review_count.unwrap_or_default().max(0) as u64,
            }),
            guide_award,
        },
        external_ids: ExternalIds { place_id, guide_id },
    })
}

fn load_tags_of_locations(
    conn: &mut SqliteConnection,
    ids: Option<&[&str]>,
) -> Result<HashMap<String, Vec<String>>> {
    use schema::location_tag::dsl;
    let mut query = schema::location_tag::table
        .order_by(dsl::tag)
        .into_boxed();
    if let Some(ids) = ids {
        query = query.filter(dsl::location_id.eq_any(ids));
    }
    let mut tags: HashMap<_, Vec<_>> = HashMap::new();
    for models::LocationTag { location_id, tag } in
        query.load::<models::LocationTag>(conn).map_err(from_diesel_err)?
    {
        tags.entry(location_id).or_default().push(tag);
    }
    Ok(tags)
}

fn load_locations(
    conn: &mut SqliteConnection,
    entities: Vec<models::LocationEntity>,
) -> Result<Vec<Location>> {
    if entities.is_empty() {
        return Ok(vec![]);
    }
    let ids: Vec<_> = entities.iter().map(|e| e.id.as_str()).collect();
    // Avoid exceeding the maximum number of SQL variables
    let ids = (ids.len() <= MAX_IDS_PER_QUERY).then_some(ids.as_slice());
    let mut tags = load_tags_of_locations(conn, ids)?;
    let mut community = super::rating::community_ratings(conn, ids)?;
    entities
        .into_iter()
        .map(|e| {
            let tags = tags.remove(&e.id).unwrap_or_default();
            let community = community.remove(&e.id).unwrap_or_default();
            load_location(e, tags, community)
        })
        .collect()
}

fn insert_tags(conn: &mut SqliteConnection, location_id: &str, tags: &[String]) -> Result<()> {
    let rows: Vec<_> = tags
        .iter()
        .map(|tag| models::LocationTag {
            location_id: location_id.to_owned(),
            tag: tag.clone(),
        })
        .collect();
    diesel::insert_into(schema::location_tag::table)
        .values(&rows)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn create_location(conn: &mut SqliteConnection, l: &Location) -> Result<()> {
    diesel::insert_into(schema::locations::table)
        .values(&new_location_model(l))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_tags(conn, l.id.as_str(), &l.tags)
}

pub(super) fn update_location(conn: &mut SqliteConnection, l: &Location) -> Result<()> {
    use schema::{location_tag::dsl as t_dsl, locations::dsl};
    let count = diesel::update(dsl::locations.filter(dsl::id.eq(l.id.as_str())))
        .set(&new_location_model(l))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)?;
    diesel::delete(t_dsl::location_tag.filter(t_dsl::location_id.eq(l.id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_tags(conn, l.id.as_str(), &l.tags)
}

pub(super) fn delete_location(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::{
        location_tag::dsl as t_dsl, locations::dsl, personal_rating::dsl as r_dsl,
        user_list_entry::dsl as e_dsl,
    };
    diesel::delete(t_dsl::location_tag.filter(t_dsl::location_id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(r_dsl::personal_rating.filter(r_dsl::location_id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(e_dsl::user_list_entry.filter(e_dsl::location_id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let count = diesel::delete(dsl::locations.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

pub(super) fn get_location(conn: &mut SqliteConnection, id: &str) -> Result<Location> {
    use schema::locations::dsl;
    let entity = dsl::locations
        .filter(dsl::id.eq(id))
        .first::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_locations(conn, vec![entity])?
        .pop()
        .ok_or(repo::Error::NotFound)
}

pub(super) fn get_locations(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<Location>> {
    use schema::locations::dsl;
    let entities = dsl::locations
        .filter(dsl::id.eq_any(ids))
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_locations(conn, entities)
}

pub(super) fn all_locations(conn: &mut SqliteConnection) -> Result<Vec<Location>> {
    use schema::locations::dsl;
    let entities = dsl::locations
        .order_by(dsl::created_at)
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_locations(conn, entities)
}

pub(super) fn locations_by_tag(conn: &mut SqliteConnection, tag: &str) -> Result<Vec<Location>> {
    use schema::{location_tag::dsl as t_dsl, locations::dsl};
    let tagged = t_dsl::location_tag
        .select(t_dsl::location_id)
        .filter(t_dsl::tag.eq(tag));
    let entities = dsl::locations
        .filter(dsl::id.eq_any(tagged))
        .order_by(dsl::created_at)
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_locations(conn, entities)
}

pub(super) fn try_get_location_by_place_id(
    conn: &mut SqliteConnection,
    place_id: &str,
) -> Result<Option<Location>> {
    use schema::locations::dsl;
    let entity = dsl::locations
        .filter(dsl::place_id.eq(place_id))
        .first::<models::LocationEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    let Some(entity) = entity else {
        return Ok(None);
    };
    Ok(load_locations(conn, vec![entity])?.pop())
}

pub(super) fn set_editorial_score(
    conn: &mut SqliteConnection,
    id: &str,
    score: Option<EditorialScore>,
) -> Result<()> {
    use schema::locations::dsl;
    let count = diesel::update(dsl::locations.filter(dsl::id.eq(id)))
        .set(dsl::editorial_score.eq(score.map(f64::from)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

pub(super) fn set_guide_award(
    conn: &mut SqliteConnection,
    id: &str,
    guide_id: &str,
    award: GuideAward,
) -> Result<()> {
    use schema::locations::dsl;
    let count = diesel::update(dsl::locations.filter(dsl::id.eq(id)))
        .set((
            dsl::guide_award.eq(award.as_ref()),
            dsl::guide_id.eq(guide_id),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

pub(super) fn set_place_id(conn: &mut SqliteConnection, id: &str, place_id: &str) -> Result<()> {
    use schema::locations::dsl;
    let count = diesel::update(dsl::locations.filter(dsl::id.eq(id)))
        .set(dsl::place_id.eq(place_id))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}
