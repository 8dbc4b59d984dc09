use super::prelude::*;
use crate::tag::prepare_tag_list;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewLocation {
    pub name            : String,
    pub description     : String,
    pub kind            : Option<String>,
    pub lat             : f64,
    pub lng             : f64,
    pub address         : Option<String>,
    pub tags            : Vec<String>,
    pub editorial_score : Option<f64>,
    pub place_id        : Option<String>,
}

/// Validated and normalized fields of a [`NewLocation`].
#[derive(Debug)]
pub(crate) struct LocationFields {
    pub name: String,
    pub description: String,
    pub kind: Option<LocationKind>,
    pub pos: MapPoint,
    pub address: Option<String>,
    pub tags: Vec<String>,
    pub editorial_score: Option<EditorialScore>,
    pub place_id: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

impl NewLocation {
    pub(crate) fn validate(self) -> Result<LocationFields> {
        let NewLocation {
            name,
            description,
            kind,
            lat,
            lng,
            address,
            tags,
            editorial_score,
            place_id,
        } = self;
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(Error::Name);
        }
        let kind = non_empty(kind)
            .map(|k| k.to_lowercase().parse::<LocationKind>())
            .transpose()
            .map_err(|_| Error::Kind)?;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::Position)?;
        let editorial_score = editorial_score
            .map(EditorialScore::from)
            .map(|score| score.is_valid().then_some(score).ok_or(Error::EditorialScore))
            .transpose()?;
        Ok(LocationFields {
            name,
            description: description.trim().to_owned(),
            kind,
            pos,
            address: non_empty(address),
            tags: prepare_tag_list(tags.iter().map(String::as_str)),
            editorial_score,
            place_id: non_empty(place_id),
        })
    }
}

pub(crate) fn store_tags<R: TagRepo>(repo: &R, tags: &[String]) -> Result<()> {
    for t in tags {
        repo.create_tag_if_it_does_not_exist(&Tag { id: t.clone() })?;
    }
    Ok(())
}

pub fn create_location<D: Db>(db: &D, editor: &User, new_location: NewLocation) -> Result<Location> {
    let LocationFields {
        name,
        description,
        kind,
        pos,
        address,
        tags,
        editorial_score,
        place_id,
    } = new_location.validate()?;
    store_tags(db, &tags)?;
    let location = Location {
        id: Id::new(),
        created: Activity::now(Some(editor.id.clone())),
        name,
        description,
        kind,
        pos,
        address,
        tags,
        ratings: LocationRatings {
            editorial: editorial_score,
            ..Default::default()
        },
        external_ids: ExternalIds {
            place_id,
            guide_id: None,
        },
    };
    log::debug!("Creating new location: {} ({})", location.name, location.id);
    db.create_location(location.clone())?;
    Ok(location)
}
