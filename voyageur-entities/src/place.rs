//! Normalized shapes of the data that third-party place services deliver.

use crate::{geo::*, location::Location, rating::*};

/// Canonical details of a place, independent of the service that delivered them.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaceDetails {
    pub place_id   : Option<String>,
    pub name       : String,
    pub pos        : Option<MapPoint>,
    pub address    : Option<String>,
    pub rating     : Option<ExternalRating>,
    pub photos     : Vec<String>,
    pub categories : Vec<String>,
}

impl PlaceDetails {
    pub fn review_count(&self) -> u64 {
        self.rating.map(|r| r.review_count).unwrap_or_default()
    }

    pub fn rating_value(&self) -> f64 {
        self.rating.map(|r| r.value).unwrap_or_default()
    }
}

impl From<&Location> for PlaceDetails {
    fn from(from: &Location) -> Self {
        Self {
            place_id: from.external_ids.place_id.clone(),
            name: from.name.clone(),
            pos: Some(from.pos),
            address: from.address.clone(),
            rating: from.ratings.external,
            photos: vec![],
            categories: from.tags.clone(),
        }
    }
}

/// An autocomplete candidate.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub place_id       : String,
    pub description    : String,
    pub main_text      : String,
    pub secondary_text : Option<String>,
}

/// Soft preference for results around a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationBias {
    pub center: MapPoint,
    pub radius: Distance,
}

impl From<&MapBbox> for LocationBias {
    fn from(bbox: &MapBbox) -> Self {
        Self {
            center: bbox.center(),
            radius: bbox.bias_radius(),
        }
    }
}

/// A restaurant listed in the dining guide.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct GuideRestaurant {
    pub guide_id : String,
    pub name     : String,
    pub pos      : MapPoint,
    pub address  : Option<String>,
    pub cuisine  : Option<String>,
    pub award    : GuideAward,
}
