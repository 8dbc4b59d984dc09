//! Matching of dining guide entries against curated locations.

use crate::entities::{geo::*, location::*, place::*};

/// Maximum distance between a guide restaurant and a location with the same name.
pub const MATCH_RADIUS: Distance = Distance::from_meters(150.0);

/// Search radius when looking for the place id of an awarded location.
pub const PLACE_ID_DISCOVERY_RADIUS: Distance = Distance::from_meters(200.0);

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn within(a: MapPoint, b: MapPoint, radius: Distance) -> bool {
    MapPoint::distance(a, b)
        .map(|d| d <= radius)
        .unwrap_or(false)
}

/// Finds the location a guide restaurant refers to, either by a previously
/// stored guide id or by name and proximity.
pub fn find_matching_location<'a>(
    restaurant: &GuideRestaurant,
    locations: &'a [Location],
) -> Option<&'a Location> {
    locations
        .iter()
        .find(|l| l.external_ids.guide_id.as_deref() == Some(restaurant.guide_id.as_str()))
        .or_else(|| {
            locations.iter().find(|l| {
                same_name(&l.name, &restaurant.name) && within(l.pos, restaurant.pos, MATCH_RADIUS)
            })
        })
}

pub fn find_restaurant<'a>(
    name: &str,
    pos: MapPoint,
    restaurants: &'a [GuideRestaurant],
) -> Option<&'a GuideRestaurant> {
    restaurants
        .iter()
        .find(|r| same_name(&r.name, name) && within(r.pos, pos, MATCH_RADIUS))
}

/// Takes the first result that lies within `radius` of `pos`.
pub fn first_place_within<'a>(
    results: &'a [PlaceDetails],
    pos: MapPoint,
    radius: Distance,
) -> Option<&'a PlaceDetails> {
    results
        .iter()
        .filter(|p| p.place_id.is_some())
        .find(|p| p.pos.map(|p| within(p, pos, radius)).unwrap_or(false))
}
