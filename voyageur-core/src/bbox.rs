use crate::entities::{geo::*, location::*, place::*};

pub trait InBBox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl InBBox for MapPoint {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(*self)
    }
}

impl InBBox for Location {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.pos)
    }
}

impl InBBox for PlaceDetails {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        self.pos.map(|pos| bbox.contains_point(pos)).unwrap_or(false)
    }
}

impl InBBox for GuideRestaurant {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.pos)
    }
}

/// An absent bbox accepts everything.
pub fn in_optional_bbox<T: InBBox>(item: &T, bbox: Option<&MapBbox>) -> bool {
    bbox.map(|bbox| item.in_bbox(bbox)).unwrap_or(true)
}
