use voyageur_core::{bbox::in_optional_bbox, gateways::guide::GuideGateway, guide};

use super::*;
use crate::entities::{geo::*, place::GuideRestaurant};

/// The guide entry for a restaurant with the given name near `pos`.
pub async fn guide_rating(
    gateway: &dyn GuideGateway,
    name: &str,
    pos: MapPoint,
) -> Result<Option<GuideRestaurant>> {
    let restaurants = gateway.restaurants().await?;
    Ok(guide::find_restaurant(name, pos, &restaurants).cloned())
}

pub async fn guide_restaurants(
    gateway: &dyn GuideGateway,
    bbox: Option<&MapBbox>,
) -> Result<Vec<GuideRestaurant>> {
    let mut restaurants = gateway.restaurants().await?;
    restaurants.retain(|r| in_optional_bbox(r, bbox));
    Ok(restaurants)
}
