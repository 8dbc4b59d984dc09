use voyageur_core::{gateways::guide::GuideGateway, guide::find_matching_location};

use super::*;
use crate::entities::place::GuideRestaurant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuideSyncReport {
    pub seen: usize,
    pub matched: usize,
    pub updated: usize,
}

fn apply_guide_ratings<D: Db>(
    db: &D,
    restaurants: &[GuideRestaurant],
) -> std::result::Result<GuideSyncReport, usecases::Error> {
    let locations = db.all_locations()?;
    let mut report = GuideSyncReport {
        seen: restaurants.len(),
        ..Default::default()
    };
    for restaurant in restaurants {
        let Some(location) = find_matching_location(restaurant, &locations) else {
            continue;
        };
        report.matched += 1;
        let unchanged = location.ratings.guide_award == Some(restaurant.award)
            && location.external_ids.guide_id.as_deref() == Some(restaurant.guide_id.as_str());
        if unchanged {
            continue;
        }
        log::debug!(
            "Setting guide award {} of location {}",
            restaurant.award,
            location.id
        );
        db.set_guide_award(location.id.as_str(), &restaurant.guide_id, restaurant.award)?;
        report.updated += 1;
    }
    Ok(report)
}

/// Writes the awards of the dining guide into the matching locations.
pub async fn sync_guide_ratings(
    connections: &sqlite::Connections,
    gateway: &dyn GuideGateway,
) -> Result<GuideSyncReport> {
    let restaurants = gateway.restaurants().await?;
    let report = connections
        .exclusive()?
        .transaction(|conn| apply_guide_ratings(conn, &restaurants))?;
    log::info!(
        "Synchronized guide ratings: {} seen, {} matched, {} updated",
        report.seen,
        report.matched,
        report.updated
    );
    Ok(report)
}
