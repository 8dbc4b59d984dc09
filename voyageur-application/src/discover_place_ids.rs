use voyageur_core::{
    gateways::places::PlacesGateway,
    guide::{first_place_within, PLACE_ID_DISCOVERY_RADIUS},
};

use super::*;
use crate::entities::{location::Location, place::LocationBias};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceIdDiscoveryReport {
    pub candidates: usize,
    pub discovered: usize,
    pub failed: usize,
}

fn load_candidates(connections: &sqlite::Connections) -> Result<Vec<Location>> {
    let mut locations = connections.shared()?.all_locations()?;
    locations.retain(|l| l.ratings.guide_award.is_some() && l.place_id().is_none());
    Ok(locations)
}

fn store_place_id(connections: &sqlite::Connections, id: &str, place_id: &str) -> Result<()> {
    connections.exclusive()?.set_place_id(id, place_id)?;
    Ok(())
}

/// Looks up the place ids of awarded locations that don't have one yet.
pub async fn discover_place_ids(
    connections: &sqlite::Connections,
    places: &dyn PlacesGateway,
) -> Result<PlaceIdDiscoveryReport> {
    let candidates = load_candidates(connections)?;
    let mut report = PlaceIdDiscoveryReport {
        candidates: candidates.len(),
        ..Default::default()
    };
    for location in candidates {
        let bias = LocationBias {
            center: location.pos,
            radius: PLACE_ID_DISCOVERY_RADIUS,
        };
        let results = match places.text_search(&location.name, Some(bias)).await {
            Ok(results) => results,
            Err(err) => {
                log::warn!("Failed to search the place of location {}: {err}", location.id);
                report.failed += 1;
                continue;
            }
        };
        let Some(place_id) = first_place_within(&results, location.pos, PLACE_ID_DISCOVERY_RADIUS)
            .and_then(|p| p.place_id.as_deref())
        else {
            log::debug!("No place found for location {}", location.id);
            continue;
        };
        if let Err(err) = store_place_id(connections, location.id.as_str(), place_id) {
            log::warn!("Failed to store place id of location {}: {err}", location.id);
            report.failed += 1;
            continue;
        }
        report.discovered += 1;
    }
    log::info!(
        "Discovered {} of {} place ids",
        report.discovered,
        report.candidates
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[tokio::test]
    async fn discover_place_ids_of_awarded_locations() {
        let fixture = BackendFixture::new();
        fixture.create_location(
            Location::build()
                .id("awarded")
                .name("Mirazur")
                .guide_award(GuideAward::ThreeStars)
                .lat_lng(43.7884, 7.5296)
                .finish(),
        );
        fixture.create_location(
            Location::build()
                .id("known")
                .name("Known")
                .guide_award(GuideAward::OneStar)
                .place_id("ChIJ-known")
                .finish(),
        );
        fixture.create_location(Location::build().id("plain").name("Plain").finish());
        let places = DummyPlaces {
            results: vec![
                PlaceDetails::build()
                    .place_id("ChIJ-elsewhere")
                    .name("Mirazur")
                    .lat_lng(43.80, 7.55)
                    .finish(),
                PlaceDetails::build()
                    .place_id("ChIJ-mirazur")
                    .name("Mirazur")
                    .lat_lng(43.7885, 7.5297)
                    .finish(),
            ],
            ..Default::default()
        };

        let report = flows::discover_place_ids(&fixture.db_connections, &places)
            .await
            .unwrap();
        assert_eq!(
            report,
            flows::PlaceIdDiscoveryReport {
                candidates: 1,
                discovered: 1,
                failed: 0
            }
        );
        assert_eq!(fixture.location("awarded").place_id(), Some("ChIJ-mirazur"));
        assert_eq!(fixture.location("plain").place_id(), None);
    }

    #[tokio::test]
    async fn failures_are_counted_and_skipped() {
        let fixture = BackendFixture::new();
        fixture.create_location(
            Location::build()
                .id("awarded")
                .name("Mirazur")
                .guide_award(GuideAward::ThreeStars)
                .finish(),
        );
        let places = DummyPlaces {
            failing: true,
            ..Default::default()
        };
        let report = flows::discover_place_ids(&fixture.db_connections, &places)
            .await
            .unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(fixture.location("awarded").place_id(), None);
    }
}
