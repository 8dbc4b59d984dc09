use voyageur_core::gateways::places::PlacesGateway;

use super::*;
use crate::entities::place::PlaceDetails;

fn stored_place_details(
    connections: &sqlite::Connections,
    place_id: &str,
) -> Result<Option<PlaceDetails>> {
    let location = connections
        .shared()?
        .try_get_location_by_place_id(place_id)?;
    Ok(location.as_ref().map(PlaceDetails::from))
}

/// Canonical details of a place, or what the store knows about it
/// if the places service fails.
pub async fn place_details(
    connections: &sqlite::Connections,
    places: &dyn PlacesGateway,
    place_id: &str,
) -> Result<Option<PlaceDetails>> {
    match places.place_details(place_id).await {
        Ok(details) => Ok(Some(details)),
        Err(err) => {
            log::warn!("Failed to fetch details of place {place_id}: {err}");
            stored_place_details(connections, place_id)
        }
    }
}
