use super::{Suggestion, SuggestionKind};
use crate::{entities::place::*, gateways::places::PlacesGateway};

fn local_details(suggestion: &Suggestion) -> Option<PlaceDetails> {
    let details = match &suggestion.kind {
        SuggestionKind::Location {
            pos,
            address,
            place_id,
            ..
        } => PlaceDetails {
            place_id: place_id.clone(),
            name: suggestion.label.clone(),
            pos: Some(*pos),
            address: address.clone(),
            ..Default::default()
        },
        SuggestionKind::TextSearch(details) => details.clone(),
        SuggestionKind::Prediction(prediction) => PlaceDetails {
            place_id: Some(prediction.place_id.clone()),
            name: prediction.main_text.clone(),
            address: prediction.secondary_text.clone(),
            ..Default::default()
        },
        SuggestionKind::SearchAction { .. } | SuggestionKind::Tag { .. } => return None,
    };
    Some(details)
}

/// Resolves a picked suggestion into place details.
///
/// Canonical details are fetched if a place id is known. Without one, or if
/// the lookup fails, the locally known fields are used instead. Search actions
/// and tags don't refer to a place and yield `None`.
pub async fn resolve_selection<P>(places: &P, suggestion: &Suggestion) -> Option<PlaceDetails>
where
    P: PlacesGateway + ?Sized,
{
    let local = local_details(suggestion)?;
    let Some(place_id) = suggestion.place_id() else {
        return Some(local);
    };
    match places.place_details(place_id).await {
        Ok(mut details) => {
            if details.place_id.is_none() {
                details.place_id = Some(place_id.to_owned());
            }
            Some(details)
        }
        Err(err) => {
            log::warn!("Failed to resolve place {place_id}: {err}");
            Some(local)
        }
    }
}
