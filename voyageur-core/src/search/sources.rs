use std::cmp::Ordering;

use futures::future::join_all;

use crate::{
    bbox::*,
    entities::{geo::*, location::*, place::*, rating::PopularityTier},
    gateways::places::PlacesGateway,
};

/// Tags containing the query, in vocabulary order.
pub fn match_tags<'a>(query: &str, vocabulary: &'a [String]) -> Vec<&'a String> {
    let query = query.to_lowercase();
    vocabulary
        .iter()
        .filter(|tag| tag.to_lowercase().contains(&query))
        .collect()
}

fn location_matches(location: &Location, query: &str) -> bool {
    location.name.to_lowercase().contains(query)
        || location.tags.iter().any(|t| t.to_lowercase().contains(query))
}

fn cmp_editorial_desc(a: &Location, b: &Location) -> Ordering {
    b.editorial_score()
        .partial_cmp(&a.editorial_score())
        .unwrap_or(Ordering::Equal)
}

/// Rated locations whose name or tags contain the query,
/// best editorial score first.
pub fn match_locations<'a>(
    query: &str,
    locations: &'a [Location],
    bbox: Option<&MapBbox>,
) -> Vec<&'a Location> {
    let query = query.to_lowercase();
    let mut matches: Vec<_> = locations
        .iter()
        .filter(|l| l.is_rated())
        .filter(|l| location_matches(l, &query))
        .filter(|l| in_optional_bbox(*l, bbox))
        .collect();
    // stable: equal scores keep their source order
    matches.sort_by(|a, b| cmp_editorial_desc(a, b));
    matches
}

fn cmp_popularity_desc(a: &PlaceDetails, b: &PlaceDetails) -> Ordering {
    let tier = |p: &PlaceDetails| PopularityTier::from_review_count(p.review_count());
    tier(b).cmp(&tier(a)).then_with(|| {
        b.rating_value()
            .partial_cmp(&a.rating_value())
            .unwrap_or(Ordering::Equal)
    })
}

/// Restricts text search results to the bbox and orders them by
/// popularity tier and rating.
pub fn rank_text_search_results(
    results: Vec<PlaceDetails>,
    bbox: Option<&MapBbox>,
) -> Vec<PlaceDetails> {
    let mut results: Vec<_> = results
        .into_iter()
        .filter(|p| in_optional_bbox(p, bbox))
        .collect();
    results.sort_by(cmp_popularity_desc);
    results
}

pub async fn text_search_section<P>(
    places: &P,
    query: &str,
    bbox: Option<&MapBbox>,
) -> Vec<PlaceDetails>
where
    P: PlacesGateway + ?Sized,
{
    let bias = bbox.map(LocationBias::from);
    match places.text_search(query, bias).await {
        Ok(results) => rank_text_search_results(results, bbox),
        Err(err) => {
            log::warn!("Text search for '{query}' failed: {err}");
            vec![]
        }
    }
}

/// Keeps only predictions whose details place them inside the bbox.
/// Candidates whose details cannot be fetched are dropped.
pub async fn filter_predictions_by_bbox<P>(
    places: &P,
    predictions: Vec<Prediction>,
    bbox: &MapBbox,
) -> Vec<Prediction>
where
    P: PlacesGateway + ?Sized,
{
    let details = join_all(
        predictions
            .iter()
            .map(|p| places.place_details(&p.place_id)),
    )
    .await;
    predictions
        .into_iter()
        .zip(details)
        .filter_map(|(prediction, details)| match details {
            Ok(details) if details.in_bbox(bbox) => Some(prediction),
            Ok(_) => None,
            Err(err) => {
                log::debug!(
                    "Dropping prediction {} without details: {err}",
                    prediction.place_id
                );
                None
            }
        })
        .collect()
}

pub async fn prediction_section<P>(
    places: &P,
    query: &str,
    bbox: Option<&MapBbox>,
    enhanced: bool,
) -> Vec<Prediction>
where
    P: PlacesGateway + ?Sized,
{
    let predictions = match places.autocomplete(query).await {
        Ok(predictions) => predictions,
        Err(err) => {
            log::warn!("Autocomplete for '{query}' failed: {err}");
            return vec![];
        }
    };
    match bbox {
        Some(bbox) if enhanced => filter_predictions_by_bbox(places, predictions, bbox).await,
        _ => predictions,
    }
}
