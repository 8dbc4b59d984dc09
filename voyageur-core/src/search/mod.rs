//! The search aggregator.
//!
//! A query is answered from four independent sources (internal tags,
//! rated internal locations, external text search and external
//! autocomplete) that are merged into a single, deduplicated list of
//! [`Suggestion`]s with a running index for keyboard navigation.

use futures::join;

use crate::{
    entities::{geo::*, id::*, location::*, place::*, rating::*},
    gateways::places::PlacesGateway,
};

mod merge;
mod resolve;
mod sequence;
mod sources;

pub use self::{merge::*, resolve::*, sequence::*, sources::*};

/// Maximum number of results per section.
pub const SECTION_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionKind {
    /// Search for the raw query text.
    SearchAction { query: String },
    Location {
        id: Id,
        pos: MapPoint,
        address: Option<String>,
        place_id: Option<String>,
        editorial_score: Option<EditorialScore>,
    },
    Tag { tag: String },
    TextSearch(PlaceDetails),
    Prediction(Prediction),
}

/// What happens when a suggestion is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    SearchText(String),
    FilterByTag(String),
    OpenLocation(Id),
    ResolvePlace,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Position in the merged list.
    pub index: usize,
    pub label: String,
    pub secondary_label: Option<String>,
    pub kind: SuggestionKind,
}

impl Suggestion {
    pub fn search_action(query: &str) -> Self {
        Self {
            index: 0,
            label: query.to_owned(),
            secondary_label: None,
            kind: SuggestionKind::SearchAction {
                query: query.to_owned(),
            },
        }
    }

    pub fn tag(tag: &str) -> Self {
        Self {
            index: 0,
            label: format!("#{tag}"),
            secondary_label: None,
            kind: SuggestionKind::Tag {
                tag: tag.to_owned(),
            },
        }
    }

    pub fn activation(&self) -> Activation {
        match &self.kind {
            SuggestionKind::SearchAction { query } => Activation::SearchText(query.clone()),
            SuggestionKind::Tag { tag } => Activation::FilterByTag(tag.clone()),
            SuggestionKind::Location { id, .. } => Activation::OpenLocation(id.clone()),
            SuggestionKind::TextSearch(_) | SuggestionKind::Prediction(_) => {
                Activation::ResolvePlace
            }
        }
    }

    /// The normalized place id, if the suggestion refers to a known place.
    pub fn place_id(&self) -> Option<&str> {
        let place_id = match &self.kind {
            SuggestionKind::Location { place_id, .. } => place_id.as_deref(),
            SuggestionKind::TextSearch(details) => details.place_id.as_deref(),
            SuggestionKind::Prediction(prediction) => Some(prediction.place_id.as_str()),
            SuggestionKind::SearchAction { .. } | SuggestionKind::Tag { .. } => None,
        };
        place_id.map(str::trim).filter(|id| !id.is_empty())
    }
}

impl From<&Location> for Suggestion {
    fn from(location: &Location) -> Self {
        Self {
            index: 0,
            label: location.name.clone(),
            secondary_label: location.address.clone(),
            kind: SuggestionKind::Location {
                id: location.id.clone(),
                pos: location.pos,
                address: location.address.clone(),
                place_id: location.external_ids.place_id.clone(),
                editorial_score: location.ratings.editorial,
            },
        }
    }
}

impl From<PlaceDetails> for Suggestion {
    fn from(details: PlaceDetails) -> Self {
        Self {
            index: 0,
            label: details.name.clone(),
            secondary_label: details.address.clone(),
            kind: SuggestionKind::TextSearch(details),
        }
    }
}

impl From<Prediction> for Suggestion {
    fn from(prediction: Prediction) -> Self {
        Self {
            index: 0,
            label: prediction.main_text.clone(),
            secondary_label: prediction.secondary_text.clone(),
            kind: SuggestionKind::Prediction(prediction),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub text: String,
    pub bbox: Option<MapBbox>,
    /// Fetch the details of every autocomplete candidate to
    /// drop those outside of the bbox.
    pub enhanced_predictions: bool,
}

/// The internal data a query is matched against.
#[derive(Debug, Clone, Copy)]
pub struct SearchCorpus<'a> {
    pub tags: &'a [String],
    pub locations: &'a [Location],
}

/// Queries all sources concurrently and merges their sections.
///
/// An empty query yields no suggestions at all.
pub async fn search<P>(query: &SearchQuery, corpus: SearchCorpus<'_>, places: &P) -> Vec<Suggestion>
where
    P: PlacesGateway + ?Sized,
{
    let text = query.text.trim();
    if text.is_empty() {
        return vec![];
    }
    let bbox = query.bbox.as_ref();
    let (locations, tags, text_search, predictions) = join!(
        async { match_locations(text, corpus.locations, bbox) },
        async { match_tags(text, corpus.tags) },
        text_search_section(places, text, bbox),
        prediction_section(places, text, bbox, query.enhanced_predictions),
    );
    let sections = Sections {
        locations: locations.into_iter().map(Suggestion::from).collect(),
        tags: tags.iter().map(|t| Suggestion::tag(t)).collect(),
        text_search: text_search.into_iter().map(Suggestion::from).collect(),
        predictions: predictions.into_iter().map(Suggestion::from).collect(),
    };
    merge_sections(text, sections)
}

#[cfg(test)]
pub(crate) mod tests;
