use std::collections::HashSet;

use super::{Suggestion, SECTION_LIMIT};

/// Suggestions per source, each already filtered and ordered.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    pub locations: Vec<Suggestion>,
    pub tags: Vec<Suggestion>,
    pub text_search: Vec<Suggestion>,
    pub predictions: Vec<Suggestion>,
}

/// Concatenates the sections in their fixed priority behind the
/// search action and assigns the running index.
///
/// Places that already appeared in an earlier section are skipped before
/// a section is limited to [`SECTION_LIMIT`] entries, so a repeated place
/// makes room for the next one of the same source.
pub fn merge_sections(query: &str, sections: Sections) -> Vec<Suggestion> {
    let Sections {
        locations,
        tags,
        text_search,
        predictions,
    } = sections;
    let mut seen_place_ids = HashSet::new();
    let mut unseen = |s: &Suggestion| match s.place_id() {
        Some(place_id) => seen_place_ids.insert(place_id.to_owned()),
        None => true,
    };
    let mut merged = vec![Suggestion::search_action(query)];
    for section in [locations, tags, text_search, predictions] {
        merged.extend(
            section
                .into_iter()
                .filter(&mut unseen)
                .take(SECTION_LIMIT),
        );
    }
    merged
        .into_iter()
        .enumerate()
        .map(|(index, suggestion)| Suggestion { index, ..suggestion })
        .collect()
}
