use voyageur_core::{
    gateways::places::PlacesGateway,
    search::{self as aggregator, SearchCorpus, SearchQuery, Suggestion},
};

use super::*;
use crate::entities::location::Location;

/// Everything the internal sources match against.
///
/// A failing store degrades to an empty corpus.
fn load_search_corpus(connections: &sqlite::Connections) -> (Vec<String>, Vec<Location>) {
    let db = match connections.shared() {
        Ok(db) => db,
        Err(err) => {
            log::warn!("Searching without internal data: {err}");
            return Default::default();
        }
    };
    let tags = usecases::load_tags(&db).unwrap_or_else(|err| {
        log::warn!("Failed to load tags: {err}");
        vec![]
    });
    let locations = usecases::load_locations(&db).unwrap_or_else(|err| {
        log::warn!("Failed to load locations: {err}");
        vec![]
    });
    (tags, locations)
}

pub async fn search(
    connections: &sqlite::Connections,
    places: &dyn PlacesGateway,
    query: &SearchQuery,
) -> Vec<Suggestion> {
    if query.text.trim().is_empty() {
        return vec![];
    }
    let (tags, locations) = load_search_corpus(connections);
    let corpus = SearchCorpus {
        tags: &tags,
        locations: &locations,
    };
    aggregator::search(query, corpus, places).await
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use voyageur_core::search::{SearchQuery, SuggestionKind};

    #[tokio::test]
    async fn search_stored_locations_and_tags() {
        let fixture = BackendFixture::new();
        fixture.add_user("editor", Role::Editor);
        for (name, score) in [("Tacos El Gordo", 7.8), ("Las Cuatro Milpas", 9.2)] {
            flows::create_location(
                &fixture.db_connections,
                "editor",
                usecases::NewLocation {
                    name: name.into(),
                    lat: 32.70,
                    lng: -117.15,
                    tags: vec!["tacos".into()],
                    editorial_score: Some(score),
                    ..Default::default()
                },
            )
            .unwrap();
        }
        let query = SearchQuery {
            text: "taco".into(),
            ..Default::default()
        };
        let suggestions = flows::search(&fixture.db_connections, &DummyPlaces::default(), &query).await;
        let labels: Vec<_> = suggestions.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["taco", "Las Cuatro Milpas", "Tacos El Gordo", "#tacos"]
        );
        assert!(matches!(
            suggestions[0].kind,
            SuggestionKind::SearchAction { .. }
        ));
        assert_eq!(suggestions[3].index, 3);
    }

    #[tokio::test]
    async fn blank_query() {
        let fixture = BackendFixture::new();
        let query = SearchQuery {
            text: "  ".into(),
            ..Default::default()
        };
        assert!(flows::search(&fixture.db_connections, &DummyPlaces::default(), &query)
            .await
            .is_empty());
    }
}
