use async_trait::async_trait;

use super::*;
use crate::{bbox::InBBox, entities::builders::*};

#[derive(Debug, Default)]
pub struct DummyPlaces {
    pub predictions: Vec<Prediction>,
    pub results: Vec<PlaceDetails>,
    pub details: Vec<PlaceDetails>,
    pub failing: bool,
}

#[async_trait]
impl PlacesGateway for DummyPlaces {
    async fn autocomplete(&self, _: &str) -> anyhow::Result<Vec<Prediction>> {
        if self.failing {
            anyhow::bail!("autocomplete unavailable");
        }
        Ok(self.predictions.clone())
    }

    async fn text_search(
        &self,
        _: &str,
        _: Option<LocationBias>,
    ) -> anyhow::Result<Vec<PlaceDetails>> {
        if self.failing {
            anyhow::bail!("text search unavailable");
        }
        Ok(self.results.clone())
    }

    async fn place_details(&self, place_id: &str) -> anyhow::Result<PlaceDetails> {
        self.details
            .iter()
            .find(|d| d.place_id.as_deref() == Some(place_id))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown place {place_id}"))
    }
}

fn prediction(place_id: &str, main_text: &str) -> Prediction {
    Prediction {
        place_id: place_id.into(),
        description: main_text.into(),
        main_text: main_text.into(),
        secondary_text: None,
    }
}

fn san_diego() -> MapBbox {
    MapBbox::new(
        MapPoint::from_lat_lng_deg(32.53, -117.30),
        MapPoint::from_lat_lng_deg(33.00, -116.90),
    )
}

fn taco_locations() -> Vec<Location> {
    vec![
        Location::build()
            .id("lowered")
            .name("Tacos Perla")
            .lat_lng(32.75, -117.13)
            .editorial(7.8)
            .finish(),
        Location::build()
            .id("unrated")
            .name("Taco Stand")
            .lat_lng(32.80, -117.25)
            .finish(),
        Location::build()
            .id("los-angeles")
            .name("Leo's Tacos")
            .lat_lng(34.05, -118.24)
            .editorial(9.9)
            .finish(),
        Location::build()
            .id("gordo")
            .name("Tacos El Gordo")
            .lat_lng(32.64, -117.08)
            .editorial(9.2)
            .finish(),
        Location::build()
            .id("sushi")
            .name("Sushi Ota")
            .lat_lng(32.80, -117.22)
            .tags(vec!["sushi"])
            .editorial(9.5)
            .finish(),
    ]
}

fn location_ids(suggestions: &[Suggestion]) -> Vec<&str> {
    suggestions
        .iter()
        .filter_map(|s| match &s.kind {
            SuggestionKind::Location { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect()
}

fn scores(suggestions: &[Suggestion]) -> Vec<f64> {
    suggestions
        .iter()
        .filter_map(|s| match &s.kind {
            SuggestionKind::Location {
                editorial_score, ..
            } => editorial_score.map(f64::from),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn tacos_in_san_diego() {
    let locations = taco_locations();
    let query = SearchQuery {
        text: "tacos".into(),
        bbox: Some(san_diego()),
        enhanced_predictions: false,
    };
    let corpus = SearchCorpus {
        tags: &[],
        locations: &locations,
    };
    let suggestions = search(&query, corpus, &DummyPlaces::default()).await;
    assert_eq!(location_ids(&suggestions), vec!["gordo", "lowered"]);
    assert_eq!(scores(&suggestions), vec![9.2, 7.8]);
}

#[tokio::test]
async fn empty_query_clears_everything() {
    let locations = taco_locations();
    let corpus = SearchCorpus {
        tags: &[],
        locations: &locations,
    };
    let query = SearchQuery {
        text: "  ".into(),
        ..Default::default()
    };
    assert!(search(&query, corpus, &DummyPlaces::default()).await.is_empty());
}

#[tokio::test]
async fn sections_are_merged_in_priority_order() {
    let locations = taco_locations();
    let tags = vec!["street-food".to_string(), "tacos".into(), "tacos-al-pastor".into()];
    let places = DummyPlaces {
        results: vec![PlaceDetails::build()
            .place_id("text-1")
            .name("Taqueria")
            .lat_lng(32.7, -117.1)
            .rating(4.5, 300)
            .finish()],
        predictions: vec![prediction("pred-1", "Tacos 1986")],
        ..Default::default()
    };
    let query = SearchQuery {
        text: "Tacos".into(),
        bbox: None,
        enhanced_predictions: false,
    };
    let corpus = SearchCorpus {
        tags: &tags,
        locations: &locations,
    };
    let suggestions = search(&query, corpus, &places).await;
    let kinds: Vec<_> = suggestions
        .iter()
        .map(|s| match s.kind {
            SuggestionKind::SearchAction { .. } => "action",
            SuggestionKind::Location { .. } => "location",
            SuggestionKind::Tag { .. } => "tag",
            SuggestionKind::TextSearch(_) => "text",
            SuggestionKind::Prediction(_) => "prediction",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "action", "location", "location", "location", "tag", "tag", "text", "prediction"
        ]
    );
    // without bounds the out-of-town location is included
    assert_eq!(location_ids(&suggestions), vec!["los-angeles", "gordo", "lowered"]);
    let indexes: Vec<_> = suggestions.iter().map(|s| s.index).collect();
    assert_eq!(indexes, (0..suggestions.len()).collect::<Vec<_>>());
    assert_eq!(
        suggestions[0].activation(),
        Activation::SearchText("Tacos".into())
    );
    assert_eq!(
        suggestions[4].activation(),
        Activation::FilterByTag("tacos".into())
    );
    assert_eq!(suggestions[6].activation(), Activation::ResolvePlace);
}

#[tokio::test]
async fn identical_inputs_give_identical_lists() {
    let locations = taco_locations();
    let tags = vec!["tacos".to_string()];
    let places = DummyPlaces {
        predictions: vec![prediction("a", "Tacos A"), prediction("b", "Tacos B")],
        ..Default::default()
    };
    let query = SearchQuery {
        text: "taco".into(),
        bbox: Some(san_diego()),
        enhanced_predictions: false,
    };
    let corpus = SearchCorpus {
        tags: &tags,
        locations: &locations,
    };
    let first = search(&query, corpus, &places).await;
    let second = search(&query, corpus, &places).await;
    assert_eq!(first, second);
}

#[test]
fn tier_beats_rating() {
    let results = vec![
        PlaceDetails::build().place_id("500").rating(5.0, 500).finish(),
        PlaceDetails::build().place_id("1200").rating(4.9, 1_200).finish(),
        PlaceDetails::build().place_id("6000").rating(4.1, 6_000).finish(),
        PlaceDetails::build().place_id("12000").rating(3.0, 12_000).finish(),
        PlaceDetails::build().place_id("12000-better").rating(4.0, 15_000).finish(),
    ];
    let ranked = rank_text_search_results(results, None);
    let ids: Vec<_> = ranked.iter().filter_map(|p| p.place_id.as_deref()).collect();
    assert_eq!(ids, vec!["12000-better", "12000", "6000", "1200", "500"]);
}

#[test]
fn text_search_results_outside_the_bbox_are_dropped() {
    let results = vec![
        PlaceDetails::build().place_id("la").lat_lng(34.05, -118.24).finish(),
        PlaceDetails::build().place_id("sd").lat_lng(32.71, -117.16).finish(),
        PlaceDetails::build().place_id("unknown-position").finish(),
    ];
    let bbox = san_diego();
    let ranked = rank_text_search_results(results, Some(&bbox));
    assert_eq!(ranked.len(), 1);
    assert!(ranked.iter().all(|p| p.in_bbox(&bbox)));

    let outside = vec![PlaceDetails::build().place_id("la").lat_lng(34.05, -118.24).finish()];
    assert!(rank_text_search_results(outside, Some(&bbox)).is_empty());
}

#[test]
fn sections_are_limited() {
    let vocabulary: Vec<String> = (0..8).map(|i| format!("taco-{i}")).collect();
    let tags: Vec<_> = match_tags("TACO", &vocabulary)
        .into_iter()
        .map(|t| Suggestion::tag(t))
        .collect();
    assert_eq!(tags.len(), 8);

    let locations: Vec<_> = (0..8)
        .map(|i| Location::build().name("Taco").editorial(f64::from(i)).finish())
        .collect();
    let locations: Vec<_> = match_locations("taco", &locations, None)
        .into_iter()
        .map(Suggestion::from)
        .collect();
    let merged = merge_sections(
        "taco",
        Sections {
            locations,
            tags,
            ..Default::default()
        },
    );
    assert_eq!(merged.len(), 1 + 2 * SECTION_LIMIT);
    assert_eq!(
        merged[SECTION_LIMIT + 1].activation(),
        Activation::FilterByTag("taco-0".into())
    );
    assert_eq!(
        merged[2 * SECTION_LIMIT].activation(),
        Activation::FilterByTag("taco-4".into())
    );
}

#[test]
fn locations_match_by_tag_and_keep_source_order_on_ties() {
    let locations = vec![
        Location::build().id("a").name("Ota").tags(vec!["sushi"]).editorial(8.0).finish(),
        Location::build().id("b").name("Sushi Tadokoro").editorial(8.0).finish(),
        Location::build().id("c").name("Nobu").tags(vec!["omakase"]).editorial(9.0).finish(),
    ];
    let ids: Vec<_> = match_locations("SUSHI", &locations, None)
        .into_iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn duplicates_keep_the_internal_entry() {
    let locations = vec![Location::build()
        .id("internal")
        .name("Addison")
        .lat_lng(32.95, -117.2)
        .place_id("ChIJ-addison")
        .editorial(10.5)
        .finish()];
    let places = DummyPlaces {
        results: vec![PlaceDetails::build()
            .place_id("ChIJ-addison")
            .name("Addison Restaurant")
            .lat_lng(32.95, -117.2)
            .finish()],
        predictions: vec![
            prediction(" ChIJ-addison ", "Addison"),
            prediction("ChIJ-other", "Addison Ave"),
        ],
        ..Default::default()
    };
    let query = SearchQuery {
        text: "addison".into(),
        ..Default::default()
    };
    let corpus = SearchCorpus {
        tags: &[],
        locations: &locations,
    };
    let suggestions = search(&query, corpus, &places).await;
    let place_ids: Vec<_> = suggestions.iter().filter_map(Suggestion::place_id).collect();
    assert_eq!(place_ids, vec!["ChIJ-addison", "ChIJ-other"]);
    assert!(matches!(suggestions[1].kind, SuggestionKind::Location { .. }));
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[2].index, 2);
}

#[tokio::test]
async fn repeated_places_make_room_in_their_section() {
    let locations: Vec<_> = (0..3)
        .map(|i| {
            Location::build()
                .id(&format!("internal-{i}"))
                .name(&format!("Taco {i}"))
                .place_id(&format!("known-{i}"))
                .editorial(9.0)
                .finish()
        })
        .collect();
    let predictions = (0..3)
        .map(|i| prediction(&format!("known-{i}"), "Taco"))
        .chain((0..6).map(|i| prediction(&format!("new-{i}"), "Taco")))
        .collect();
    let places = DummyPlaces {
        predictions,
        ..Default::default()
    };
    let query = SearchQuery {
        text: "taco".into(),
        ..Default::default()
    };
    let corpus = SearchCorpus {
        tags: &[],
        locations: &locations,
    };
    let suggestions = search(&query, corpus, &places).await;
    let predicted: Vec<_> = suggestions
        .iter()
        .filter(|s| matches!(s.kind, SuggestionKind::Prediction(_)))
        .filter_map(Suggestion::place_id)
        .collect();
    assert_eq!(predicted, vec!["new-0", "new-1", "new-2", "new-3", "new-4"]);
    assert_eq!(suggestions.len(), 1 + 3 + SECTION_LIMIT);
}

#[tokio::test]
async fn failing_sources_degrade_to_empty_sections() {
    let locations = taco_locations();
    let places = DummyPlaces {
        predictions: vec![prediction("a", "Tacos A")],
        failing: true,
        ..Default::default()
    };
    let query = SearchQuery {
        text: "tacos".into(),
        bbox: Some(san_diego()),
        enhanced_predictions: true,
    };
    let corpus = SearchCorpus {
        tags: &[],
        locations: &locations,
    };
    let suggestions = search(&query, corpus, &places).await;
    assert_eq!(suggestions.len(), 3);
    assert_eq!(location_ids(&suggestions), vec!["gordo", "lowered"]);
}

#[tokio::test]
async fn enhanced_predictions_are_restricted_to_the_bbox() {
    let places = DummyPlaces {
        predictions: vec![
            prediction("la", "Tacos LA"),
            prediction("sd", "Tacos SD"),
            prediction("unknown", "Tacos ?"),
        ],
        details: vec![
            PlaceDetails::build().place_id("la").lat_lng(34.05, -118.24).finish(),
            PlaceDetails::build().place_id("sd").lat_lng(32.71, -117.16).finish(),
        ],
        ..Default::default()
    };
    let bbox = san_diego();
    let enhanced = prediction_section(&places, "tacos", Some(&bbox), true).await;
    assert_eq!(enhanced, vec![prediction("sd", "Tacos SD")]);
    let plain = prediction_section(&places, "tacos", Some(&bbox), false).await;
    assert_eq!(plain.len(), 3);
    let unbounded = prediction_section(&places, "tacos", None, true).await;
    assert_eq!(unbounded.len(), 3);
}

#[tokio::test]
async fn selection_without_place_id_falls_back_to_local_fields() {
    let location = Location::build()
        .name("Tacos El Gordo")
        .address("689 H St, Chula Vista")
        .lat_lng(32.64, -117.08)
        .editorial(9.2)
        .finish();
    let suggestion = Suggestion::from(&location);
    let details = resolve_selection(&DummyPlaces::default(), &suggestion)
        .await
        .unwrap();
    assert_eq!(details.name, "Tacos El Gordo");
    assert_eq!(details.pos, Some(location.pos));
    assert_eq!(details.address.as_deref(), Some("689 H St, Chula Vista"));
    assert_eq!(details.place_id, None);
}

#[tokio::test]
async fn selection_prefers_canonical_details_and_survives_failures() {
    let places = DummyPlaces {
        details: vec![PlaceDetails::build()
            .place_id("known")
            .name("Canonical name")
            .lat_lng(32.7, -117.1)
            .finish()],
        ..Default::default()
    };
    let known = Suggestion::from(prediction("known", "Typed name"));
    let resolved = resolve_selection(&places, &known).await.unwrap();
    assert_eq!(resolved.name, "Canonical name");

    let unknown = Suggestion::from(prediction("missing", "Typed name"));
    let resolved = resolve_selection(&places, &unknown).await.unwrap();
    assert_eq!(resolved.name, "Typed name");
    assert_eq!(resolved.place_id.as_deref(), Some("missing"));

    assert!(resolve_selection(&places, &Suggestion::tag("tacos")).await.is_none());
}

#[test]
fn only_the_latest_ticket_is_applied() {
    let counter = SequenceCounter::default();
    let first = counter.issue();
    let second = counter.issue();
    assert!(!counter.is_latest(first));
    assert!(counter.is_latest(second));
    counter.invalidate();
    assert!(!counter.is_latest(second));
}
