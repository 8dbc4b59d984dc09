use rocket::get;
use voyageur_core::search::SearchQuery;

use super::{util::parse_bbox, *};

#[get("/google/place/<place_id>")]
pub async fn get_place_details(
    db: &State<Connections>,
    places: &State<Places>,
    _access: PublicAccess,
    place_id: &str,
) -> Result<json::PlaceDetails> {
    let details = flows::place_details(db, &***places, place_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Place {place_id}")))?;
    Ok(Json(details.into()))
}

#[get("/search?<text>&<bbox>")]
pub async fn get_search(
    db: &State<Connections>,
    places: &State<Places>,
    cfg: &State<Cfg>,
    _access: PublicAccess,
    text: Option<&str>,
    bbox: Option<&str>,
) -> Result<Vec<json::Suggestion>> {
    let query = SearchQuery {
        text: text.unwrap_or_default().to_owned(),
        bbox: parse_bbox(bbox)?,
        enhanced_predictions: cfg.enhanced_predictions,
    };
    let suggestions = flows::search(db, &***places, &query).await;
    Ok(Json(
        suggestions.into_iter().map(to_json::suggestion).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn places() -> DummyPlaces {
        DummyPlaces(vec![PlaceDetails::build()
            .place_id("ChIJ-gordo")
            .name("Tacos El Gordo")
            .lat_lng(32.7157, -117.1611)
            .rating(4.6, 5000)
            .finish()])
    }

    #[test]
    fn proxy_place_details() {
        let (client, _, _) = setup_with_places(places());
        let res = client.get("/api/google/place/ChIJ-gordo").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let details: json::PlaceDetails = res.into_json().unwrap();
        assert_eq!(details.name, "Tacos El Gordo");
        assert_eq!(details.rating.map(|r| r.review_count), Some(5000));
    }

    #[test]
    fn unknown_places_fall_back_to_stored_locations() {
        let (client, db, _) = setup_with_places(places());
        create_location(
            &db,
            Location::build()
                .name("Las Cuatro Milpas")
                .place_id("ChIJ-milpas")
                .finish(),
        );
        let res = client.get("/api/google/place/ChIJ-milpas").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let details: json::PlaceDetails = res.into_json().unwrap();
        assert_eq!(details.name, "Las Cuatro Milpas");

        let res = client.get("/api/google/place/ChIJ-unknown").dispatch();
        assert_eq!(res.status(), Status::NotFound);
        test_json(&res);
    }

    #[test]
    fn search_merges_internal_and_external_sources() {
        let (client, db, _) = setup_with_places(places());
        create_location(
            &db,
            Location::build()
                .name("Tacos El Gordo")
                .lat_lng(32.7157, -117.1611)
                .tags(vec!["tacos"])
                .editorial(9.0)
                .place_id("ChIJ-gordo")
                .finish(),
        );
        db.exclusive()
            .unwrap()
            .create_tag_if_it_does_not_exist(&Tag { id: "tacos".into() })
            .unwrap();

        let res = client.get("/api/search?text=tacos").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let suggestions: Vec<json::Suggestion> = res.into_json().unwrap();
        assert!(matches!(
            suggestions[0].kind,
            json::SuggestionKind::SearchAction { .. }
        ));
        // the stored location and the identical text search result are merged
        let locations = suggestions
            .iter()
            .filter(|s| {
                matches!(
                    s.kind,
                    json::SuggestionKind::Location { .. } | json::SuggestionKind::TextSearch { .. }
                )
            })
            .count();
        assert_eq!(locations, 1);
        assert!(suggestions
            .iter()
            .any(|s| matches!(&s.kind, json::SuggestionKind::Tag { tag } if tag == "tacos")));
        for (i, s) in suggestions.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn search_without_text_yields_nothing() {
        let (client, _, _) = setup_with_places(places());
        let res = client.get("/api/search").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let suggestions: Vec<json::Suggestion> = res.into_json().unwrap();
        assert!(suggestions.is_empty());

        let res = client.get("/api/search?text=tacos&bbox=1,2").dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }
}
