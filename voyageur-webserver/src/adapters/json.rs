pub use voyageur_boundary::*;

use crate::core::{entities as e, search, usecases};
use voyageur_application::prelude as flows;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_location(from: NewLocation) -> usecases::NewLocation {
        let NewLocation {
            name,
            description,
            kind,
            lat,
            lng,
            address,
            tags,
            editorial_score,
            place_id,
        } = from;
        usecases::NewLocation {
            name,
            description,
            kind,
            lat,
            lng,
            address,
            tags,
            editorial_score,
            place_id,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn suggestion(from: search::Suggestion) -> Suggestion {
        let search::Suggestion {
            index,
            label,
            secondary_label,
            kind,
        } = from;
        let kind = match kind {
            search::SuggestionKind::SearchAction { query } => SuggestionKind::SearchAction { query },
            search::SuggestionKind::Location {
                id,
                pos,
                address,
                place_id,
                editorial_score,
            } => {
                let (lat, lng) = pos.to_lat_lng_deg();
                SuggestionKind::Location {
                    id: id.into(),
                    lat,
                    lng,
                    address,
                    place_id,
                    editorial_score: editorial_score.map(f64::from),
                }
            }
            search::SuggestionKind::Tag { tag } => SuggestionKind::Tag { tag },
            search::SuggestionKind::TextSearch(details) => SuggestionKind::TextSearch {
                place: details.into(),
            },
            search::SuggestionKind::Prediction(e::place::Prediction {
                place_id,
                description,
                ..
            }) => SuggestionKind::Prediction {
                place_id,
                description,
            },
        };
        Suggestion {
            index,
            label,
            secondary_label,
            kind,
        }
    }

    pub fn guide_sync_report(from: flows::GuideSyncReport) -> GuideSyncReport {
        let flows::GuideSyncReport {
            seen,
            matched,
            updated,
        } = from;
        GuideSyncReport {
            seen,
            matched,
            updated,
        }
    }

    pub fn place_id_discovery_report(
        from: flows::PlaceIdDiscoveryReport,
    ) -> PlaceIdDiscoveryReport {
        let flows::PlaceIdDiscoveryReport {
            candidates,
            discovered,
            failed,
        } = from;
        PlaceIdDiscoveryReport {
            candidates,
            discovered,
            failed,
        }
    }
}
