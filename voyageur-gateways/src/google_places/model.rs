use serde::Deserialize;
use voyageur_core::entities::{geo::MapPoint, place::*, rating::ExternalRating};

pub(super) trait HasStatus {
    fn status(&self) -> &str;
    fn error_message(&self) -> Option<&str>;
}

macro_rules! has_status {
    ($($response:ty),+) => {
        $(
            impl HasStatus for $response {
                fn status(&self) -> &str {
                    &self.status
                }
                fn error_message(&self) -> Option<&str> {
                    self.error_message.as_deref()
                }
            }
        )+
    };
}

has_status!(AutocompleteResponse, TextSearchResponse, DetailsResponse);

#[derive(Debug, Deserialize)]
pub(super) struct AutocompleteResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub predictions: Vec<RawPrediction>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TextSearchResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<RawPlace>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailsResponse {
    pub status: String,
    pub error_message: Option<String>,
    pub result: Option<RawPlace>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawPrediction {
    pub place_id: String,
    pub description: String,
    pub structured_formatting: Option<StructuredFormatting>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StructuredFormatting {
    pub main_text: String,
    pub secondary_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawPlace {
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub geometry: Option<Geometry>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub(super) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct Photo {
    pub photo_reference: String,
}

impl From<RawPrediction> for Prediction {
    fn from(from: RawPrediction) -> Self {
        let RawPrediction {
            place_id,
            description,
            structured_formatting,
        } = from;
        let (main_text, secondary_text) = match structured_formatting {
            Some(f) => (f.main_text, f.secondary_text),
            None => (description.clone(), None),
        };
        Self {
            place_id,
            description,
            main_text,
            secondary_text,
        }
    }
}

impl From<RawPlace> for PlaceDetails {
    fn from(from: RawPlace) -> Self {
        let RawPlace {
            place_id,
            name,
            geometry,
            formatted_address,
            rating,
            user_ratings_total,
            photos,
            types,
        } = from;
        let pos = geometry
            .and_then(|g| MapPoint::try_from_lat_lng_deg(g.location.lat, g.location.lng));
        let rating = rating
            .map(|value| ExternalRating {
                value,
                review_count: user_ratings_total.unwrap_or_default(),
            })
            .filter(ExternalRating::is_valid);
        Self {
            place_id,
            name,
            pos,
            address: formatted_address,
            rating,
            photos: photos.into_iter().map(|p| p.photo_reference).collect(),
            categories: types,
        }
    }
}
