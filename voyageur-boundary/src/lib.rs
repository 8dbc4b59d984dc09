use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub id               : String,
    pub created          : i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_by       : Option<String>,
    pub name             : String,
    pub description      : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kind             : Option<LocationKind>,
    pub lat              : f64,
    pub lng              : f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address          : Option<String>,
    pub tags             : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub editorial_score  : Option<f64>,
    pub community_rating : CommunityRating,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub external_rating  : Option<ExternalRating>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub guide_award      : Option<GuideAward>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub place_id         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub guide_id         : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewLocation {
    pub name            : String,
    #[serde(default)]
    pub description     : String,
    pub kind            : Option<String>,
    pub lat             : f64,
    pub lng             : f64,
    pub address         : Option<String>,
    #[serde(default)]
    pub tags            : Vec<String>,
    pub editorial_score : Option<f64>,
    pub place_id        : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Restaurant,
    Hotel,
    Attraction,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "kebab-case")]
pub enum GuideAward {
    Selected,
    BibGourmand,
    OneStar,
    TwoStars,
    ThreeStars,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Passed as `sw_lat,sw_lng,ne_lat,ne_lng` in query strings.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct MapBbox {
    pub sw: MapPoint,
    pub ne: MapPoint,
}

/// Average and number of all personal ratings.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct CommunityRating {
    pub avg: f64,
    pub count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct ExternalRating {
    pub value: f64,
    pub review_count: u64,
}

/// Setting the score to `null` removes it.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct EditorialRating {
    pub score: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct NewPersonalRating {
    pub value: u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PersonalRating {
    pub location_id: String,
    pub value: u8,
    pub created: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display_name: Option<String>,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    User,
    Editor,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct RoleChange {
    pub role: UserRole,
}

/// Profile data that is not part of the identity token.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SignUp {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceDetails {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub place_id   : Option<String>,
    pub name       : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lat        : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lng        : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rating     : Option<ExternalRating>,
    #[serde(default)]
    pub photos     : Vec<String>,
    #[serde(default)]
    pub categories : Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Suggestion {
    pub index: usize,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secondary_label: Option<String>,
    #[serde(flatten)]
    pub kind: SuggestionKind,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SuggestionKind {
    SearchAction {
        query: String,
    },
    Location {
        id: String,
        lat: f64,
        lng: f64,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        address: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        place_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        editorial_score: Option<f64>,
    },
    Tag {
        tag: String,
    },
    TextSearch {
        place: PlaceDetails,
    },
    Prediction {
        place_id: String,
        description: String,
    },
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct GuideRestaurant {
    pub guide_id : String,
    pub name     : String,
    pub lat      : f64,
    pub lng      : f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cuisine  : Option<String>,
    pub award    : GuideAward,
    pub stars    : u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct GuideSyncReport {
    pub seen: usize,
    pub matched: usize,
    pub updated: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct PlaceIdDiscoveryReport {
    pub candidates: usize,
    pub discovered: usize,
    pub failed: usize,
}

/// Public client-side configuration of the map provider.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct MapsConfig {
    pub api_key: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
