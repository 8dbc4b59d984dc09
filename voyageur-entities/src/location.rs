use strum::{AsRefStr, Display, EnumString};

use crate::{activity::*, geo::*, id::*, rating::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum LocationKind {
    Restaurant,
    Hotel,
    Attraction,
}

/// The independent scores a location may carry.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LocationRatings {
    pub editorial   : Option<EditorialScore>,
    pub community   : CommunityRating,
    pub external    : Option<ExternalRating>,
    pub guide_award : Option<GuideAward>,
}

/// Identifiers of the same location in third-party datasets.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExternalIds {
    pub place_id : Option<String>,
    pub guide_id : Option<String>,
}

/// A curated point of interest.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id           : Id,
    pub created      : Activity,
    pub name         : String,
    pub description  : String,
    pub kind         : Option<LocationKind>,
    pub pos          : MapPoint,
    pub address      : Option<String>,
    pub tags         : Vec<String>,
    pub ratings      : LocationRatings,
    pub external_ids : ExternalIds,
}

impl Location {
    /// Only locations with an editorial score take part in the
    /// internal search section.
    pub fn is_rated(&self) -> bool {
        self.ratings.editorial.is_some()
    }

    pub fn editorial_score(&self) -> Option<EditorialScore> {
        self.ratings.editorial
    }

    pub fn place_id(&self) -> Option<&str> {
        self.external_ids.place_id.as_deref()
    }
}
