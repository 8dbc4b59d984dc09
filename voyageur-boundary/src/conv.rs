use voyageur_entities as e;

use super::*;

impl From<e::location::LocationKind> for LocationKind {
    fn from(from: e::location::LocationKind) -> Self {
        use e::location::LocationKind as E;
        match from {
            E::Restaurant => Self::Restaurant,
            E::Hotel => Self::Hotel,
            E::Attraction => Self::Attraction,
        }
    }
}

impl From<e::rating::GuideAward> for GuideAward {
    fn from(from: e::rating::GuideAward) -> Self {
        use e::rating::GuideAward as E;
        match from {
            E::Selected => Self::Selected,
            E::BibGourmand => Self::BibGourmand,
            E::OneStar => Self::OneStar,
            E::TwoStars => Self::TwoStars,
            E::ThreeStars => Self::ThreeStars,
        }
    }
}

impl From<GuideAward> for e::rating::GuideAward {
    fn from(from: GuideAward) -> Self {
        use GuideAward as B;
        match from {
            B::Selected => Self::Selected,
            B::BibGourmand => Self::BibGourmand,
            B::OneStar => Self::OneStar,
            B::TwoStars => Self::TwoStars,
            B::ThreeStars => Self::ThreeStars,
        }
    }
}

impl From<e::geo::MapPoint> for MapPoint {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::geo::MapBbox> for MapBbox {
    fn from(bbox: e::geo::MapBbox) -> Self {
        Self {
            sw: bbox.southwest().into(),
            ne: bbox.northeast().into(),
        }
    }
}

impl From<e::rating::CommunityRating> for CommunityRating {
    fn from(from: e::rating::CommunityRating) -> Self {
        let e::rating::CommunityRating { avg, count } = from;
        Self { avg, count }
    }
}

impl From<e::rating::ExternalRating> for ExternalRating {
    fn from(from: e::rating::ExternalRating) -> Self {
        let e::rating::ExternalRating {
            value,
            review_count,
        } = from;
        Self {
            value,
            review_count,
        }
    }
}

impl From<ExternalRating> for e::rating::ExternalRating {
    fn from(from: ExternalRating) -> Self {
        let ExternalRating {
            value,
            review_count,
        } = from;
        Self {
            value,
            review_count,
        }
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            created,
            name,
            description,
            kind,
            pos,
            address,
            tags,
            ratings,
            external_ids,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            created: created.at.as_millis(),
            created_by: created.by.map(Into::into),
            name,
            description,
            kind: kind.map(Into::into),
            lat,
            lng,
            address,
            tags,
            editorial_score: ratings.editorial.map(f64::from),
            community_rating: ratings.community.into(),
            external_rating: ratings.external.map(Into::into),
            guide_award: ratings.guide_award.map(Into::into),
            place_id: external_ids.place_id,
            guide_id: external_ids.guide_id,
        }
    }
}

impl From<e::rating::PersonalRating> for PersonalRating {
    fn from(from: e::rating::PersonalRating) -> Self {
        Self {
            location_id: from.location_id.into(),
            value: from.value.into(),
            created: from.created_at.as_millis(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role as E;
        match from {
            E::Guest => Self::Guest,
            E::User => Self::User,
            E::Editor => Self::Editor,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use UserRole as B;
        match from {
            B::Guest => Self::Guest,
            B::User => Self::User,
            B::Editor => Self::Editor,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            display_name,
            role,
            created_at: _,
        } = from;
        Self {
            id: id.into(),
            email,
            display_name,
            role: role.into(),
        }
    }
}

impl From<e::place::PlaceDetails> for PlaceDetails {
    fn from(from: e::place::PlaceDetails) -> Self {
        let e::place::PlaceDetails {
            place_id,
            name,
            pos,
            address,
            rating,
            photos,
            categories,
        } = from;
        let (lat, lng) = pos.map(|p| p.to_lat_lng_deg()).unzip();
        Self {
            place_id,
            name,
            lat,
            lng,
            address,
            rating: rating.map(Into::into),
            photos,
            categories,
        }
    }
}

impl From<PlaceDetails> for e::place::PlaceDetails {
    fn from(from: PlaceDetails) -> Self {
        let PlaceDetails {
            place_id,
            name,
            lat,
            lng,
            address,
            rating,
            photos,
            categories,
        } = from;
        let pos = lat
            .zip(lng)
            .and_then(|(lat, lng)| e::geo::MapPoint::try_from_lat_lng_deg(lat, lng));
        Self {
            place_id,
            name,
            pos,
            address,
            rating: rating.map(Into::into),
            photos,
            categories,
        }
    }
}

impl From<e::place::GuideRestaurant> for GuideRestaurant {
    fn from(from: e::place::GuideRestaurant) -> Self {
        let e::place::GuideRestaurant {
            guide_id,
            name,
            pos,
            address,
            cuisine,
            award,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            guide_id,
            name,
            lat,
            lng,
            address,
            cuisine,
            stars: award.stars(),
            award: award.into(),
        }
    }
}
