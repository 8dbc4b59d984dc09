use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{id::*, time::*};

/// Curated score assigned by an editor.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct EditorialScore(f64);

impl EditorialScore {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(11.0)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }
}

impl From<f64> for EditorialScore {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<EditorialScore> for f64 {
    fn from(from: EditorialScore) -> Self {
        from.0
    }
}

/// A single user's own rating of a location.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct PersonalRatingValue(u8);

impl PersonalRatingValue {
    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(10)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<u8> for PersonalRatingValue {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<PersonalRatingValue> for u8 {
    fn from(from: PersonalRatingValue) -> Self {
        from.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalRating {
    pub location_id : Id,
    pub user_id     : Id,
    pub value       : PersonalRatingValue,
    pub created_at  : Timestamp,
}

/// Average of all personal ratings of a location.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CommunityRating {
    pub avg: f64,
    pub count: u64,
}

impl CommunityRating {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommunityRatingBuilder {
    acc: u64,
    cnt: u64,
}

impl CommunityRatingBuilder {
    pub fn add(&mut self, val: PersonalRatingValue) {
        debug_assert!(val.is_valid());
        self.acc += u64::from(val.0);
        self.cnt += 1;
    }

    pub fn build(self) -> CommunityRating {
        if self.cnt == 0 {
            return CommunityRating::default();
        }
        CommunityRating {
            avg: self.acc as f64 / self.cnt as f64,
            count: self.cnt,
        }
    }
}

impl std::ops::AddAssign<PersonalRatingValue> for CommunityRatingBuilder {
    fn add_assign(&mut self, rhs: PersonalRatingValue) {
        self.add(rhs);
    }
}

/// Popularity bucket derived from the number of reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PopularityTier(u8);

impl PopularityTier {
    pub fn from_review_count(review_count: u64) -> Self {
        match review_count {
            10_000.. => Self(4),
            5_000.. => Self(3),
            1_000.. => Self(2),
            _ => Self(1),
        }
    }
}

impl From<PopularityTier> for u8 {
    fn from(from: PopularityTier) -> Self {
        from.0
    }
}

/// Rating of an external review aggregator (0–5).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ExternalRating {
    pub value: f64,
    pub review_count: u64,
}

impl ExternalRating {
    pub const MAX_VALUE: f64 = 5.0;

    pub fn is_valid(&self) -> bool {
        (0.0..=Self::MAX_VALUE).contains(&self.value)
    }

    pub fn tier(&self) -> PopularityTier {
        PopularityTier::from_review_count(self.review_count)
    }
}

/// Distinction awarded by the dining guide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum GuideAward {
    Selected,
    BibGourmand,
    OneStar,
    TwoStars,
    ThreeStars,
}

impl GuideAward {
    pub const fn stars(self) -> u8 {
        match self {
            Self::Selected | Self::BibGourmand => 0,
            Self::OneStar => 1,
            Self::TwoStars => 2,
            Self::ThreeStars => 3,
        }
    }
}
