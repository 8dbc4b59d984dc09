pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{location_builder::*, place_details_builder::*};

pub mod location_builder {

    use super::*;
    use crate::{activity::*, geo::*, id::*, location::*, rating::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.location.description = desc.into();
            self
        }
        pub fn kind(mut self, kind: LocationKind) -> Self {
            self.location.kind = Some(kind);
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn address(mut self, address: &str) -> Self {
            self.location.address = Some(address.into());
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.location.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn editorial(mut self, score: f64) -> Self {
            self.location.ratings.editorial = Some(score.into());
            self
        }
        pub fn external(mut self, value: f64, review_count: u64) -> Self {
            self.location.ratings.external = Some(ExternalRating {
                value,
                review_count,
            });
            self
        }
        pub fn guide_award(mut self, award: GuideAward) -> Self {
            self.location.ratings.guide_award = Some(award);
            self
        }
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.location.external_ids.place_id = Some(place_id.into());
            self
        }
        pub fn guide_id(mut self, guide_id: &str) -> Self {
            self.location.external_ids.guide_id = Some(guide_id.into());
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.location.created.by = Some(user_id.into());
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    created: Activity::now(None),
                    name: "".into(),
                    description: "".into(),
                    kind: None,
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    address: None,
                    tags: vec![],
                    ratings: LocationRatings::default(),
                    external_ids: ExternalIds::default(),
                },
            }
        }
    }

    #[test]
    fn rated_locations() {
        assert!(!Location::build().finish().is_rated());
        assert!(Location::build().editorial(0.0).finish().is_rated());
        assert_eq!(
            Location::build().place_id("ChIJ").finish().place_id(),
            Some("ChIJ")
        );
    }
}

pub mod place_details_builder {

    use super::*;
    use crate::{geo::*, place::*, rating::*};

    #[derive(Debug)]
    pub struct PlaceDetailsBuild {
        details: PlaceDetails,
    }

    impl PlaceDetailsBuild {
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.details.place_id = Some(place_id.into());
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.details.name = name.into();
            self
        }
        pub fn lat_lng(mut self, lat: f64, lng: f64) -> Self {
            self.details.pos = Some(MapPoint::from_lat_lng_deg(lat, lng));
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.details.address = Some(address.into());
            self
        }
        pub fn rating(mut self, value: f64, review_count: u64) -> Self {
            self.details.rating = Some(ExternalRating {
                value,
                review_count,
            });
            self
        }
        pub fn finish(self) -> PlaceDetails {
            self.details
        }
    }

    impl Builder for PlaceDetails {
        type Build = PlaceDetailsBuild;
        fn build() -> Self::Build {
            PlaceDetailsBuild {
                details: PlaceDetails::default(),
            }
        }
    }
}
