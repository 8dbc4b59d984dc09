pub mod prelude {
    use async_trait::async_trait;
    use voyageur_core::gateways::{guide::GuideGateway, places::PlacesGateway};

    pub use voyageur_core::{
        db::*,
        entities::{
            builders::*, geo::*, location::*, place::*, rating::*, time::*, user::*,
        },
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    #[derive(Debug, Default)]
    pub struct DummyPlaces {
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
            Ok(vec![])
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

    pub struct DummyGuide(pub Vec<GuideRestaurant>);

    #[async_trait]
    impl GuideGateway for DummyGuide {
        async fn restaurants(&self) -> anyhow::Result<Vec<GuideRestaurant>> {
            Ok(self.0.clone())
        }
    }

    pub fn restaurant(
        guide_id: &str,
        name: &str,
        lat: f64,
        lng: f64,
        award: GuideAward,
    ) -> GuideRestaurant {
        GuideRestaurant {
            guide_id: guide_id.into(),
            name: name.into(),
            pos: MapPoint::from_lat_lng_deg(lat, lng),
            address: None,
            cuisine: None,
            award,
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            voyageur_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn add_user(&self, id: &str, role: Role) -> User {
            let user = User {
                id: id.into(),
                email: format!("{id}@example.com"),
                display_name: None,
                role,
                created_at: Timestamp::now(),
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .create_user(&user)
                .unwrap();
            user
        }

        pub fn create_location(&self, location: Location) {
            self.db_connections
                .exclusive()
                .unwrap()
                .create_location(location)
                .unwrap();
        }

        pub fn location(&self, id: &str) -> Location {
            self.db_connections
                .shared()
                .unwrap()
                .get_location(id)
                .unwrap()
        }

        pub fn all_locations(&self) -> Vec<Location> {
            self.db_connections
                .shared()
                .unwrap()
                .all_locations()
                .unwrap()
        }
    }
}

mod guide {
    use super::prelude::*;

    #[tokio::test]
    async fn look_up_guide_rating_and_restaurants() {
        let guide = DummyGuide(vec![
            restaurant("mirazur", "Mirazur", 43.7884, 7.5296, GuideAward::ThreeStars),
            restaurant("ami-jean", "Chez l'Ami Jean", 48.8589, 2.3060, GuideAward::BibGourmand),
        ]);
        let pos = MapPoint::from_lat_lng_deg(43.7885, 7.5297);
        let found = flows::guide_rating(&guide, "mirazur", pos).await.unwrap();
        assert_eq!(found.map(|r| r.award), Some(GuideAward::ThreeStars));
        assert!(flows::guide_rating(&guide, "Unknown", pos)
            .await
            .unwrap()
            .is_none());

        let paris: MapBbox = "48.80,2.25,48.90,2.42".parse().unwrap();
        let in_paris = flows::guide_restaurants(&guide, Some(&paris)).await.unwrap();
        assert_eq!(in_paris.len(), 1);
        assert_eq!(in_paris[0].guide_id, "ami-jean");
        assert_eq!(flows::guide_restaurants(&guide, None).await.unwrap().len(), 2);
    }
}
