//! Dining guide dataset loaded from a JSON file or URL.
//!
//! The dataset is a JSON array of restaurants:
//!
//! ```json
//! [{ "id": "…", "name": "…", "latitude": 48.85, "longitude": 2.35,
//!    "address": "…", "cuisine": "…", "award": "1 Star" }]
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use voyageur_core::{
    entities::{geo::MapPoint, place::GuideRestaurant, rating::GuideAward},
    gateways::guide::GuideGateway,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    File(PathBuf),
}

impl From<&str> for DatasetSource {
    fn from(from: &str) -> Self {
        if from.starts_with("http://") || from.starts_with("https://") {
            Self::Url(from.to_owned())
        } else {
            Self::File(from.into())
        }
    }
}

#[derive(Debug, Clone)]
pub struct MichelinGuide {
    source: DatasetSource,
    client: reqwest::Client,
}

impl MichelinGuide {
    pub fn new(source: impl Into<DatasetSource>) -> Self {
        Self {
            source: source.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn load_raw(&self) -> Result<Vec<RawRestaurant>> {
        match &self.source {
            DatasetSource::Url(url) => {
                log::debug!("Downloading guide dataset from {url}");
                Ok(self
                    .client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .json()
                    .await?)
            }
            DatasetSource::File(path) => {
                log::debug!("Reading guide dataset from {}", path.display());
                let bytes = tokio::fs::read(path).await?;
                parse_dataset(&bytes)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRestaurant {
    id: String,
    name: String,
    latitude: f64,
    longitude: f64,
    address: Option<String>,
    cuisine: Option<String>,
    award: String,
}

fn parse_dataset(bytes: &[u8]) -> Result<Vec<RawRestaurant>> {
    serde_json::from_slice(bytes).map_err(Into::into)
}

fn parse_award(s: &str) -> Option<GuideAward> {
    let award = match s.trim().to_lowercase().as_str() {
        "3 stars" | "three-stars" => GuideAward::ThreeStars,
        "2 stars" | "two-stars" => GuideAward::TwoStars,
        "1 star" | "one-star" => GuideAward::OneStar,
        "bib gourmand" | "bib-gourmand" => GuideAward::BibGourmand,
        "selected restaurants" | "selected" => GuideAward::Selected,
        _ => return None,
    };
    Some(award)
}

impl TryFrom<RawRestaurant> for GuideRestaurant {
    type Error = anyhow::Error;
    fn try_from(from: RawRestaurant) -> Result<Self> {
        let RawRestaurant {
            id,
            name,
            latitude,
            longitude,
            address,
            cuisine,
            award,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(latitude, longitude)
            .ok_or_else(|| anyhow!("Invalid position of restaurant {id}"))?;
        let award =
            parse_award(&award).ok_or_else(|| anyhow!("Invalid award of restaurant {id}: {award}"))?;
        Ok(Self {
            guide_id: id,
            name,
            pos,
            address,
            cuisine,
            award,
        })
    }
}

/// Invalid entries are skipped.
fn convert_restaurants(raw: Vec<RawRestaurant>) -> Vec<GuideRestaurant> {
    raw.into_iter()
        .filter_map(|r| {
            GuideRestaurant::try_from(r)
                .inspect_err(|err| log::warn!("Skipping guide entry: {err}"))
                .ok()
        })
        .collect()
}

#[async_trait]
impl GuideGateway for MichelinGuide {
    async fn restaurants(&self) -> Result<Vec<GuideRestaurant>> {
        let restaurants = convert_restaurants(self.load_raw().await?);
        log::info!("Loaded {} restaurants from the guide", restaurants.len());
        Ok(restaurants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {
            "id": "mirazur",
            "name": "Mirazur",
            "latitude": 43.7884,
            "longitude": 7.5296,
            "address": "30 avenue Aristide Briand, Menton",
            "cuisine": "Creative",
            "award": "3 Stars"
        },
        {
            "id": "broken",
            "name": "Nowhere",
            "latitude": 120.0,
            "longitude": 0.0,
            "award": "1 Star"
        },
        {
            "id": "chez-l-ami",
            "name": "Chez l'Ami Jean",
            "latitude": 48.8589,
            "longitude": 2.3060,
            "award": "Bib Gourmand"
        }
    ]"#;

    #[test]
    fn detect_dataset_source() {
        assert_eq!(
            DatasetSource::from("https://example.com/guide.json"),
            DatasetSource::Url("https://example.com/guide.json".into())
        );
        assert_eq!(
            DatasetSource::from("data/guide.json"),
            DatasetSource::File("data/guide.json".into())
        );
    }

    #[test]
    fn parse_awards() {
        assert_eq!(parse_award("1 Star"), Some(GuideAward::OneStar));
        assert_eq!(parse_award(" two-stars "), Some(GuideAward::TwoStars));
        assert_eq!(parse_award("Selected Restaurants"), Some(GuideAward::Selected));
        assert_eq!(parse_award("Green Star"), None);
    }

    #[test]
    fn skip_invalid_restaurants() {
        let restaurants = convert_restaurants(parse_dataset(DATASET.as_bytes()).unwrap());
        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[0].guide_id, "mirazur");
        assert_eq!(restaurants[0].award, GuideAward::ThreeStars);
        assert_eq!(restaurants[1].award, GuideAward::BibGourmand);
        assert_eq!(restaurants[1].address, None);
    }

    #[tokio::test]
    async fn load_restaurants_from_file() {
        let path = std::env::temp_dir().join(format!("guide-{}.json", std::process::id()));
        tokio::fs::write(&path, DATASET).await.unwrap();
        let guide = MichelinGuide::new(DatasetSource::File(path.clone()));
        let restaurants = guide.restaurants().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(restaurants.len(), 2);
    }
}
