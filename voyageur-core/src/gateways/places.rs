use async_trait::async_trait;

use crate::entities::place::*;

/// Third-party place search (autocomplete, text search and details).
///
/// Every operation is best-effort: callers are expected to fall back
/// to what they already know when a call fails.
#[async_trait]
pub trait PlacesGateway: Send + Sync {
    async fn autocomplete(&self, input: &str) -> anyhow::Result<Vec<Prediction>>;

    async fn text_search(
        &self,
        query: &str,
        bias: Option<LocationBias>,
    ) -> anyhow::Result<Vec<PlaceDetails>>;

    async fn place_details(&self, place_id: &str) -> anyhow::Result<PlaceDetails>;
}

/// A gateway without any backing service, used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlaces;

#[async_trait]
impl PlacesGateway for NoPlaces {
    async fn autocomplete(&self, _: &str) -> anyhow::Result<Vec<Prediction>> {
        Ok(vec![])
    }

    async fn text_search(
        &self,
        _: &str,
        _: Option<LocationBias>,
    ) -> anyhow::Result<Vec<PlaceDetails>> {
        Ok(vec![])
    }

    async fn place_details(&self, place_id: &str) -> anyhow::Result<PlaceDetails> {
        anyhow::bail!("No places service available to look up {place_id}")
    }
}
