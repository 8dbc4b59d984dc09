//! Google Places (legacy web service) adapter.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use voyageur_core::{
    entities::place::*,
    gateways::places::PlacesGateway,
};

mod model;


use self::model::*;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

const DETAILS_FIELDS: &str =
    "place_id,name,geometry,formatted_address,rating,user_ratings_total,photos,types";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Places request failed with status {status}: {message}")]
    Status { status: String, message: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct GooglePlaces {
    api_key: String,
    api_base_url: String,
    client: reqwest::Client,
}

impl GooglePlaces {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_owned();
        Self {
            api_key: api_key.into(),
            api_base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn get<T>(&self, endpoint: &str, params: &[(&str, String)]) -> Result<T, Error>
    where
        T: DeserializeOwned + HasStatus,
    {
        let url = format!("{}/place/{endpoint}/json", self.api_base_url);
        log::debug!("Requesting {url} with {params:?}");
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", &self.api_key)])
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        check_status(response.status(), response.error_message())?;
        Ok(response)
    }
}

/// `ZERO_RESULTS` is not an error.
fn check_status(status: &str, message: Option<&str>) -> Result<(), Error> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        _ => Err(Error::Status {
            status: status.to_owned(),
            message: message.unwrap_or_default().to_owned(),
        }),
    }
}

fn bias_params(bias: &LocationBias) -> [(&'static str, String); 2] {
    let (lat, lng) = bias.center.to_lat_lng_deg();
    [
        ("location", format!("{lat},{lng}")),
        ("radius", format!("{:.0}", bias.radius.to_meters())),
    ]
}

#[async_trait]
impl PlacesGateway for GooglePlaces {
    async fn autocomplete(&self, input: &str) -> anyhow::Result<Vec<Prediction>> {
        let response: AutocompleteResponse = self
            .get("autocomplete", &[("input", input.to_owned())])
            .await?;
        Ok(response.predictions.into_iter().map(Into::into).collect())
    }

    async fn text_search(
        &self,
        query: &str,
        bias: Option<LocationBias>,
    ) -> anyhow::Result<Vec<PlaceDetails>> {
        let mut params = vec![("query", query.to_owned())];
        if let Some(bias) = bias {
            params.extend(bias_params(&bias));
        }
        let response: TextSearchResponse = self.get("textsearch", &params).await?;
        Ok(response.results.into_iter().map(Into::into).collect())
    }

    async fn place_details(&self, place_id: &str) -> anyhow::Result<PlaceDetails> {
        let response: DetailsResponse = self
            .get(
                "details",
                &[
                    ("place_id", place_id.to_owned()),
                    ("fields", DETAILS_FIELDS.to_owned()),
                ],
            )
            .await?;
        let Some(result) = response.result else {
            anyhow::bail!("No details for place {place_id}");
        };
        Ok(result.into())
    }
}
