//! # voyageur-client
//!
//! Typed HTTP client of the Le Voyageur API and the interactive
//! search session that drives a suggestion dropdown.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

mod api;
mod credentials;
mod search_session;

pub use self::{api::*, credentials::*, search_session::*};

pub use voyageur_boundary as json;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Fetch(#[from] reqwest::Error),

    #[error("{0:?}")]
    Api(#[from] json::Error),

    /// The session is gone and the user has to sign in again.
    #[error("Please sign in again")]
    Unauthenticated,

    /// Rejected before sending, because the cached role does not allow it.
    #[error("This requires the editor role")]
    Forbidden,
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        let status = response.status();
        match response.json::<json::Error>().await {
            Ok(err) => Err(err.into()),
            Err(_) => Err(json::Error {
                http_status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_owned(),
            }
            .into()),
        }
    }
}

fn is_unauthorized(response: &Response) -> bool {
    response.status() == StatusCode::UNAUTHORIZED
}

fn bbox_string(bbox: &json::MapBbox) -> String {
    let json::MapBbox { sw, ne } = bbox;
    format!("{},{},{},{}", sw.lat, sw.lng, ne.lat, ne.lng)
}
