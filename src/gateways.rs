use voyageur_core::gateways::places::{NoPlaces, PlacesGateway};
use voyageur_gateways::{google_places::GooglePlaces, michelin::MichelinGuide};

use crate::config;

pub fn places_gateway(cfg: Option<config::PlacesGateway>) -> Box<dyn PlacesGateway> {
    match cfg {
        Some(config::PlacesGateway::Google {
            api_key,
            api_base_url,
        }) => match api_base_url {
            Some(url) => Box::new(GooglePlaces::with_base_url(api_key, url)),
            None => Box::new(GooglePlaces::new(api_key)),
        },
        None => {
            log::warn!("No places gateway configured: external search is disabled");
            Box::new(NoPlaces)
        }
    }
}

pub fn guide_gateway(cfg: &config::Michelin) -> MichelinGuide {
    MichelinGuide::new(cfg.dataset.as_str())
}
