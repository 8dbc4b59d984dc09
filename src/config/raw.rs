use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("voyageur.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub auth: Option<Auth>,
    pub search: Option<Search>,
    pub places: Option<Places>,
    pub michelin: Option<Michelin>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Auth {
    pub jwt_secret: Option<String>,
    pub anon_key: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Search {
    pub enhanced_predictions: bool,
}

impl Default for Search {
    fn default() -> Self {
        Config::default().search.expect("Search configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Places {
    pub gateway: Option<PlacesGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacesGateway {
    Google,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Michelin {
    pub dataset: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub sync_interval: Option<Duration>,
}

impl Default for Michelin {
    fn default() -> Self {
        Config::default()
            .michelin
            .expect("Michelin configuration")
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google: Option<Google>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Google {
    pub api_key: Option<String>,
    pub browser_api_key: Option<String>,
    pub api_base_url: Option<String>,
}
