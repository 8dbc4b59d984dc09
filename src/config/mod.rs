use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "voyageur.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "JWT_SECRET";
const ENV_NAME_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_ANON_KEY: &str = "VOYAGEUR_ANON_KEY";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
    pub search: Search,
    pub places: Places,
    pub michelin: Michelin,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok());
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(db_url) = var(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Some(secret) = var(ENV_NAME_JWT_SECRET) {
            self.auth.jwt_secret = Some(secret);
        }
        if let Some(key) = var(ENV_NAME_ANON_KEY) {
            self.auth.anon_key = Some(key);
        }
        if let Some(api_key) = var(ENV_NAME_MAPS_API_KEY) {
            match &mut self.places.gateway {
                Some(PlacesGateway::Google { api_key: key, .. }) => *key = api_key,
                None => {
                    self.places.gateway = Some(PlacesGateway::Google {
                        api_key,
                        api_base_url: None,
                    });
                }
            }
        }
    }

    /// The key handed out to browsers for rendering maps.
    pub fn maps_browser_key(&self) -> Option<String> {
        self.places.browser_api_key.clone().or_else(|| {
            self.places
                .gateway
                .as_ref()
                .map(|PlacesGateway::Google { api_key, .. }| api_key.clone())
        })
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Auth {
    /// Shared secret of the identity provider
    pub jwt_secret: Option<String>,
    pub anon_key: Option<String>,
}

pub struct Search {
    pub enhanced_predictions: bool,
}

pub struct Places {
    pub gateway: Option<PlacesGateway>,
    pub browser_api_key: Option<String>,
}

pub enum PlacesGateway {
    Google {
        api_key: String,
        api_base_url: Option<String>,
    },
}

pub struct Michelin {
    /// File path or URL of the guide dataset
    pub dataset: String,
    pub sync_interval: Option<Duration>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            auth,
            search,
            places,
            michelin,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Auth {
            jwt_secret,
            anon_key,
        } = auth.unwrap_or_default();
        let auth = Auth {
            jwt_secret,
            anon_key,
        };

        let raw::Search {
            enhanced_predictions,
        } = search.unwrap_or_default();
        let search = Search {
            enhanced_predictions,
        };

        let raw::Google {
            api_key,
            browser_api_key,
            api_base_url,
        } = gateway.unwrap_or_default().google.unwrap_or_default();

        let places_gateway = match places.unwrap_or_default().gateway {
            Some(raw::PlacesGateway::Google) => {
                let gateway = api_key.map(|api_key| PlacesGateway::Google {
                    api_key,
                    api_base_url,
                });
                if gateway.is_some() {
                    log::info!("Use Google Places gateway");
                } else {
                    log::warn!("Missing API key of the Google Places gateway");
                }
                gateway
            }
            None => None,
        };
        let places = Places {
            gateway: places_gateway,
            browser_api_key,
        };

        let raw::Michelin {
            dataset,
            sync_interval,
        } = michelin.unwrap_or_default();
        let dataset = dataset.ok_or_else(|| anyhow!("Missing Michelin dataset"))?;
        if sync_interval.is_some_and(|interval| interval.is_zero()) {
            return Err(anyhow!("The sync interval must not be zero"));
        }
        let michelin = Michelin {
            dataset,
            sync_interval,
        };

        Ok(Self {
            db,
            webserver,
            auth,
            search,
            places,
            michelin,
        })
    }
}
