use rocket::{config::Config as RocketCfg, Rocket, Route};
use voyageur_core::gateways::{guide::GuideGateway, places::PlacesGateway};
use voyageur_db_sqlite::Connections;

pub mod api;
mod guards;
pub mod jwt;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Shared secret of the identity provider
    pub jwt_secret: String,
    /// Key that grants access to public reads
    pub anon_key: Option<String>,
    /// Browser key of the map provider
    pub maps_api_key: Option<String>,
    /// Drop autocomplete candidates outside of the bbox
    pub enhanced_predictions: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    places: Box<dyn PlacesGateway>,
    guide: Box<dyn GuideGateway>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { places, guide } = gateways;

    let jwt_state = jwt::JwtState::new(&cfg.jwt_secret);
    if cfg.anon_key.is_some() {
        info!("Public reads require the anonymous key or a valid token");
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(guards::Places(places))
        .manage(guards::Guide(guide))
        .manage(cfg);

    for (m, r) in mounts {
        instance = instance.register(m, api::catchers()).mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: Connections,
    enable_cors: bool,
    cfg: Cfg,
    places: Box<dyn PlacesGateway>,
    guide: Box<dyn GuideGateway>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { places, guide };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
