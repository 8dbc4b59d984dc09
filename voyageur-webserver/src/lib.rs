#[macro_use]
extern crate log;

use voyageur_core::gateways::{guide::GuideGateway, places::PlacesGateway};
use voyageur_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    places: Box<dyn PlacesGateway>,
    guide: Box<dyn GuideGateway>,
) {
    web::run(connections, enable_cors, cfg, places, guide).await;
}
