use std::time::Duration;

use voyageur_application::prelude::sync_guide_ratings;
use voyageur_core::gateways::guide::GuideGateway;
use voyageur_db_sqlite::Connections;

pub async fn run(connections: &Connections, guide: &dyn GuideGateway, interval: Duration) {
    log::info!("Synchronizing guide ratings every {}s", interval.as_secs());
    let mut interval = tokio::time::interval(interval);
    loop {
        interval.tick().await;
        if let Err(err) = sync_guide_ratings(connections, guide).await {
            log::warn!("Guide ratings could not be synchronized: {err}");
        }
    }
}
