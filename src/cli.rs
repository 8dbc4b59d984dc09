use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use voyageur_db_sqlite::{run_embedded_database_migrations, Connections};
use voyageur_webserver::Cfg;

use crate::{config::Config, gateways, recurring_sync};

#[derive(Debug, Parser)]
#[command(name = "voyageur", version, about = "Curated places and search aggregation")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

impl Args {
    fn apply(self, cfg: &mut Config) {
        if let Some(db_url) = self.db_url {
            cfg.db.conn_sqlite = db_url;
        }
        if self.enable_cors {
            cfg.webserver.enable_cors = true;
        }
    }
}

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    args.apply(&mut cfg);

    let jwt_secret = cfg
        .auth
        .jwt_secret
        .clone()
        .ok_or_else(|| anyhow!("Missing JWT secret"))?;

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    let web_cfg = Cfg {
        jwt_secret,
        anon_key: cfg.auth.anon_key.clone(),
        maps_api_key: cfg.maps_browser_key(),
        enhanced_predictions: cfg.search.enhanced_predictions,
    };

    if let Some(interval) = cfg.michelin.sync_interval {
        let connections = connections.clone();
        let guide = gateways::guide_gateway(&cfg.michelin);
        tokio::spawn(async move {
            recurring_sync::run(&connections, &guide, interval).await;
        });
    }

    voyageur_webserver::run(
        connections,
        cfg.webserver.enable_cors,
        web_cfg,
        gateways::places_gateway(cfg.places.gateway),
        Box::new(gateways::guide_gateway(&cfg.michelin)),
    )
    .await;
    Ok(())
}
