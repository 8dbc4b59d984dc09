mod cli;
mod config;
mod gateways;
mod recurring_sync;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run().await
}
