use async_trait::async_trait;

use crate::entities::place::GuideRestaurant;

#[async_trait]
pub trait GuideGateway: Send + Sync {
    /// Loads the complete dining guide dataset.
    async fn restaurants(&self) -> anyhow::Result<Vec<GuideRestaurant>>;
}
