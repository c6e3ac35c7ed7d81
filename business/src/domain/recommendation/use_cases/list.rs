use async_trait::async_trait;

use crate::domain::recommendation::model::CartSnapshot;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct ListRecommendationsParams {
    pub user_id: UserId,
    pub cart: CartSnapshot,
}

/// Lists products related to a cart. Has no failure mode.
#[async_trait]
pub trait ListRecommendationsUseCase: Send + Sync {
    async fn execute(&self, params: ListRecommendationsParams) -> Vec<ProductId>;
}
