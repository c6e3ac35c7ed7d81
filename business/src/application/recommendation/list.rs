use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recommendation::engine::RecommendationEngine;
use crate::domain::recommendation::use_cases::list::{
    ListRecommendationsParams, ListRecommendationsUseCase,
};
use crate::domain::shared::value_objects::ProductId;

/// Maximum number of products returned per request.
pub const MAX_RECOMMENDATIONS: usize = 5;

pub struct ListRecommendationsUseCaseImpl {
    pub engine: Arc<RecommendationEngine>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListRecommendationsUseCase for ListRecommendationsUseCaseImpl {
    async fn execute(&self, params: ListRecommendationsParams) -> Vec<ProductId> {
        self.logger.debug(&format!(
            "Listing recommendations for user {} with {} cart items",
            params.user_id,
            params.cart.len()
        ));

        let recommendations = self.engine.recommend(&params.cart, MAX_RECOMMENDATIONS);

        self.logger.info(&format!(
            "Returning {} recommendations for user {}",
            recommendations.len(),
            params.user_id
        ));

        recommendations
    }
}
