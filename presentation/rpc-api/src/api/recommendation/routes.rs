use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recommendation::use_cases::list::ListRecommendationsUseCase;

use crate::api::recommendation::dto::{ListRecommendationsRequest, ListRecommendationsResponse};
use crate::api::tags::ApiTags;

/// Service name used for health reporting.
pub const SERVICE_NAME: &str = "RecommendationService";

pub struct RecommendationApi {
    list_use_case: Arc<dyn ListRecommendationsUseCase>,
}

impl RecommendationApi {
    pub fn new(list_use_case: Arc<dyn ListRecommendationsUseCase>) -> Self {
        Self { list_use_case }
    }
}

/// Recommendation API
///
/// Related products for the current shopping cart.
#[OpenApi]
impl RecommendationApi {
    /// List recommendations
    ///
    /// Returns up to 5 products related to the cart, never one already in it.
    /// Falls back to the whole catalog when no cart item has known relations.
    #[oai(
        path = "/RecommendationService/ListRecommendations",
        method = "post",
        tag = "ApiTags::Recommendations"
    )]
    async fn list_recommendations(
        &self,
        body: Json<ListRecommendationsRequest>,
    ) -> Json<ListRecommendationsResponse> {
        let recommendations = self.list_use_case.execute(body.0.into()).await;
        Json(recommendations.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::recommendation::use_cases::list::ListRecommendationsParams;
    use business::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub ListUseCase {}

        #[async_trait]
        impl ListRecommendationsUseCase for ListUseCase {
            async fn execute(&self, params: ListRecommendationsParams) -> Vec<ProductId>;
        }
    }

    #[tokio::test]
    async fn should_pass_cart_and_user_to_use_case() {
        let mut use_case = MockListUseCase::new();
        use_case
            .expect_execute()
            .withf(|params| params.user_id.as_str() == "u-1" && params.cart.len() == 2)
            .times(1)
            .returning(|_| vec![ProductId::parse("9SIQT8TOJO").unwrap()]);

        let api = RecommendationApi::new(Arc::new(use_case));

        let Json(response) = api
            .list_recommendations(Json(ListRecommendationsRequest {
                user_id: "u-1".to_string(),
                product_ids: vec!["LS4PSXUNUM".to_string(), "6E92ZMYYFZ".to_string()],
            }))
            .await;

        assert_eq!(response.product_ids, vec!["9SIQT8TOJO".to_string()]);
    }

    #[tokio::test]
    async fn should_answer_empty_cart_without_error() {
        let mut use_case = MockListUseCase::new();
        use_case.expect_execute().returning(|_| vec![]);

        let api = RecommendationApi::new(Arc::new(use_case));

        let Json(response) = api
            .list_recommendations(Json(ListRecommendationsRequest {
                user_id: String::new(),
                product_ids: vec![],
            }))
            .await;

        assert!(response.product_ids.is_empty());
    }
}
