use poem_openapi::Object;

use business::domain::recommendation::model::CartSnapshot;
use business::domain::recommendation::use_cases::list::ListRecommendationsParams;
use business::domain::shared::value_objects::{ProductId, UserId};

#[derive(Debug, Clone, Object)]
pub struct ListRecommendationsRequest {
    /// Caller identifier, only used for logging
    #[oai(default)]
    pub user_id: String,
    /// Product ids currently in the cart
    #[oai(default)]
    pub product_ids: Vec<String>,
}

impl From<ListRecommendationsRequest> for ListRecommendationsParams {
    fn from(request: ListRecommendationsRequest) -> Self {
        Self {
            user_id: UserId::new(request.user_id),
            cart: CartSnapshot::from_raw(request.product_ids),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ListRecommendationsResponse {
    /// Recommended product ids, at most 5, none of them in the cart
    pub product_ids: Vec<String>,
}

impl From<Vec<ProductId>> for ListRecommendationsResponse {
    fn from(ids: Vec<ProductId>) -> Self {
        Self {
            product_ids: ids.into_iter().map(String::from).collect(),
        }
    }
}
