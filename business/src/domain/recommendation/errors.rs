/// Faults raised while building the affinity table at start-up.
/// Recommendation requests themselves never fail.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecommendationError {
    #[error("recommendation.empty_catalog")]
    EmptyCatalog,
    #[error("recommendation.blank_product_id: {0}")]
    BlankProductId(String),
}
