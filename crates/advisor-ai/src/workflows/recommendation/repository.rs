use super::domain::Recommendation;
use crate::workflows::assessment::UserId;
use crate::workflows::store::StoreError;

/// Storage abstraction over the recommendation cache.
///
/// The cache is derived data with no history: `replace_for_user` is a
/// delete-then-insert of the user's active set. Concurrent regenerations
/// race and the last replacement wins, which is acceptable for disposable
/// output.
pub trait RecommendationRepository: Send + Sync {
    fn replace_for_user(
        &self,
        user_id: &UserId,
        recommendations: Vec<Recommendation>,
    ) -> Result<(), StoreError>;

    fn current_for_user(&self, user_id: &UserId) -> Result<Vec<Recommendation>, StoreError>;
}
