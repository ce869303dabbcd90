use super::domain::{AssessmentKind, AssessmentRecord, UserId};
use crate::workflows::store::StoreError;

/// Append-only storage of completed assessments.
///
/// Reads are "most recent" queries; superseded records stay in the log but
/// are never returned by the latest accessors.
pub trait AssessmentRepository: Send + Sync {
    fn append(&self, record: AssessmentRecord) -> Result<AssessmentRecord, StoreError>;
    fn latest_of_kind(
        &self,
        user_id: &UserId,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentRecord>, StoreError>;
    fn latest_for_user(&self, user_id: &UserId) -> Result<Option<AssessmentRecord>, StoreError>;
}
