use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{AssessmentId, AssessmentKind, AssessmentRecord, AssessmentSubmission, UserId};
use super::intake::{IntakeError, IntakeGuard};
use super::repository::AssessmentRepository;
use crate::workflows::store::StoreError;

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("assessment-{id:06}"))
}

/// Service composing the intake guard and the assessment log.
pub struct AssessmentService<A> {
    guard: IntakeGuard,
    repository: Arc<A>,
}

impl<A> AssessmentService<A>
where
    A: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<A>) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
        }
    }

    /// Validate a completed wizard payload and append the derived record.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let (profile, context) = self.guard.profile_from_submission(&submission)?;
        let score = self.guard.self_score(&submission);

        let record = AssessmentRecord {
            id: next_assessment_id(),
            user_id: submission.user_id,
            kind: submission.kind,
            answers: submission.answers,
            profile,
            context,
            score,
            submitted_at: Utc::now().naive_utc(),
        };

        let stored = self.repository.append(record)?;
        Ok(stored)
    }

    pub fn latest(
        &self,
        user_id: &UserId,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.latest_of_kind(user_id, kind)?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
