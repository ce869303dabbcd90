//! Guided assessment wizards: step blueprints, intake validation, and the
//! append-only assessment log.

pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;
pub mod wizard;

pub use domain::{
    AssessmentContext, AssessmentId, AssessmentKind, AssessmentRecord, AssessmentSubmission,
    ExperienceLevel, ProfileSnapshot, UserId,
};
pub use intake::{IntakeError, IntakeGuard};
pub use repository::AssessmentRepository;
pub use router::{assessment_router, AssessmentView};
pub use service::{AssessmentService, AssessmentServiceError};
pub use wizard::{WizardBlueprint, WizardError, WizardInstance, WizardStep};
