use std::collections::BTreeMap;

use serde_json::Value;

use super::domain::{AssessmentKind, AssessmentSubmission, UserId};

/// One screen of a guided wizard with the answers it insists on.
#[derive(Debug, Clone, Copy)]
pub struct WizardStep {
    pub key: &'static str,
    pub title: &'static str,
    pub required: &'static [&'static str],
}

/// Fixed step sequence for one assessment kind.
#[derive(Debug, Clone, Copy)]
pub struct WizardBlueprint {
    pub kind: AssessmentKind,
    pub steps: &'static [WizardStep],
}

const PERSONAL_STEPS: &[WizardStep] = &[
    WizardStep {
        key: "basics",
        title: "About you",
        required: &["role", "ai_experience"],
    },
    WizardStep {
        key: "work_style",
        title: "How you work",
        required: &["time_availability", "goals"],
    },
    WizardStep {
        key: "outlook",
        title: "Your timeline",
        required: &["implementation_timeline"],
    },
];

const BUSINESS_STEPS: &[WizardStep] = &[
    WizardStep {
        key: "company",
        title: "Company profile",
        required: &["role", "industry", "company_size"],
    },
    WizardStep {
        key: "operations",
        title: "Operations today",
        required: &["pain_points"],
    },
    WizardStep {
        key: "goals",
        title: "Transformation goals",
        required: &["goals", "implementation_timeline"],
    },
    WizardStep {
        key: "readiness",
        title: "AI readiness",
        required: &["ai_experience", "readiness"],
    },
];

const CFO_STEPS: &[WizardStep] = &[
    WizardStep {
        key: "finance_profile",
        title: "Finance function",
        required: &["role", "industry", "company_size"],
    },
    WizardStep {
        key: "priorities",
        title: "Priorities and pain points",
        required: &["goals", "pain_points"],
    },
    WizardStep {
        key: "readiness",
        title: "Readiness check",
        required: &["ai_experience", "readiness", "implementation_timeline"],
    },
];

impl WizardBlueprint {
    pub fn for_kind(kind: AssessmentKind) -> Self {
        let steps = match kind {
            AssessmentKind::Personal => PERSONAL_STEPS,
            AssessmentKind::Business => BUSINESS_STEPS,
            AssessmentKind::Cfo => CFO_STEPS,
        };
        Self { kind, steps }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("step '{step}' requires an answer for '{field}'")]
    MissingAnswer {
        step: &'static str,
        field: &'static str,
    },
    #[error("wizard already completed")]
    AlreadyComplete,
    #[error("wizard incomplete: {remaining} step(s) remaining")]
    Incomplete { remaining: usize },
}

/// Mutable walk through a blueprint, collecting answers step by step.
///
/// Advancement past a step is blocked until every required field of that
/// step has a non-empty answer.
#[derive(Debug, Clone)]
pub struct WizardInstance {
    kind: AssessmentKind,
    steps: &'static [WizardStep],
    position: usize,
    answers: BTreeMap<String, Value>,
}

impl WizardInstance {
    pub fn new(blueprint: &WizardBlueprint) -> Self {
        Self {
            kind: blueprint.kind,
            steps: blueprint.steps,
            position: 0,
            answers: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> AssessmentKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_step(&self) -> Option<&'static WizardStep> {
        self.steps.get(self.position)
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.steps.len()
    }

    pub fn record(&mut self, field: impl Into<String>, value: Value) {
        self.answers.insert(field.into(), value);
    }

    /// Move past the current step, enforcing its required answers.
    pub fn advance(&mut self) -> Result<(), WizardError> {
        let step = self.steps.get(self.position).ok_or(WizardError::AlreadyComplete)?;

        for field in step.required {
            if !self.has_answer(field) {
                return Err(WizardError::MissingAnswer { step: step.key, field });
            }
        }

        self.position += 1;
        Ok(())
    }

    /// Consume the wizard into a submission once every step has been passed.
    pub fn finish(self, user_id: UserId) -> Result<AssessmentSubmission, WizardError> {
        if !self.is_complete() {
            return Err(WizardError::Incomplete {
                remaining: self.steps.len() - self.position,
            });
        }

        Ok(AssessmentSubmission {
            user_id,
            kind: self.kind,
            answers: self.answers,
        })
    }

    fn has_answer(&self, field: &str) -> bool {
        match self.answers.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.trim().is_empty(),
            Some(Value::Array(entries)) => !entries.is_empty(),
            Some(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn advance_blocks_on_missing_required_answer() {
        let blueprint = WizardBlueprint::for_kind(AssessmentKind::Personal);
        let mut wizard = WizardInstance::new(&blueprint);
        wizard.record("role", json!("analyst"));

        let error = wizard.advance().expect_err("missing experience");
        assert_eq!(
            error,
            WizardError::MissingAnswer {
                step: "basics",
                field: "ai_experience",
            }
        );

        wizard.record("ai_experience", json!("basic"));
        wizard.advance().expect("step complete");
        assert_eq!(wizard.position(), 1);
    }

    #[test]
    fn blank_and_empty_answers_do_not_satisfy_requirements() {
        let blueprint = WizardBlueprint::for_kind(AssessmentKind::Personal);
        let mut wizard = WizardInstance::new(&blueprint);
        wizard.record("role", json!("   "));
        wizard.record("ai_experience", json!([]));

        assert!(wizard.advance().is_err());
    }

    #[test]
    fn finish_requires_all_steps() {
        let blueprint = WizardBlueprint::for_kind(AssessmentKind::Cfo);
        let wizard = WizardInstance::new(&blueprint);

        let error = wizard
            .finish(UserId("user-1".to_string()))
            .expect_err("incomplete wizard");
        assert_eq!(error, WizardError::Incomplete { remaining: 3 });
    }

    #[test]
    fn completed_wizard_yields_submission() {
        let blueprint = WizardBlueprint::for_kind(AssessmentKind::Personal);
        let mut wizard = WizardInstance::new(&blueprint);
        wizard.record("role", json!("consultant"));
        wizard.record("ai_experience", json!("intermediate"));
        wizard.advance().expect("basics");
        wizard.record("time_availability", json!("2-5 hours per week"));
        wizard.record("goals", json!(["Save time"]));
        wizard.advance().expect("work style");
        wizard.record("implementation_timeline", json!("this month"));
        wizard.advance().expect("outlook");

        let submission = wizard
            .finish(UserId("user-1".to_string()))
            .expect("submission builds");
        assert_eq!(submission.kind, AssessmentKind::Personal);
        assert_eq!(submission.answers.len(), 5);
    }
}
