use serde_json::Value;

use super::domain::{
    AssessmentContext, AssessmentSubmission, ExperienceLevel, ProfileSnapshot,
};

/// Validation errors raised while deriving a profile from wizard answers.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("missing required answer '{0}'")]
    MissingAnswer(&'static str),
    #[error("unrecognized experience level '{0}'")]
    UnknownExperience(String),
    #[error("readiness must be between 1 and 5, got {0}")]
    ReadinessOutOfRange(u64),
    #[error("answer '{field}' has an unexpected shape")]
    MalformedAnswer { field: &'static str },
}

const DEFAULT_READINESS: u8 = 3;

/// Turns raw wizard payloads into the immutable profile snapshot and the
/// assessment context the scoring passes consume.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn profile_from_submission(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<(ProfileSnapshot, AssessmentContext), IntakeError> {
        let role = required_text(submission, "role")?;
        let raw_experience = required_text(submission, "ai_experience")?;
        let ai_experience = ExperienceLevel::parse(&raw_experience)
            .ok_or(IntakeError::UnknownExperience(raw_experience))?;

        let goals = text_list(submission, "goals")?;
        if goals.is_empty() {
            return Err(IntakeError::MissingAnswer("goals"));
        }

        let profile = ProfileSnapshot {
            role: normalize(&role),
            industry: optional_text(submission, "industry")?.unwrap_or_default(),
            company_size: optional_text(submission, "company_size")?.unwrap_or_default(),
            ai_experience,
            goals,
            time_availability: optional_text(submission, "time_availability")?
                .unwrap_or_default(),
            implementation_timeline: optional_text(submission, "implementation_timeline")?
                .map(|value| normalize(&value))
                .unwrap_or_default(),
        };

        let readiness = match submission.answers.get("readiness") {
            None | Some(Value::Null) => DEFAULT_READINESS,
            Some(Value::Number(number)) => {
                let raw = number
                    .as_u64()
                    .ok_or(IntakeError::MalformedAnswer { field: "readiness" })?;
                if !(1..=5).contains(&raw) {
                    return Err(IntakeError::ReadinessOutOfRange(raw));
                }
                raw as u8
            }
            Some(_) => return Err(IntakeError::MalformedAnswer { field: "readiness" }),
        };

        let context = AssessmentContext {
            kind: submission.kind,
            pain_points: text_list(submission, "pain_points")?,
            current_tools: text_list(submission, "current_tools")?,
            readiness,
        };

        Ok((profile, context))
    }

    /// Optional self-scored result carried on the payload (0..=100).
    pub fn self_score(&self, submission: &AssessmentSubmission) -> Option<u8> {
        match submission.answers.get("score") {
            Some(Value::Number(number)) => number
                .as_u64()
                .filter(|score| *score <= 100)
                .map(|score| score as u8),
            _ => None,
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

fn required_text(
    submission: &AssessmentSubmission,
    field: &'static str,
) -> Result<String, IntakeError> {
    optional_text(submission, field)?.ok_or(IntakeError::MissingAnswer(field))
}

fn optional_text(
    submission: &AssessmentSubmission,
    field: &'static str,
) -> Result<Option<String>, IntakeError> {
    match submission.answers.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(_) => Err(IntakeError::MalformedAnswer { field }),
    }
}

/// Accepts either a JSON array of strings or a `;`-joined string.
fn text_list(
    submission: &AssessmentSubmission,
    field: &'static str,
) -> Result<Vec<String>, IntakeError> {
    match submission.answers.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(joined)) => Ok(joined
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()),
        Some(Value::Array(entries)) => {
            let mut list = Vec::with_capacity(entries.len());
            for entry in entries {
                match entry {
                    Value::String(text) if !text.trim().is_empty() => {
                        list.push(text.trim().to_string());
                    }
                    Value::String(_) => {}
                    _ => return Err(IntakeError::MalformedAnswer { field }),
                }
            }
            Ok(list)
        }
        Some(_) => Err(IntakeError::MalformedAnswer { field }),
    }
}
