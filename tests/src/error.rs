//! Scenario errors.

use thiserror::Error;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario '{0}' has no steps")]
    EmptyScenario(String),

    #[error("Assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },
}

impl ScenarioError {
    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
