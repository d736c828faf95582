//! Assertion types and builders for verifying step results.

use keepanno_core::KeepResult;
use keepanno_declaration::KeepDeclaration;

use crate::error::{ScenarioError, ScenarioResult};

/// The expected declaration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Edge,
    Check,
}

/// A complete assertion for a step result.
#[derive(Default)]
pub struct Assertion {
    pub kind: Option<DeclarationKind>,

    // Edge assertions
    pub unconditional: Option<bool>,
    pub trivial: Option<bool>,
    pub conditions: Option<usize>,
    pub targets: Option<usize>,
    pub binding_references: Option<usize>,

    // Binding table assertions
    pub bindings: Option<usize>,

    // Error assertions
    pub error: Option<String>,
    pub error_pattern: Option<String>,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&KeepDeclaration) -> bool + Send + Sync>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("kind", &self.kind)
            .field("unconditional", &self.unconditional)
            .field("trivial", &self.trivial)
            .field("conditions", &self.conditions)
            .field("targets", &self.targets)
            .field("binding_references", &self.binding_references)
            .field("bindings", &self.bindings)
            .field("error", &self.error)
            .field("error_pattern", &self.error_pattern)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge(mut self) -> Self {
        self.kind = Some(DeclarationKind::Edge);
        self
    }

    pub fn check(mut self) -> Self {
        self.kind = Some(DeclarationKind::Check);
        self
    }

    pub fn unconditional(mut self, expected: bool) -> Self {
        self.unconditional = Some(expected);
        self
    }

    pub fn trivial(mut self, expected: bool) -> Self {
        self.trivial = Some(expected);
        self
    }

    pub fn conditions(mut self, expected: usize) -> Self {
        self.conditions = Some(expected);
        self
    }

    pub fn targets(mut self, expected: usize) -> Self {
        self.targets = Some(expected);
        self
    }

    pub fn binding_references(mut self, expected: usize) -> Self {
        self.binding_references = Some(expected);
        self
    }

    pub fn bindings(mut self, expected: usize) -> Self {
        self.bindings = Some(expected);
        self
    }

    /// Expect the step to fail with a message containing `expected`.
    pub fn error(mut self, expected: impl Into<String>) -> Self {
        self.error = Some(expected.into());
        self
    }

    /// Expect the step to fail with a message matching the regex `pattern`.
    pub fn error_matching(mut self, pattern: impl Into<String>) -> Self {
        self.error_pattern = Some(pattern.into());
        self
    }

    pub fn satisfies(
        mut self,
        predicate: impl Fn(&KeepDeclaration) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.custom = Some(Box::new(predicate));
        self
    }

    /// Verify the assertion against a result.
    pub fn verify(&self, step: &str, result: &KeepResult<KeepDeclaration>) -> ScenarioResult<()> {
        // Check error expectations first
        if let Some(ref expected_error) = self.error {
            return match result {
                Err(e) if e.to_string().contains(expected_error) => Ok(()),
                Err(e) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected_error, e),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', but step succeeded",
                        expected_error
                    ),
                )),
            };
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            return match result {
                Err(e) if re.is_match(&e.to_string()) => Ok(()),
                Err(e) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, e),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', but step succeeded", pattern),
                )),
            };
        }

        let declaration = result
            .as_ref()
            .map_err(|e| ScenarioError::assertion_failed(step, format!("step failed: {}", e)))?;

        if let Some(ref custom) = self.custom {
            if !custom(declaration) {
                return Err(ScenarioError::assertion_failed(step, "custom assertion failed"));
            }
        }

        if let Some(expected) = self.bindings {
            let actual = declaration.bindings().len();
            expect_eq(step, "bindings", expected, actual)?;
        }

        match (self.kind, declaration) {
            (Some(DeclarationKind::Check), KeepDeclaration::Edge(_)) => Err(
                ScenarioError::assertion_failed(step, "expected a check, got an edge"),
            ),
            (Some(DeclarationKind::Edge), KeepDeclaration::Check(_)) => Err(
                ScenarioError::assertion_failed(step, "expected an edge, got a check"),
            ),
            (_, KeepDeclaration::Edge(edge)) => {
                if let Some(expected) = self.unconditional {
                    expect_eq(step, "unconditional", expected, edge.is_unconditional())?;
                }
                if let Some(expected) = self.trivial {
                    expect_eq(step, "trivial", expected, edge.has_trivial_preconditions())?;
                }
                if let Some(expected) = self.conditions {
                    let actual = edge.preconditions().conditions().len();
                    expect_eq(step, "conditions", expected, actual)?;
                }
                if let Some(expected) = self.targets {
                    expect_eq(step, "targets", expected, edge.consequences().len())?;
                }
                if let Some(expected) = self.binding_references {
                    let actual = edge.binding_references().len();
                    expect_eq(step, "binding references", expected, actual)?;
                }
                Ok(())
            }
            (_, KeepDeclaration::Check(_)) => Ok(()),
        }
    }
}

fn expect_eq<T: PartialEq + std::fmt::Debug>(
    step: &str,
    what: &str,
    expected: T,
    actual: T,
) -> ScenarioResult<()> {
    if expected != actual {
        return Err(ScenarioError::assertion_failed(
            step,
            format!("expected {} {:?}, got {:?}", what, expected, actual),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepanno_core::KeepEdgeError;

    #[test]
    fn test_error_assertion() {
        let result: KeepResult<KeepDeclaration> = Err(KeepEdgeError::EmptyConsequences);

        assert!(Assertion::new().error("empty consequence").verify("s", &result).is_ok());
        assert!(Assertion::new().error("missing").verify("s", &result).is_err());
        assert!(Assertion::new()
            .error_matching("^Invalid .* set$")
            .verify("s", &result)
            .is_ok());
        assert!(Assertion::new().verify("s", &result).is_err());
    }
}
