//! Change-spec validation.
//!
//! Rejects inconsistent specs before any tree construction begins: a spec
//! that names two mutually exclusive input forms, or no input at all, never
//! reaches the diff engine.

use tracing::debug;

use crate::error::{ConfigError, ConfplanError, Result};

use super::spec::ChangeSpec;

/// Validator for change specs.
#[derive(Debug, Default)]
pub struct SpecValidator;

/// Validation outcome containing all problems found.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Fatal validation errors.
    pub errors: Vec<ConfigError>,
    /// Non-fatal issues worth surfacing.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if no fatal errors were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl SpecValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a change spec.
    ///
    /// # Errors
    ///
    /// Returns the first fatal problem as an error; the full list is
    /// available through [`Self::check`].
    pub fn validate(&self, spec: &ChangeSpec) -> Result<ValidationResult> {
        let mut result = self.check(spec);

        if result.errors.is_empty() {
            debug!("Change spec validation passed");
            Ok(result)
        } else {
            Err(ConfplanError::Config(result.errors.remove(0)))
        }
    }

    /// Collects every validation problem without failing fast.
    #[must_use]
    pub fn check(&self, spec: &ChangeSpec) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !spec.lines.is_empty() && spec.src.is_some() {
            result.errors.push(ConfigError::conflicting("lines", "src"));
        }
        if !spec.parents.is_empty() && spec.src.is_some() {
            result
                .errors
                .push(ConfigError::conflicting("parents", "src"));
        }
        if spec.lines.is_empty() && spec.src.is_none() {
            result.errors.push(ConfigError::validation_general(
                "One of 'lines' or 'src' is required",
            ));
        }
        if spec.lines.iter().any(|l| l.trim().is_empty()) {
            result.errors.push(ConfigError::validation(
                "Command lines must not be blank",
                "lines",
            ));
        }
        if spec.parents.iter().any(|p| p.trim().is_empty()) {
            result.errors.push(ConfigError::validation(
                "Parent commands must not be blank",
                "parents",
            ));
        }

        if !spec.parents.is_empty() && spec.lines.is_empty() {
            result
                .warnings
                .push(String::from("'parents' given without 'lines' has no effect"));
        }

        result
    }
}
