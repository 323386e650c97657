use serde::{Deserialize, Serialize};

use crate::errors::{AssertError, ErrorInfo};
use crate::hash::stable_hash_string;
use crate::serde::to_canonical_json_bytes;

fn report_error(code: &str, message: impl Into<String>) -> AssertError {
    AssertError::Serde(ErrorInfo::new(code, message.into()))
}

/// Single assertion evaluation result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionCheck {
    /// Stable identifier for the assertion (usually the assertion method name).
    pub name: String,
    /// Whether the assertion passed.
    pub pass: bool,
    /// Failure message surfaced when the assertion fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error code of the failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl AssertionCheck {
    /// Records a passing check.
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass: true,
            message: None,
            code: None,
        }
    }

    /// Records a failing check from the error that caused it.
    pub fn failed(name: impl Into<String>, error: &AssertError) -> Self {
        Self {
            name: name.into(),
            pass: false,
            message: Some(error.message().to_string()),
            code: Some(error.info().code.clone()),
        }
    }

    /// Builds a check from the outcome of an assertion.
    pub fn from_result(name: impl Into<String>, result: &Result<(), AssertError>) -> Self {
        match result {
            Ok(()) => Self::passed(name),
            Err(err) => Self::failed(name, err),
        }
    }
}

/// Aggregated assertion report bundling all executed checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionReport {
    /// Content-addressed hash of the checks.
    pub analysis_hash: String,
    /// Per-assertion results in execution order.
    pub checks: Vec<AssertionCheck>,
}

impl AssertionReport {
    /// Constructs a report from checks while computing the stable hash.
    pub fn new(checks: Vec<AssertionCheck>) -> Result<Self, AssertError> {
        validate_checks(&checks)?;
        let analysis_hash = stable_hash_string(&checks)?;
        Ok(Self {
            analysis_hash,
            checks,
        })
    }

    /// Checks that failed, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = &AssertionCheck> {
        self.checks.iter().filter(|check| !check.pass)
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|check| check.pass)
    }

    /// Persists the report as canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, AssertError> {
        to_canonical_json_bytes(self)
    }
}

/// Validates that the report contains at least one check.
pub fn validate_checks(checks: &[AssertionCheck]) -> Result<(), AssertError> {
    if checks.is_empty() {
        return Err(report_error(
            "empty-assertions",
            "at least one assertion must be executed",
        ));
    }
    Ok(())
}
