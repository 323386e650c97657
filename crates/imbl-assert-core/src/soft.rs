use std::cell::RefCell;

use crate::errors::AssertError;
use crate::report::{AssertionCheck, AssertionReport};
use crate::representation::Representation;

/// Collects assertion outcomes instead of panicking on the first failure.
///
/// Assertions started from a collector record every outcome. Call
/// [`SoftAssertions::assert_all`] at the end of the test to fail with all
/// collected messages at once.
#[derive(Debug, Default)]
pub struct SoftAssertions {
    representation: Representation,
    checks: RefCell<Vec<AssertionCheck>>,
}

impl SoftAssertions {
    /// Creates an empty collector using the default representation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collector whose assertions render with `representation`.
    pub fn with_representation(representation: Representation) -> Self {
        Self {
            representation,
            checks: RefCell::new(Vec::new()),
        }
    }

    /// Representation handed to assertions started from this collector.
    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    /// Records the outcome of the assertion `name`.
    pub fn record(&self, name: &str, result: Result<(), AssertError>) {
        self.checks
            .borrow_mut()
            .push(AssertionCheck::from_result(name, &result));
    }

    /// Snapshot of every recorded check in execution order.
    pub fn checks(&self) -> Vec<AssertionCheck> {
        self.checks.borrow().clone()
    }

    /// Number of recorded failures.
    pub fn failure_count(&self) -> usize {
        self.checks.borrow().iter().filter(|check| !check.pass).count()
    }

    /// Messages of the recorded failures in execution order.
    pub fn error_messages(&self) -> Vec<String> {
        self.checks
            .borrow()
            .iter()
            .filter_map(|check| check.message.clone())
            .collect()
    }

    /// Whether every recorded check passed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Converts the collected checks into a hashed report.
    pub fn into_report(self) -> Result<AssertionReport, AssertError> {
        AssertionReport::new(self.checks.into_inner())
    }

    /// Panics with every collected failure message if any check failed.
    #[track_caller]
    pub fn assert_all(self) {
        let messages = self.error_messages();
        if messages.is_empty() {
            return;
        }
        panic!("{}", multiple_failures_message(&messages));
    }
}

/// Formats the combined message raised by [`SoftAssertions::assert_all`].
pub fn multiple_failures_message(messages: &[String]) -> String {
    let plural = if messages.len() == 1 { "" } else { "s" };
    let mut out = format!("\nMultiple Failures ({} failure{plural})\n", messages.len());
    for (idx, message) in messages.iter().enumerate() {
        out.push_str(&format!("-- failure {} --", idx + 1));
        if !message.starts_with('\n') {
            out.push('\n');
        }
        out.push_str(message);
        if !message.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_message_numbers_failures() {
        let messages = vec!["\nfirst\n".to_string(), "second".to_string()];
        assert_eq!(
            multiple_failures_message(&messages),
            "\nMultiple Failures (2 failures)\n-- failure 1 --\nfirst\n-- failure 2 --\nsecond\n"
        );
    }

    #[test]
    fn passing_collector_does_not_panic() {
        let soft = SoftAssertions::new();
        soft.record("ok", Ok(()));
        assert!(soft.all_passed());
        soft.assert_all();
    }

    #[test]
    #[should_panic(expected = "Multiple Failures (1 failure)")]
    fn failing_collector_panics() {
        let soft = SoftAssertions::new();
        soft.record("broken", Err(AssertError::mismatch("sample", "broken")));
        soft.assert_all();
    }
}
