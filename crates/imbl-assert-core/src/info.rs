use crate::errors::AssertError;
use crate::representation::Representation;
use crate::soft::SoftAssertions;

/// Per-assertion state carried through a fluent chain.
///
/// Holds the optional description and overriding message, the rendering
/// configuration, and where failures go: a panic at the caller, or a
/// [`SoftAssertions`] collector.
#[derive(Debug, Clone, Default)]
pub struct AssertionInfo<'c> {
    description: Option<String>,
    overriding_message: Option<String>,
    representation: Representation,
    collector: Option<&'c SoftAssertions>,
}

impl<'c> AssertionInfo<'c> {
    /// Creates info that panics on failure with the default representation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates info that records failures into `collector` instead of panicking.
    pub fn collecting(collector: &'c SoftAssertions) -> Self {
        Self {
            representation: collector.representation().clone(),
            collector: Some(collector),
            ..Self::default()
        }
    }

    /// Sets the description prefixed to failure messages as `[description] `.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Sets a message that replaces the generated failure message.
    pub fn set_overriding_message(&mut self, message: impl Into<String>) {
        self.overriding_message = Some(message.into());
    }

    /// Replaces the rendering configuration.
    pub fn set_representation(&mut self, representation: Representation) {
        self.representation = representation;
    }

    /// Rendering configuration used by this assertion.
    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    /// Description, if one was set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Applies the overriding message or description prefix to an error.
    pub fn decorate(&self, error: AssertError) -> AssertError {
        if let Some(message) = &self.overriding_message {
            return error.with_message(message.clone());
        }
        match &self.description {
            Some(description) => {
                let message = format!("[{description}] {}", error.message());
                error.with_message(message)
            }
            None => error,
        }
    }

    /// Routes the outcome of the assertion `name`.
    ///
    /// Panics with the decorated message on failure unless a collector is
    /// attached, in which case the outcome is recorded and control returns.
    #[track_caller]
    pub fn report(&self, name: &str, result: Result<(), AssertError>) {
        let result = result.map_err(|err| self.decorate(err));
        match (self.collector, result) {
            (Some(collector), result) => collector.record(name, result),
            (None, Err(err)) => panic!("{err}"),
            (None, Ok(())) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch() -> AssertError {
        AssertError::mismatch("sample", "\nExpecting something\n")
    }

    #[test]
    fn description_prefixes_message() {
        let mut info = AssertionInfo::new();
        info.set_description("lookup table");
        assert_eq!(info.description(), Some("lookup table"));
        let decorated = info.decorate(mismatch());
        assert_eq!(decorated.message(), "[lookup table] \nExpecting something\n");
        assert_eq!(decorated.info().code, "sample");
    }

    #[test]
    fn undescribed_error_passes_through() {
        let info = AssertionInfo::new();
        assert_eq!(info.description(), None);
        assert_eq!(info.decorate(mismatch()), mismatch());
    }

    #[test]
    fn overriding_message_wins_over_description() {
        let mut info = AssertionInfo::new();
        info.set_description("ignored");
        info.set_overriding_message("custom");
        assert_eq!(info.decorate(mismatch()).message(), "custom");
    }

    #[test]
    #[should_panic(expected = "Expecting something")]
    fn report_panics_without_collector() {
        AssertionInfo::new().report("sample", Err(mismatch()));
    }

    #[test]
    fn report_records_with_collector() {
        let soft = SoftAssertions::new();
        let info = AssertionInfo::collecting(&soft);
        info.report("sample", Err(mismatch()));
        info.report("other", Ok(()));
        assert_eq!(soft.failure_count(), 1);
        assert_eq!(soft.checks().len(), 2);
    }
}
