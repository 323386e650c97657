#![deny(missing_docs)]
#![doc = "Fluent assertion scaffolding shared by the imbl-assert crates: structured errors, rendering configuration, failure routing, soft assertions and reports."]

pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
/// Assertion info carried through fluent chains.
pub mod info;
/// Rendering configuration for failure messages.
pub mod representation;
/// Aggregated assertion reports.
pub mod report;
/// Canonical JSON and YAML helpers.
pub mod serde;
/// Soft assertion collection.
pub mod soft;

pub use errors::{AssertError, ErrorInfo};
pub use info::AssertionInfo;
pub use report::{AssertionCheck, AssertionReport};
pub use representation::{ElementOrdering, Representation};
pub use soft::SoftAssertions;
