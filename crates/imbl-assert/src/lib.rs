#![deny(missing_docs)]
#![doc = "Fluent assertions for imbl persistent maps: entry-set containment with exact diff messages, key/value/entry lookups and size checks."]

/// Checks returning `Result<(), AssertError>` behind every fluent assertion.
pub mod checks;
/// Entry-set difference used by containment checks.
pub mod diff;
/// Entry views over imbl, std and plain sequence containers.
pub mod entries;
/// Fluent `assert_that` entry points.
pub mod map_assert;
mod messages;

pub use checks::{check_contains_only, render_source};
pub use diff::EntryDiff;
pub use entries::{ActualMap, EntrySource};
pub use map_assert::{assert_that, MapAssert, SoftMapAssertions};
pub use messages::{NULL_EXPECTED_ENTRIES, NULL_EXPECTED_KEYS};

pub use imbl_assert_core::{AssertError, AssertionReport, Representation, SoftAssertions};
