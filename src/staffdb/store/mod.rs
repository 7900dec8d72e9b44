//! # Storage Layer
//!
//! The [`StaffStore`] trait abstracts where the collection lives so the
//! manager can run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, one JSON file holding the
//!   whole collection. Whole-file read on load, whole-file rewrite on save.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence.
//!
//! ## Absent vs empty
//!
//! `load` distinguishes an absent collection (`None` — a blank or `null`
//! file) from an empty one (`Some(vec![])`). Add treats both as a fresh
//! start; the read operations report both as an empty list, but they reach
//! that answer through different branches, and the distinction keeps the
//! backends honest about what the file actually said.

use crate::error::Result;
use crate::model::Employee;

pub mod fs;
pub mod memory;

/// Abstract interface for collection storage.
///
/// Implementations hold one ordered collection of employees and replace it
/// wholesale on save; there is no record-level access.
pub trait StaffStore {
    /// Whether the backing storage exists at all. Checked before any
    /// operation is attempted.
    fn exists(&self) -> bool;

    /// Where the storage lives, for the missing-storage message.
    fn location(&self) -> String;

    /// Read the whole collection. `None` means the storage holds no
    /// collection at all, as opposed to an empty list.
    fn load(&self) -> Result<Option<Vec<Employee>>>;

    /// Replace the whole collection.
    fn save(&mut self, employees: &[Employee]) -> Result<()>;
}
