use super::StaffStore;
use crate::error::Result;
use crate::model::Employee;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file backend.
///
/// The collection is a single JSON array. Load reads the whole file; save
/// truncates and rewrites it. No appending, no partial updates.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// The path is resolved to an absolute one up front so error messages
    /// name the real location even when the file does not exist yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StaffStore for JsonFileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Option<Vec<Employee>>> {
        let content = fs::read_to_string(&self.path)?;
        // A blank file deserializes the same as an explicit `null`: no
        // collection yet.
        if content.trim().is_empty() {
            return Ok(None);
        }
        let employees: Option<Vec<Employee>> = serde_json::from_str(&content)?;
        Ok(employees)
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        let content = serde_json::to_string(employees)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
