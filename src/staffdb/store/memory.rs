use super::StaffStore;
use crate::error::{Result, StaffError};
use crate::model::Employee;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    exists: bool,
    collection: Option<Vec<Employee>>,
    /// When set, `save` fails, for exercising persistence failure paths.
    pub fail_saves: bool,
}

impl InMemoryStore {
    /// An existing store with no collection yet (a blank file, in effect).
    pub fn new() -> Self {
        Self {
            exists: true,
            ..Self::default()
        }
    }

    /// A store whose backing does not exist at all.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            exists: true,
            collection: Some(employees),
            fail_saves: false,
        }
    }

    /// Current collection contents, empty when absent.
    pub fn employees(&self) -> &[Employee] {
        self.collection.as_deref().unwrap_or_default()
    }
}

impl StaffStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.exists
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn load(&self) -> Result<Option<Vec<Employee>>> {
        Ok(self.collection.clone())
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        if self.fail_saves {
            return Err(StaffError::Io(std::io::Error::other("save disabled")));
        }
        self.collection = Some(employees.to_vec());
        Ok(())
    }
}
