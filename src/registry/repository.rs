use std::sync::{Arc, Mutex};

use super::domain::Employee;

/// Exclusive access to the ordered employee list.
///
/// Each service operation runs entirely inside one `read` or `write` closure, so a lookup and
/// the mutation that depends on it are never split by another request.
pub trait EmployeeRepository: Send + Sync {
    fn read<T>(&self, f: impl FnOnce(&[Employee]) -> T) -> Result<T, RepositoryError>;
    fn write<T>(&self, f: impl FnOnce(&mut Vec<Employee>) -> T) -> Result<T, RepositoryError>;
}

/// Error enumeration for storage faults that are not business rule failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("employee storage is unavailable after a panic in another request")]
    Poisoned,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime registry guarded by a single mutex. Insertion order is preserved.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<Mutex<Vec<Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn read<T>(&self, f: impl FnOnce(&[Employee]) -> T) -> Result<T, RepositoryError> {
        let guard = self
            .employees
            .lock()
            .map_err(|_| RepositoryError::Poisoned)?;
        Ok(f(&guard))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Vec<Employee>) -> T) -> Result<T, RepositoryError> {
        let mut guard = self
            .employees
            .lock()
            .map_err(|_| RepositoryError::Poisoned)?;
        Ok(f(&mut guard))
    }
}
