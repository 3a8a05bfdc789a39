//! Employee use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Errors pass through unchanged, except `find_employee`, which turns
//!   `NotFound` into `Ok(None)`.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError, RepoResult, EMPLOYEE_TABLE};

/// Use-case service wrapper for employee CRUD operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts an employee into the canonical table.
    pub fn create_employee(&self, name: &str, email: &str, role: &str) -> RepoResult<()> {
        self.repo.create(EMPLOYEE_TABLE, name, email, role)
    }

    pub fn get_employee(&self, id: EmployeeId) -> RepoResult<Employee> {
        self.repo.read_by_id(id)
    }

    /// Looks up an employee, treating a missing row as `None`.
    pub fn find_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        match self.repo.read_by_id(id) {
            Ok(employee) => Ok(Some(employee)),
            Err(RepoError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Replaces all mutable fields. Succeeds even when `id` does not exist.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        name: &str,
        email: &str,
        role: &str,
    ) -> RepoResult<()> {
        self.repo.update_by_id(id, name, email, role)
    }

    /// Removes an employee. Succeeds even when `id` does not exist.
    pub fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }
}
