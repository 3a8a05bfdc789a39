//! Domain model for employee records.
//!
//! # Responsibility
//! - Define the value types returned by the repository layer.
//!
//! # Invariants
//! - Every persisted employee is identified by a store-assigned `EmployeeId`.
//! - Model values are plain data; they are never cached by core.

pub mod employee;
