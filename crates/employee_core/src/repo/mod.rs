//! Repository layer contracts and persistence implementations.
//!
//! # Responsibility
//! - Define key-based data access contracts for employee records.
//! - Isolate SQL text and parameter binding from callers.
//!
//! # Invariants
//! - Every statement is prepared, bound positionally and released within a
//!   single call; no statement handle outlives the operation.
//! - Errors are classified at this boundary (`Prepare`, `Execute`,
//!   `NotFound`) and never retried.

pub mod employee_repo;
