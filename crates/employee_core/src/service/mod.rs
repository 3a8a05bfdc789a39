//! Core use-case services.
//!
//! # Responsibility
//! - Expose repository operations as use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod employee_service;
