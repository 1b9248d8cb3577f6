//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod mapper;
pub mod repository;
pub mod validator;

pub use mapper::{MappingResult, TaskMapper};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{TaskValidationConfig, TaskValidationResult, TaskValidator};
