//! Taskhub: task-management backend core.
//!
//! This crate models tasks owned by users and shared with contributors,
//! maps inbound "new task" input onto persistable entities, and validates
//! the entity's field constraints before storage.
//!
//! # Architecture
//!
//! Taskhub follows hexagonal architecture principles:
//!
//! - **Domain**: Plain values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for mapping, validation, and storage
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task entity, mapper, validator, repositories, and services

pub mod task;
