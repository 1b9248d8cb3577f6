//! Task management for the taskhub backend.
//!
//! Turns inbound [`domain::NewTask`] input into owned [`domain::Task`]
//! entities, validates their field constraints, and persists them. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Mapping from input to entity in [`mapping`]
//! - Field validation in [`validation`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod mapping;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
