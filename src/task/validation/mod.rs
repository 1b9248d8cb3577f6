//! Task validation implementation.
//!
//! Individual field rules live in [`rules`]; [`service`] combines them into
//! the default [`TaskValidator`](crate::task::ports::TaskValidator).

pub mod rules;
pub mod service;

pub use service::{DefaultTaskValidator, validate_task};
