//! Domain model for tasks, their owners, and contributors.
//!
//! The domain holds plain values only. Validation and persistence live
//! behind the ports in [`crate::task::ports`].

mod error;
mod ids;
mod new_task;
mod task;
mod user;

pub use error::TaskDomainError;
pub use ids::{TaskId, UserId};
pub use new_task::NewTask;
pub use task::{Task, TaskParts};
pub use user::User;
