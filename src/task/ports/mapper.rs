//! Mapper port converting inbound task input into task entities.

use crate::task::{
    domain::{NewTask, Task},
    error::MappingError,
};
use serde_json::Value;

/// Result type for payload mapping.
pub type MappingResult<T> = Result<T, MappingError>;

/// Converts [`NewTask`] values into [`Task`] entities.
///
/// Mapping copies fields that both shapes share and leaves the rest at
/// their defaults. It never validates the produced task; that is the job of
/// a [`TaskValidator`](super::TaskValidator).
pub trait TaskMapper: Send + Sync {
    /// Maps a new task input onto an unpersisted task.
    ///
    /// The input is only borrowed and is left unchanged.
    fn map_to_entity(&self, new_task: &NewTask) -> Task;

    /// Decodes a loosely typed payload and maps it onto a task.
    ///
    /// Fields the payload carries beyond [`NewTask`] are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError`] when a field is missing or has a type that
    /// does not match the task entity.
    fn map_payload(&self, payload: Value) -> MappingResult<Task> {
        let new_task: NewTask =
            serde_json::from_value(payload).map_err(|err| MappingError(err.to_string()))?;
        Ok(self.map_to_entity(&new_task))
    }
}
