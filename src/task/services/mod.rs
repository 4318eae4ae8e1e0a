//! Orchestration services for task admission and queries.

pub mod admission;
mod query;

pub use admission::{
    AdmissionErrorKind, CreateTaskRequest, DeveloperChange, TaskAdmissionError,
    TaskAdmissionResult, TaskAdmissionService, UpdateTaskRequest,
};
