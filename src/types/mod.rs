// src/types/mod.rs
//! Wire types shared by the service clients and the job detail view

pub mod compatibility;
pub mod job;
pub mod response;
pub mod user;

pub use compatibility::{CompatibilityRequest, CompatibilityResult, ScoreBand};
pub use job::{Application, ApplicationStatus, Job, StatusFilter};
pub use response::{ApplyJobRequest, ErrorBody, MessageResponse, UpdateStatusRequest};
pub use user::{Role, User};
