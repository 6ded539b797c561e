// src/types/response.rs
use serde::{Deserialize, Serialize};

use super::job::ApplicationStatus;

// ===== Request Bodies =====

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyJobRequest {
    pub job_id: i64,
}

// ===== Service Response Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by the job and user services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
