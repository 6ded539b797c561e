// src/core/utils_service.rs
//! Compatibility scoring through the utils (AI) service

use async_trait::async_trait;
use tracing::info;

use super::error::ClientResult;
use super::service_client::ServiceClient;
use crate::types::{CompatibilityRequest, CompatibilityResult};

const JOB_COMPATIBILITY_ENDPOINT: &str = "/api/utils/job-compatibility";

#[async_trait]
pub trait CompatibilityScorer: Send + Sync {
    async fn score(
        &self,
        job_skills: &[String],
        user_skills: &[String],
    ) -> ClientResult<CompatibilityResult>;
}

pub struct UtilsServiceClient {
    http: ServiceClient,
}

impl UtilsServiceClient {
    pub fn new(http: ServiceClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CompatibilityScorer for UtilsServiceClient {
    async fn score(
        &self,
        job_skills: &[String],
        user_skills: &[String],
    ) -> ClientResult<CompatibilityResult> {
        let payload = CompatibilityRequest {
            job_skills: job_skills.to_vec(),
            user_skills: user_skills.to_vec(),
        };

        info!(
            "Requesting compatibility for {} job skills / {} user skills",
            job_skills.len(),
            user_skills.len()
        );

        self.http
            .post_json(JOB_COMPATIBILITY_ENDPOINT, &payload)
            .await
    }
}
