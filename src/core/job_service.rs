// src/core/job_service.rs
//! Job directory: job lookup, recruiter application listing and status updates

use async_trait::async_trait;
use tracing::info;

use super::error::ClientResult;
use super::service_client::ServiceClient;
use crate::types::{Application, ApplicationStatus, Job, MessageResponse, UpdateStatusRequest};

const JOB_ENDPOINT: &str = "/api/job";
const APPLICATIONS_ENDPOINT: &str = "/api/job/application";
const UPDATE_APPLICATION_ENDPOINT: &str = "/api/job/application/update";

#[async_trait]
pub trait JobDirectory: Send + Sync {
    async fn fetch_job(&self, job_id: i64) -> ClientResult<Job>;

    /// Applications for a job; recruiter only
    async fn job_applications(&self, job_id: i64) -> ClientResult<Vec<Application>>;

    async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> ClientResult<MessageResponse>;
}

pub struct JobServiceClient {
    http: ServiceClient,
}

impl JobServiceClient {
    pub fn new(http: ServiceClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl JobDirectory for JobServiceClient {
    async fn fetch_job(&self, job_id: i64) -> ClientResult<Job> {
        self.http
            .get(&format!("{}/{}", JOB_ENDPOINT, job_id))
            .await
    }

    async fn job_applications(&self, job_id: i64) -> ClientResult<Vec<Application>> {
        let applications: Vec<Application> = self
            .http
            .get_authorized(&format!("{}/{}", APPLICATIONS_ENDPOINT, job_id))
            .await?;
        info!(
            "Fetched {} applications for job {}",
            applications.len(),
            job_id
        );
        Ok(applications)
    }

    async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> ClientResult<MessageResponse> {
        info!("Updating application {} to {}", application_id, status);
        self.http
            .put_json_authorized(
                &format!("{}/{}", UPDATE_APPLICATION_ENDPOINT, application_id),
                &UpdateStatusRequest { status },
            )
            .await
    }
}
