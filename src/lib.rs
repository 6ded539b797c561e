//! Job detail client for the job board: fetches a posting, applies to it,
//! manages its applications as the posting recruiter and scores skill
//! compatibility.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

pub mod cli;
pub mod core;
pub mod export;
pub mod types;
pub mod view;

use crate::core::{
    AppStateProvider, CompatibilityScorer, ConfigManager, JobDirectory, JobServiceClient,
    KeywordCompatibilityScorer, ScorerKind, ServiceClient, UserServiceClient, UtilsServiceClient,
};
use crate::view::JobDetailView;

/// Wire the HTTP collaborators described by `config` into a view for `job_id`
pub fn build_view(config: &ConfigManager, job_id: i64) -> Result<JobDetailView> {
    let service = &config.service;

    let job_http = ServiceClient::new(
        &service.job_service_url,
        config.token.clone(),
        service.timeout_seconds,
    )
    .context("Failed to create job service client")?;

    let user_http = ServiceClient::new(
        &service.user_service_url,
        config.token.clone(),
        service.timeout_seconds,
    )
    .context("Failed to create user service client")?;

    let scorer: Arc<dyn CompatibilityScorer> = match service.scorer {
        ScorerKind::Remote => {
            let utils_http =
                ServiceClient::new(&service.utils_service_url, None, service.timeout_seconds)
                    .context("Failed to create utils service client")?;
            Arc::new(UtilsServiceClient::new(utils_http))
        }
        ScorerKind::Local => Arc::new(KeywordCompatibilityScorer),
    };

    info!(
        "Job service: {}, user service: {}, scorer: {:?}",
        job_http.base_url(),
        user_http.base_url(),
        service.scorer
    );

    let jobs: Arc<dyn JobDirectory> = Arc::new(JobServiceClient::new(job_http));
    let app_state: Arc<dyn AppStateProvider> = Arc::new(UserServiceClient::new(user_http));

    Ok(JobDetailView::new(job_id, jobs, scorer, app_state))
}
