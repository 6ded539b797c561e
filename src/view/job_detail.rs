// src/view/job_detail.rs
//! State and actions of the job detail page.
//!
//! `load` fetches the job, the current user and that user's applications.
//! Once both job and user are known, the compatibility score (user has skills)
//! and the recruiter's application list (user posted the job) are requested
//! concurrently. Every failure is logged or turned into a notification; only a
//! failed job fetch changes what the page shows ("Job not found").

use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use super::notify::Notification;
use crate::core::{AppStateProvider, ClientError, ClientResult, CompatibilityScorer, JobDirectory};
use crate::types::{Application, ApplicationStatus, CompatibilityResult, Job, StatusFilter, User};

pub const INVALID_STATUS_MESSAGE: &str = "Please give valid value";
pub const COMPATIBILITY_FAILED_MESSAGE: &str = "Failed to check compatibility";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update";
pub const APPLY_FAILED_MESSAGE: &str = "Failed to apply";

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{message}")]
    Service {
        message: String,
        #[source]
        source: ClientError,
    },
}

/// What the header offers a job seeker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyAction {
    AlreadyApplied,
    Apply { busy: bool },
}

pub struct JobDetailView {
    job_id: i64,
    jobs: Arc<dyn JobDirectory>,
    scorer: Arc<dyn CompatibilityScorer>,
    app_state: Arc<dyn AppStateProvider>,

    user: Option<User>,
    job: Option<Job>,
    loading: bool,
    compatibility: Option<CompatibilityResult>,
    compatibility_loading: bool,
    applied: bool,
    job_applications: Vec<Application>,
    filter: StatusFilter,
    selected_status: String,
    btn_loading: bool,
    notifications: Vec<Notification>,
}

impl JobDetailView {
    pub fn new(
        job_id: i64,
        jobs: Arc<dyn JobDirectory>,
        scorer: Arc<dyn CompatibilityScorer>,
        app_state: Arc<dyn AppStateProvider>,
    ) -> Self {
        Self {
            job_id,
            jobs,
            scorer,
            app_state,
            user: None,
            job: None,
            loading: true,
            compatibility: None,
            compatibility_loading: false,
            applied: false,
            job_applications: Vec::new(),
            filter: StatusFilter::All,
            selected_status: String::new(),
            btn_loading: false,
            notifications: Vec::new(),
        }
    }

    // ===== Loading =====

    pub async fn load(&mut self) {
        self.loading = true;

        let (job, user, my_applications) = tokio::join!(
            self.jobs.fetch_job(self.job_id),
            self.app_state.current_user(),
            self.app_state.applications(),
        );

        match job {
            Ok(job) => {
                info!("Loaded job {} ({})", job.job_id, job.title);
                self.job = Some(job);
            }
            Err(e) if e.is_not_found() => {
                warn!("Job {} does not exist", self.job_id);
                self.job = None;
            }
            Err(e) => {
                error!("Failed to fetch job {}: {}", self.job_id, e);
                self.job = None;
            }
        }
        self.loading = false;

        match user {
            Ok(user) => self.user = user,
            Err(e) => {
                warn!("Failed to load current user: {}", e);
                self.user = None;
            }
        }

        match my_applications {
            Ok(applications) => self.mark_applied_from(&applications),
            Err(e) => warn!("Failed to load user applications: {}", e),
        }

        if self.job.is_none() || self.user.is_none() {
            return;
        }

        if self.wants_compatibility() {
            self.compatibility_loading = true;
        }

        let (compatibility, applications) = tokio::join!(
            self.request_compatibility(),
            self.request_job_applications(),
        );

        if let Some(result) = compatibility {
            self.apply_compatibility(result);
        }
        if let Some(result) = applications {
            self.apply_job_applications(result);
        }
    }

    fn mark_applied_from(&mut self, applications: &[Application]) {
        if applications.iter().any(|a| a.job_id == self.job_id) {
            self.applied = true;
        }
    }

    fn wants_compatibility(&self) -> bool {
        self.job.is_some() && self.user.as_ref().is_some_and(User::has_skills)
    }

    async fn request_compatibility(&self) -> Option<ClientResult<CompatibilityResult>> {
        if !self.wants_compatibility() {
            return None;
        }
        let job = self.job.as_ref()?;
        let user = self.user.as_ref()?;
        Some(self.scorer.score(&job.skills, &user.skills).await)
    }

    fn apply_compatibility(&mut self, result: ClientResult<CompatibilityResult>) {
        match result {
            Ok(compatibility) => {
                info!(
                    "Compatibility for job {}: {}%",
                    self.job_id, compatibility.compatibility_score
                );
                self.compatibility = Some(compatibility);
            }
            Err(e) => {
                error!("Compatibility check failed: {}", e);
                self.notifications
                    .push(Notification::error(COMPATIBILITY_FAILED_MESSAGE));
            }
        }
        self.compatibility_loading = false;
    }

    async fn request_job_applications(&self) -> Option<ClientResult<Vec<Application>>> {
        if !self.is_recruiter_owner() {
            return None;
        }
        Some(self.jobs.job_applications(self.job_id).await)
    }

    fn apply_job_applications(&mut self, result: ClientResult<Vec<Application>>) {
        match result {
            Ok(applications) => self.job_applications = applications,
            Err(e) => error!("Failed to fetch applications for job {}: {}", self.job_id, e),
        }
    }

    /// Refresh the recruiter's application list; a no-op for anyone else
    pub async fn fetch_job_applications(&mut self) {
        if let Some(result) = self.request_job_applications().await {
            self.apply_job_applications(result);
        }
    }

    // ===== Job seeker =====

    /// Header action for the current user; only job seekers get one
    pub fn apply_action(&self) -> Option<ApplyAction> {
        let user = self.user.as_ref()?;
        let job = self.job.as_ref()?;

        if !user.is_jobseeker() {
            return None;
        }
        if self.applied {
            return Some(ApplyAction::AlreadyApplied);
        }
        if job.is_active {
            return Some(ApplyAction::Apply {
                busy: self.btn_loading,
            });
        }
        None
    }

    pub async fn apply(&mut self) -> Result<String, ViewError> {
        match self.apply_action() {
            Some(ApplyAction::Apply { busy: false }) => {}
            Some(ApplyAction::Apply { busy: true }) => {
                return Err(self.reject(ViewError::Validation(
                    "An application is already being submitted".to_string(),
                )));
            }
            Some(ApplyAction::AlreadyApplied) => {
                return Err(self.reject(ViewError::Validation(
                    "You have already applied to this job".to_string(),
                )));
            }
            None => {
                let error = match (&self.user, &self.job) {
                    (Some(user), Some(_)) if user.is_jobseeker() => ViewError::Validation(
                        "This job is closed for applications".to_string(),
                    ),
                    (_, None) => ViewError::Validation("Job not found".to_string()),
                    _ => ViewError::Forbidden("Only job seekers can apply".to_string()),
                };
                return Err(self.reject(error));
            }
        }

        self.btn_loading = true;
        let result = self.app_state.apply_job(self.job_id).await;
        self.btn_loading = false;

        match result {
            Ok(response) => {
                self.applied = true;
                self.notifications
                    .push(Notification::success(response.message.clone()));
                Ok(response.message)
            }
            Err(e) => {
                error!("Apply to job {} failed: {}", self.job_id, e);
                Err(self.service_failure(e, APPLY_FAILED_MESSAGE))
            }
        }
    }

    // ===== Recruiter =====

    pub fn is_recruiter_owner(&self) -> bool {
        match (&self.user, &self.job) {
            (Some(user), Some(job)) => job.is_posted_by(user.user_id),
            _ => false,
        }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn filtered_applications(&self) -> Vec<&Application> {
        self.job_applications
            .iter()
            .filter(|a| self.filter.matches(a))
            .collect()
    }

    /// Value of the "Update status" selector; empty means nothing chosen
    pub fn select_status(&mut self, value: &str) {
        self.selected_status = value.to_string();
    }

    pub async fn update_application_status(
        &mut self,
        application_id: i64,
    ) -> Result<String, ViewError> {
        let status = match self.selected_status.trim() {
            "" => None,
            value => value.parse::<ApplicationStatus>().ok(),
        };
        let Some(status) = status else {
            return Err(self.reject(ViewError::Validation(INVALID_STATUS_MESSAGE.to_string())));
        };

        if !self.is_recruiter_owner() {
            return Err(self.reject(ViewError::Forbidden(
                "Only the recruiter who posted this job can update applications".to_string(),
            )));
        }

        self.btn_loading = true;
        let result = self
            .jobs
            .update_application_status(application_id, status)
            .await;
        self.btn_loading = false;

        match result {
            Ok(response) => {
                self.notifications
                    .push(Notification::success(response.message.clone()));
                self.fetch_job_applications().await;
                Ok(response.message)
            }
            Err(e) => {
                error!("Status update for application {} failed: {}", application_id, e);
                Err(self.service_failure(e, UPDATE_FAILED_MESSAGE))
            }
        }
    }

    // ===== Notifications =====

    fn reject(&mut self, error: ViewError) -> ViewError {
        self.notifications.push(Notification::error(error.to_string()));
        error
    }

    fn service_failure(&mut self, source: ClientError, fallback: &str) -> ViewError {
        let message = source.user_message(fallback);
        self.notifications.push(Notification::error(message.clone()));
        ViewError::Service { message, source }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ===== Accessors =====

    pub fn job_id(&self) -> i64 {
        self.job_id
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_applied(&self) -> bool {
        self.applied
    }

    pub fn compatibility(&self) -> Option<&CompatibilityResult> {
        self.compatibility.as_ref()
    }

    pub fn is_compatibility_loading(&self) -> bool {
        self.compatibility_loading
    }

    pub fn job_applications(&self) -> &[Application] {
        &self.job_applications
    }
}
