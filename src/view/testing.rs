// src/view/testing.rs
//! In-memory collaborators for exercising the view without HTTP

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::core::{AppStateProvider, ClientError, ClientResult, CompatibilityScorer, JobDirectory};
use crate::types::{
    Application, ApplicationStatus, CompatibilityResult, Job, MessageResponse, Role, User,
};

pub fn sample_job() -> Job {
    Job {
        job_id: 7,
        title: "Backend Engineer".to_string(),
        description: "Build and run the job board services.".to_string(),
        location: "Pune".to_string(),
        salary: 1_200_000.0,
        openings: 2,
        is_active: true,
        skills: vec!["Rust".to_string(), "SQL".to_string()],
        posted_by_recuriter_id: 42,
    }
}

pub fn jobseeker(skills: Vec<String>) -> User {
    User {
        user_id: 3,
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        role: Role::Jobseeker,
        skills,
    }
}

pub fn recruiter(user_id: i64) -> User {
    User {
        user_id,
        name: "Ravi".to_string(),
        email: "ravi@example.com".to_string(),
        role: Role::Recruiter,
        skills: Vec::new(),
    }
}

pub fn application(
    application_id: i64,
    job_id: i64,
    applicant_id: i64,
    status: ApplicationStatus,
) -> Application {
    Application {
        application_id,
        job_id,
        applicant_id,
        applicant_email: None,
        resume: format!("https://cdn.example.com/resume/{}.pdf", application_id),
        status,
        applied_at: None,
    }
}

// ===== Job directory =====

pub struct FakeJobs {
    job: Option<Job>,
    applications: Mutex<Vec<Application>>,
    update_failure: Option<Option<String>>,
    list_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl FakeJobs {
    pub fn with_job(job: Job) -> Self {
        Self {
            job: Some(job),
            applications: Mutex::new(Vec::new()),
            update_failure: None,
            list_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    pub fn missing() -> Self {
        Self {
            job: None,
            ..Self::with_job(sample_job())
        }
    }

    pub fn with_applications(self, applications: Vec<Application>) -> Self {
        *self.applications.lock().unwrap() = applications;
        self
    }

    /// Make every status update fail with the given server message
    pub fn failing_updates(mut self, message: Option<&str>) -> Self {
        self.update_failure = Some(message.map(str::to_string));
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobDirectory for FakeJobs {
    async fn fetch_job(&self, job_id: i64) -> ClientResult<Job> {
        self.job
            .clone()
            .filter(|job| job.job_id == job_id)
            .ok_or_else(|| ClientError::NotFound(Some("Job not found".to_string())))
    }

    async fn job_applications(&self, job_id: i64) -> ClientResult<Vec<Application>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .applications
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> ClientResult<MessageResponse> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.update_failure {
            return Err(ClientError::from_status(400, message.clone()));
        }
        let mut applications = self.applications.lock().unwrap();
        if let Some(app) = applications
            .iter_mut()
            .find(|a| a.application_id == application_id)
        {
            app.status = status;
        }
        Ok(MessageResponse {
            message: format!("Application {} updated", application_id),
        })
    }
}

// ===== Scorer =====

pub struct FakeScorer {
    score: Option<f64>,
    calls: AtomicUsize,
}

impl FakeScorer {
    pub fn score(score: f64) -> Self {
        Self {
            score: Some(score),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            score: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompatibilityScorer for FakeScorer {
    async fn score(
        &self,
        job_skills: &[String],
        user_skills: &[String],
    ) -> ClientResult<CompatibilityResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let score = self.score.ok_or(ClientError::Timeout)?;
        let (matched, missing): (Vec<String>, Vec<String>) = job_skills
            .iter()
            .cloned()
            .partition(|skill| user_skills.contains(skill));
        Ok(CompatibilityResult {
            compatibility_score: score,
            matched_skills: matched,
            missing_skills: missing,
            partial_matches: Vec::new(),
        })
    }
}

// ===== App state =====

pub struct FakeAppState {
    user: Option<User>,
    applications: Vec<Application>,
    apply_failure: Option<Option<String>>,
    apply_calls: AtomicUsize,
}

impl FakeAppState {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            applications: Vec::new(),
            apply_failure: None,
            apply_calls: AtomicUsize::new(0),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            applications: Vec::new(),
            apply_failure: None,
            apply_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_applications(mut self, applications: Vec<Application>) -> Self {
        self.applications = applications;
        self
    }

    /// Make applying fail with the given server message
    pub fn failing_apply(mut self, message: Option<&str>) -> Self {
        self.apply_failure = Some(message.map(str::to_string));
        self
    }

    pub fn apply_calls(&self) -> usize {
        self.apply_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AppStateProvider for FakeAppState {
    async fn current_user(&self) -> ClientResult<Option<User>> {
        Ok(self.user.clone())
    }

    async fn applications(&self) -> ClientResult<Vec<Application>> {
        Ok(self.applications.clone())
    }

    async fn apply_job(&self, job_id: i64) -> ClientResult<MessageResponse> {
        self.apply_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.apply_failure {
            return Err(ClientError::from_status(400, message.clone()));
        }
        Ok(MessageResponse {
            message: format!("Applied to job {}", job_id),
        })
    }
}
