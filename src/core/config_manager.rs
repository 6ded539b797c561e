// src/core/config_manager.rs
//! Configuration: optional config.yaml sections overridden by environment variables

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use super::service_client::DEFAULT_TIMEOUT_SECS;

const DEFAULT_JOB_SERVICE_URL: &str = "http://localhost:5002";
const DEFAULT_UTILS_SERVICE_URL: &str = "http://localhost:5001";
const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:5003";
const DEFAULT_LOG_FILE: &str = "/tmp/jobboard.log";
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Which backend computes compatibility scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    #[default]
    Remote,
    Local,
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub job_service_url: String,
    pub utils_service_url: String,
    pub user_service_url: String,
    pub timeout_seconds: u64,
    pub scorer: ScorerKind,
    pub log_file: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            job_service_url: DEFAULT_JOB_SERVICE_URL.to_string(),
            utils_service_url: DEFAULT_UTILS_SERVICE_URL.to_string(),
            user_service_url: DEFAULT_USER_SERVICE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            scorer: ScorerKind::Remote,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// One environment section of config.yaml; every key is optional
#[derive(Debug, Default, Deserialize)]
struct FileSection {
    job_service_url: Option<String>,
    utils_service_url: Option<String>,
    user_service_url: Option<String>,
    timeout_seconds: Option<u64>,
    scorer: Option<ScorerKind>,
    log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSection,
    #[serde(default)]
    production: FileSection,
}

impl ConfigManager {
    /// Load configuration from the process environment.
    ///
    /// `config_path` defaults to `./config.yaml`; a missing default file is fine,
    /// a missing explicit one is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    pub fn load_with<F>(config_path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = env("JOBBOARD_ENV")
            .or_else(|| env("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut service = ServiceConfig::default();

        if let Some(section) = Self::read_section(config_path, &environment)? {
            service.apply_section(section);
        }
        service.apply_env(&env)?;
        service.trim_urls();

        let token = env("JOBBOARD_TOKEN").filter(|t| !t.trim().is_empty());

        Ok(Self {
            environment,
            service,
            token,
        })
    }

    /// Command line values win over file and environment
    pub fn with_overrides(mut self, token: Option<String>, scorer: Option<ScorerKind>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.token = Some(token);
        }
        if let Some(scorer) = scorer {
            self.service.scorer = scorer;
        }
        self
    }

    fn read_section(config_path: Option<&Path>, environment: &str) -> Result<Option<FileSection>> {
        let (path, required) = match config_path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(Some(match environment {
            "production" => file.production,
            _ => file.local,
        }))
    }
}

impl ServiceConfig {
    fn apply_section(&mut self, section: FileSection) {
        if let Some(url) = section.job_service_url {
            self.job_service_url = url;
        }
        if let Some(url) = section.utils_service_url {
            self.utils_service_url = url;
        }
        if let Some(url) = section.user_service_url {
            self.user_service_url = url;
        }
        if let Some(timeout) = section.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(scorer) = section.scorer {
            self.scorer = scorer;
        }
        if let Some(log_file) = section.log_file {
            self.log_file = log_file;
        }
    }

    fn apply_env<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env("JOB_SERVICE_URL") {
            self.job_service_url = url;
        }
        if let Some(url) = env("UTILS_SERVICE_URL") {
            self.utils_service_url = url;
        }
        if let Some(url) = env("USER_SERVICE_URL") {
            self.user_service_url = url;
        }
        if let Some(timeout) = env("JOBBOARD_TIMEOUT_SECS") {
            self.timeout_seconds = timeout
                .trim()
                .parse()
                .context("JOBBOARD_TIMEOUT_SECS must be a whole number of seconds")?;
        }
        if let Some(log_file) = env("JOBBOARD_LOG_FILE") {
            self.log_file = PathBuf::from(log_file);
        }
        Ok(())
    }

    fn trim_urls(&mut self) {
        for url in [
            &mut self.job_service_url,
            &mut self.utils_service_url,
            &mut self.user_service_url,
        ] {
            *url = url.trim().trim_end_matches('/').to_string();
        }
    }
}
