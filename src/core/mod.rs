// src/core/mod.rs
//! Service clients and configuration behind the job detail view

pub mod config_manager;
pub mod error;
pub mod job_service;
pub mod keyword_scorer;
pub mod service_client;
pub mod user_service;
pub mod utils_service;

pub use config_manager::{ConfigManager, ScorerKind, ServiceConfig};
pub use error::{ClientError, ClientResult};
pub use job_service::{JobDirectory, JobServiceClient};
pub use keyword_scorer::KeywordCompatibilityScorer;
pub use service_client::ServiceClient;
pub use user_service::{AppStateProvider, UserServiceClient};
pub use utils_service::{CompatibilityScorer, UtilsServiceClient};
