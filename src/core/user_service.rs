// src/core/user_service.rs
//! Application state provider: current user, their applications and the apply action

use async_trait::async_trait;
use tracing::info;

use super::error::ClientResult;
use super::service_client::ServiceClient;
use crate::types::{Application, ApplyJobRequest, MessageResponse, User};

const ME_ENDPOINT: &str = "/api/user/me";
const MY_APPLICATIONS_ENDPOINT: &str = "/api/user/application/all";
const APPLY_ENDPOINT: &str = "/api/user/apply/job";

#[async_trait]
pub trait AppStateProvider: Send + Sync {
    /// The signed-in user, or `None` for an anonymous visitor
    async fn current_user(&self) -> ClientResult<Option<User>>;

    /// Applications submitted by the current user
    async fn applications(&self) -> ClientResult<Vec<Application>>;

    async fn apply_job(&self, job_id: i64) -> ClientResult<MessageResponse>;
}

pub struct UserServiceClient {
    http: ServiceClient,
}

impl UserServiceClient {
    pub fn new(http: ServiceClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AppStateProvider for UserServiceClient {
    async fn current_user(&self) -> ClientResult<Option<User>> {
        if !self.http.has_token() {
            info!("No auth token, browsing anonymously");
            return Ok(None);
        }
        let user: User = self.http.get_authorized(ME_ENDPOINT).await?;
        Ok(Some(user))
    }

    async fn applications(&self) -> ClientResult<Vec<Application>> {
        if !self.http.has_token() {
            return Ok(Vec::new());
        }
        self.http.get_authorized(MY_APPLICATIONS_ENDPOINT).await
    }

    async fn apply_job(&self, job_id: i64) -> ClientResult<MessageResponse> {
        info!("Applying to job {}", job_id);
        self.http
            .post_json_authorized(APPLY_ENDPOINT, &ApplyJobRequest { job_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_anonymous_visitor_has_no_user() {
        let mut server = Server::new_async().await;
        let mock = server.mock("GET", "/api/user/me").expect(0).create_async().await;

        let provider = UserServiceClient::new(ServiceClient::new(&server.url(), None, 5).unwrap());
        assert!(provider.current_user().await.unwrap().is_none());
        assert!(provider.applications().await.unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_current_user_and_apply() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/user/me")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"user_id":3,"name":"Asha","email":"asha@example.com","role":"jobseeker","skills":["Rust"]}"#,
            )
            .create_async()
            .await;
        let apply = server
            .mock("POST", "/api/user/apply/job")
            .match_header("authorization", "Bearer tok")
            .match_body(Matcher::Json(serde_json::json!({"job_id": 7})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Applied successfully"}"#)
            .create_async()
            .await;

        let provider = UserServiceClient::new(
            ServiceClient::new(&server.url(), Some("tok".to_string()), 5).unwrap(),
        );

        let user = provider.current_user().await.unwrap().unwrap();
        assert_eq!(user.role, Role::Jobseeker);
        assert!(user.has_skills());

        let response = provider.apply_job(7).await.unwrap();
        assert_eq!(response.message, "Applied successfully");
        apply.assert_async().await;
    }
}
