// src/types/user.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Jobseeker,
    Recruiter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl User {
    pub fn is_jobseeker(&self) -> bool {
        self.role == Role::Jobseeker
    }

    pub fn has_skills(&self) -> bool {
        !self.skills.is_empty()
    }
}
