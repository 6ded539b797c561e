// src/types/compatibility.rs
//! Skill compatibility between a job and a user

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest {
    pub job_skills: Vec<String>,
    pub user_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub compatibility_score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub partial_matches: Vec<String>,
}

impl CompatibilityResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.compatibility_score)
    }

    /// Score clamped to 0..=100 for drawing the progress bar
    pub fn bar_percent(&self) -> f64 {
        self.compatibility_score.clamp(0.0, 100.0)
    }
}

/// Color band of the match score progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Green,
    Yellow,
    Red,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score > 75.0 {
            ScoreBand::Green
        } else if score > 45.0 {
            ScoreBand::Yellow
        } else {
            ScoreBand::Red
        }
    }
}
