// src/core/keyword_scorer.rs
//! Offline compatibility scorer based on skill keyword overlap.
//!
//! Skills are compared as lowercase word tokens, split on whitespace and
//! punctuation ("Node.js" → `node js`; `+` and `#` stay inside a token so
//! "C++" and "C#" are not "C"). For each job skill:
//! - same tokens as a user skill → matched (weight 1.0)
//! - every token of the shorter skill is a token of the longer one,
//!   e.g. "react" / "react native" → partial (weight 0.5)
//! - otherwise → missing
//!
//! score = round(Σ weight / job skill count × 100), 0 when the job lists no skills.

use async_trait::async_trait;
use tracing::debug;

use super::error::ClientResult;
use super::utils_service::CompatibilityScorer;
use crate::types::CompatibilityResult;

const PARTIAL_WEIGHT: f64 = 0.5;

pub struct KeywordCompatibilityScorer;

#[async_trait]
impl CompatibilityScorer for KeywordCompatibilityScorer {
    async fn score(
        &self,
        job_skills: &[String],
        user_skills: &[String],
    ) -> ClientResult<CompatibilityResult> {
        Ok(compute_keyword_compatibility(job_skills, user_skills))
    }
}

fn tokens(skill: &str) -> Vec<String> {
    skill
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_partial(a: &[String], b: &[String]) -> bool {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    shorter.iter().all(|t| longer.contains(t))
}

pub fn compute_keyword_compatibility(
    job_skills: &[String],
    user_skills: &[String],
) -> CompatibilityResult {
    let user_tokens: Vec<Vec<String>> = user_skills
        .iter()
        .map(|s| tokens(s))
        .filter(|t| !t.is_empty())
        .collect();

    let mut matched_skills = Vec::new();
    let mut partial_matches = Vec::new();
    let mut missing_skills = Vec::new();
    let mut counted = 0usize;

    for skill in job_skills {
        let wanted = tokens(skill);
        if wanted.is_empty() {
            continue;
        }
        counted += 1;

        if user_tokens.iter().any(|have| *have == wanted) {
            matched_skills.push(skill.clone());
        } else if user_tokens.iter().any(|have| is_partial(have, &wanted)) {
            partial_matches.push(skill.clone());
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let compatibility_score = if counted == 0 {
        0.0
    } else {
        let earned = matched_skills.len() as f64 + PARTIAL_WEIGHT * partial_matches.len() as f64;
        (earned / counted as f64 * 100.0).round()
    };

    debug!(
        "Keyword compatibility: {} matched, {} partial, {} missing → {}",
        matched_skills.len(),
        partial_matches.len(),
        missing_skills.len(),
        compatibility_score
    );

    CompatibilityResult {
        compatibility_score,
        matched_skills,
        missing_skills,
        partial_matches,
    }
}
