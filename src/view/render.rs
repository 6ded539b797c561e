// src/view/render.rs
//! Page model derived from the view state, and its terminal rendering

use console::style;

use super::job_detail::{ApplyAction, JobDetailView};
use super::notify::{Notification, NotificationKind};
use crate::types::{ApplicationStatus, CompatibilityResult, ScoreBand, StatusFilter};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
}

impl From<ScoreBand> for Tone {
    fn from(band: ScoreBand) -> Self {
        match band {
            ScoreBand::Green => Tone::Green,
            ScoreBand::Yellow => Tone::Yellow,
            ScoreBand::Red => Tone::Red,
        }
    }
}

pub fn status_tone(status: ApplicationStatus) -> Tone {
    match status {
        ApplicationStatus::Hired => Tone::Green,
        ApplicationStatus::Rejected => Tone::Red,
        ApplicationStatus::Submitted => Tone::Yellow,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageModel {
    Loading,
    NotFound,
    Loaded(Box<JobDetailModel>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailModel {
    pub title: String,
    pub status_label: &'static str,
    pub status_tone: Tone,
    pub apply_action: Option<ApplyAction>,
    pub location: String,
    pub salary: String,
    pub openings: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Present only when the current user lists skills
    pub compatibility: Option<CompatibilitySection>,
    /// Present only for the recruiter who posted the job
    pub applications: Option<ApplicationsSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompatibilitySection {
    Analyzing,
    Ready {
        result: CompatibilityResult,
        tone: Tone,
    },
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationsSection {
    pub filter: StatusFilter,
    pub total: usize,
    pub cards: Vec<ApplicationCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationCard {
    pub application_id: i64,
    pub status: ApplicationStatus,
    pub tone: Tone,
    pub resume: String,
    pub profile_path: String,
}

impl JobDetailView {
    pub fn page(&self) -> PageModel {
        if self.is_loading() {
            return PageModel::Loading;
        }
        let Some(job) = self.job() else {
            return PageModel::NotFound;
        };

        let compatibility = match self.user() {
            Some(user) if user.has_skills() => Some(if self.is_compatibility_loading() {
                CompatibilitySection::Analyzing
            } else {
                match self.compatibility() {
                    Some(result) => CompatibilitySection::Ready {
                        tone: result.band().into(),
                        result: result.clone(),
                    },
                    None => CompatibilitySection::Unavailable,
                }
            }),
            _ => None,
        };

        let applications = self.is_recruiter_owner().then(|| ApplicationsSection {
            filter: self.filter(),
            total: self.job_applications().len(),
            cards: self
                .filtered_applications()
                .into_iter()
                .map(|app| ApplicationCard {
                    application_id: app.application_id,
                    status: app.status,
                    tone: status_tone(app.status),
                    resume: app.resume.clone(),
                    profile_path: app.profile_path(),
                })
                .collect(),
        });

        PageModel::Loaded(Box::new(JobDetailModel {
            title: job.title.clone(),
            status_label: job.status_label(),
            status_tone: if job.is_active { Tone::Green } else { Tone::Red },
            apply_action: self.apply_action(),
            location: job.location.clone(),
            salary: job.salary_label(),
            openings: job.openings_label(),
            description: job.description.clone(),
            skills: job.skills.clone(),
            compatibility,
            applications,
        }))
    }

    pub fn render_text(&self) -> String {
        render_text(&self.page())
    }
}

fn paint(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Green => style(text).green().to_string(),
        Tone::Yellow => style(text).yellow().to_string(),
        Tone::Red => style(text).red().to_string(),
    }
}

fn progress_bar(percent: f64, tone: Tone) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        paint(&"█".repeat(filled), tone),
        "░".repeat(BAR_WIDTH - filled)
    )
}

pub fn render_text(page: &PageModel) -> String {
    let model = match page {
        PageModel::Loading => return "Loading...\n".to_string(),
        PageModel::NotFound => return "Job not found\n".to_string(),
        PageModel::Loaded(model) => model,
    };

    let mut lines = vec![
        format!("[{}]", paint(model.status_label, model.status_tone)),
        style(&model.title).bold().to_string(),
    ];

    match model.apply_action {
        Some(ApplyAction::AlreadyApplied) => {
            lines.push(paint("✓ Already Applied", Tone::Green));
        }
        Some(ApplyAction::Apply { busy: true }) => lines.push("Applying...".to_string()),
        Some(ApplyAction::Apply { busy: false }) => {
            lines.push("Easy Apply available (jobboard apply <job_id>)".to_string());
        }
        None => {}
    }

    lines.extend([
        String::new(),
        format!("Location: {}", model.location),
        format!("Salary:   {}", model.salary),
        format!("Openings: {}", model.openings),
        String::new(),
        style("Job Description").bold().to_string(),
        model.description.clone(),
    ]);

    if !model.skills.is_empty() {
        lines.extend([
            String::new(),
            style("Required Skills").bold().to_string(),
            model.skills.join(", "),
        ]);
    }

    if let Some(section) = &model.compatibility {
        lines.push(String::new());
        lines.push(style("AI Job Compatibility").bold().to_string());
        match section {
            CompatibilitySection::Analyzing => {
                lines.push("Analyzing compatibility...".to_string());
            }
            CompatibilitySection::Unavailable => {}
            CompatibilitySection::Ready { result, tone } => {
                lines.push(format!("Match Score: {}%", result.compatibility_score));
                lines.push(progress_bar(result.bar_percent(), *tone));
                for (label, skills, tone) in [
                    ("Matched Skills", &result.matched_skills, Tone::Green),
                    ("Missing Skills", &result.missing_skills, Tone::Red),
                    ("Partial Matches", &result.partial_matches, Tone::Yellow),
                ] {
                    if !skills.is_empty() {
                        lines.push(paint(&format!("{}: {}", label, skills.join(", ")), tone));
                    }
                }
            }
        }
    }

    if let Some(section) = &model.applications {
        lines.push(String::new());
        lines.push(style("Applications").bold().to_string());
        lines.push(format!("Filter: {}", section.filter));

        if section.total == 0 {
            lines.push("No applications yet.".to_string());
        } else if section.cards.is_empty() {
            lines.push("No applications match the filter.".to_string());
        }

        lines.extend(section.cards.iter().map(|card| {
            format!(
                "#{} [{}] resume: {} profile: {}",
                card.application_id,
                paint(card.status.as_str(), card.tone),
                card.resume,
                card.profile_path
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_notification(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Success => paint(&format!("✓ {}", notification.message), Tone::Green),
        NotificationKind::Error => paint(&format!("✗ {}", notification.message), Tone::Red),
    }
}
