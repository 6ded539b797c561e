// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

use crate::core::{ConfigManager, ScorerKind};
use crate::export::export_applications;
use crate::types::StatusFilter;
use crate::view::render::{render_notification, CompatibilitySection, PageModel};
use crate::view::JobDetailView;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "View job postings, apply, and manage applications")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Bearer token for the job and user services (or JOBBOARD_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path to config.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Compatibility backend
    #[arg(long, global = true, value_enum)]
    pub scorer: Option<ScorerKind>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a job posting
    Show {
        job_id: i64,
        /// Application filter for the recruiter view
        #[arg(long, default_value = "All")]
        status: StatusFilter,
    },
    /// Apply to a job
    Apply { job_id: i64 },
    /// List applications for a job you posted
    Applications {
        job_id: i64,
        #[arg(long, default_value = "All")]
        status: StatusFilter,
        /// Write the listed applications to a CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Change the status of an application (Submitted, Hired or Rejected)
    UpdateStatus {
        job_id: i64,
        application_id: i64,
        status: String,
    },
    /// Score your skills against a job
    Compatibility { job_id: i64 },
}

impl Cli {
    pub fn load_config(&self) -> Result<ConfigManager> {
        Ok(ConfigManager::load(self.config.as_deref())?
            .with_overrides(self.token.clone(), self.scorer))
    }
}

fn flush_notifications(view: &mut JobDetailView) -> bool {
    let mut failed = false;
    for notification in view.drain_notifications() {
        failed |= notification.is_error();
        println!("{}", render_notification(&notification));
    }
    failed
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<ExitCode> {
    let job_id = match &cli.command {
        Command::Show { job_id, .. }
        | Command::Apply { job_id }
        | Command::Applications { job_id, .. }
        | Command::UpdateStatus { job_id, .. }
        | Command::Compatibility { job_id } => *job_id,
    };

    let mut view = crate::build_view(&config, job_id)?;
    view.load().await;

    if view.job().is_none() {
        println!("{}", view.render_text().trim_end());
        return Ok(ExitCode::FAILURE);
    }

    match cli.command {
        Command::Show { status, .. } => {
            view.set_filter(status);
            print!("{}", view.render_text());
            let failed = flush_notifications(&mut view);
            Ok(exit_code(!failed))
        }

        Command::Apply { .. } => {
            let result = view.apply().await;
            flush_notifications(&mut view);
            Ok(exit_code(result.is_ok()))
        }

        Command::Applications { status, export, .. } => {
            if !view.is_recruiter_owner() {
                warn!("User is not the recruiter of job {}", job_id);
                println!("Only the recruiter who posted this job can view its applications");
                return Ok(ExitCode::FAILURE);
            }

            view.set_filter(status);
            let applications = view.filtered_applications();

            if view.job_applications().is_empty() {
                println!("No applications yet.");
            }
            for app in &applications {
                println!(
                    "#{} [{}] applicant {} resume: {} profile: {}",
                    app.application_id,
                    app.status,
                    app.applicant_id,
                    app.resume,
                    app.profile_path()
                );
            }
            info!(
                "Listed {} of {} applications ({})",
                applications.len(),
                view.job_applications().len(),
                status
            );

            if let Some(path) = export {
                export_applications(&path, &applications)?;
                println!("Exported {} applications to {}", applications.len(), path.display());
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::UpdateStatus {
            application_id,
            status,
            ..
        } => {
            view.select_status(&status);
            let result = view.update_application_status(application_id).await;
            flush_notifications(&mut view);
            if result.is_ok() {
                if let Some(app) = view
                    .job_applications()
                    .iter()
                    .find(|a| a.application_id == application_id)
                {
                    println!("Application #{} is now {}", app.application_id, app.status);
                }
            }
            Ok(exit_code(result.is_ok()))
        }

        Command::Compatibility { .. } => {
            let section = match view.page() {
                PageModel::Loaded(model) => model.compatibility,
                _ => None,
            };
            match section {
                None => {
                    println!("Add skills to your profile to check compatibility");
                    Ok(ExitCode::FAILURE)
                }
                Some(CompatibilitySection::Ready { result, .. }) => {
                    println!("Match Score: {}%", result.compatibility_score);
                    println!("Matched Skills: {}", result.matched_skills.join(", "));
                    println!("Missing Skills: {}", result.missing_skills.join(", "));
                    println!("Partial Matches: {}", result.partial_matches.join(", "));
                    Ok(ExitCode::SUCCESS)
                }
                Some(_) => {
                    flush_notifications(&mut view);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
