// src/export.rs
//! CSV export of a job's applications

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::types::Application;

#[derive(Debug, Serialize)]
struct ApplicationRow<'a> {
    application_id: i64,
    applicant_id: i64,
    status: &'a str,
    resume: &'a str,
    profile_url: String,
}

pub fn write_applications<W: Write>(writer: W, applications: &[&Application]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for app in applications {
        csv_writer
            .serialize(ApplicationRow {
                application_id: app.application_id,
                applicant_id: app.applicant_id,
                status: app.status.as_str(),
                resume: &app.resume,
                profile_url: app.profile_path(),
            })
            .with_context(|| format!("Failed to write application {}", app.application_id))?;
    }

    // headers are only emitted with the first record
    if applications.is_empty() {
        csv_writer
            .write_record(["application_id", "applicant_id", "status", "resume", "profile_url"])
            .context("Failed to write CSV header")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub fn export_applications(path: &Path, applications: &[&Application]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_applications(file, applications)?;
    info!(
        "Exported {} applications to {}",
        applications.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApplicationStatus;

    fn app(id: i64, status: ApplicationStatus) -> Application {
        Application {
            application_id: id,
            job_id: 7,
            applicant_id: id + 10,
            applicant_email: None,
            resume: format!("https://cdn.example.com/{}.pdf", id),
            status,
            applied_at: None,
        }
    }

    #[test]
    fn test_write_applications_rows() {
        let hired = app(1, ApplicationStatus::Hired);
        let rejected = app(2, ApplicationStatus::Rejected);
        let mut buffer = Vec::new();
        write_applications(&mut buffer, &[&hired, &rejected]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "application_id,applicant_id,status,resume,profile_url");
        assert_eq!(lines[1], "1,11,Hired,https://cdn.example.com/1.pdf,/account/11");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_export_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apps.csv");
        export_applications(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "application_id,applicant_id,status,resume,profile_url");
    }
}
