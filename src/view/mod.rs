// src/view/mod.rs
//! Headless job detail page: state, actions and rendering

pub mod job_detail;
pub mod notify;
pub mod render;

#[cfg(test)]
pub(crate) mod testing;

pub use job_detail::{ApplyAction, JobDetailView, ViewError};
pub use notify::{Notification, NotificationKind};
pub use render::{render_text, CompatibilitySection, JobDetailModel, PageModel};
