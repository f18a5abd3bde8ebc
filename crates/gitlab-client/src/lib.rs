pub mod client;
pub mod draft_notes;
pub mod error;
pub mod models;
pub mod project;
pub mod response;

#[cfg(test)]
mod draft_notes_tests;

pub use client::{GitLabClient, GitLabClientBuilder, Method, DEFAULT_BASE_URL, NO_BODY};
pub use draft_notes::DraftNotes;
pub use error::{GitLabError, Result};
pub use models::*;
pub use project::ProjectId;
pub use response::Response;
