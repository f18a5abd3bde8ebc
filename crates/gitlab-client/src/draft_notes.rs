//! Draft notes on merge requests.
//!
//! See <https://docs.gitlab.com/ee/api/draft_notes.html>.

use crate::client::{GitLabClient, Method, NO_BODY};
use crate::error::Result;
use crate::models::*;
use crate::project::ProjectId;
use crate::response::Response;

/// Draft notes resource, borrowed from a [`GitLabClient`].
#[derive(Clone, Copy)]
pub struct DraftNotes<'a> {
    client: &'a GitLabClient,
}

impl<'a> DraftNotes<'a> {
    pub(crate) fn new(client: &'a GitLabClient) -> Self {
        Self { client }
    }

    /// `projects/:id/merge_requests/:iid/draft_notes` plus `suffix`
    fn path(project: &ProjectId, merge_request: u64, suffix: &str) -> String {
        format!(
            "projects/{}/merge_requests/{}/draft_notes{}",
            project.escaped(),
            merge_request,
            suffix
        )
    }

    /// Get a single draft note
    pub fn get_draft_note(
        &self,
        project: impl Into<ProjectId>,
        merge_request: u64,
        note: u64,
    ) -> Result<(DraftNote, Response)> {
        let path = Self::path(&project.into(), merge_request, &format!("/{}", note));
        self.client.send(Method::Get, &path, NO_BODY)
    }

    /// List draft notes of a merge request, in the order the server returns them
    pub fn list_draft_notes(
        &self,
        project: impl Into<ProjectId>,
        merge_request: u64,
        options: Option<&ListDraftNotesOptions>,
    ) -> Result<(Vec<DraftNote>, Response)> {
        let mut path = Self::path(&project.into(), merge_request, "");
        if let Some(query) = options.map(|o| o.to_query()).filter(|q| !q.is_empty()) {
            path.push('?');
            path.push_str(&query);
        }
        self.client.send(Method::Get, &path, NO_BODY)
    }

    /// Create a draft note
    pub fn create_draft_note(
        &self,
        project: impl Into<ProjectId>,
        merge_request: u64,
        options: &CreateDraftNoteOptions,
    ) -> Result<(DraftNote, Response)> {
        let path = Self::path(&project.into(), merge_request, "");
        self.client.send(Method::Post, &path, Some(options))
    }

    /// Update an existing draft note (GitLab uses PUT, not PATCH)
    pub fn update_draft_note(
        &self,
        project: impl Into<ProjectId>,
        merge_request: u64,
        note: u64,
        options: &UpdateDraftNoteOptions,
    ) -> Result<(DraftNote, Response)> {
        let path = Self::path(&project.into(), merge_request, &format!("/{}", note));
        self.client.send(Method::Put, &path, Some(options))
    }

    /// Delete a draft note
    pub fn delete_draft_note(
        &self,
        project: impl Into<ProjectId>,
        merge_request: u64,
        note: u64,
    ) -> Result<Response> {
        let path = Self::path(&project.into(), merge_request, &format!("/{}", note));
        self.client.send_no_content(Method::Delete, &path, NO_BODY)
    }

    /// Publish a single draft note, turning it into a visible discussion note
    pub fn publish_draft_note(
        &self,
        project: impl Into<ProjectId>,
        merge_request: u64,
        note: u64,
    ) -> Result<Response> {
        let path = Self::path(&project.into(), merge_request, &format!("/{}/publish", note));
        self.client.send_no_content(Method::Put, &path, NO_BODY)
    }

    /// Publish every draft note the current user has on the merge request
    pub fn publish_all_draft_notes(
        &self,
        project: impl Into<ProjectId>,
        merge_request: u64,
    ) -> Result<Response> {
        let path = Self::path(&project.into(), merge_request, "/bulk_publish");
        self.client.send_no_content(Method::Post, &path, NO_BODY)
    }
}
