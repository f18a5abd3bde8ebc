use serde::Serialize;

/// Query options for listing draft notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDraftNotesOptions {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub order_by: Option<String>,
    /// `asc` or `desc`
    pub sort: Option<String>,
}

impl ListDraftNotesOptions {
    /// Render the set fields as a query string (without the leading `?`).
    pub fn to_query(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(format!("page={}", page));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(format!("per_page={}", per_page));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(format!("order_by={}", urlencoding::encode(order_by)));
        }
        if let Some(sort) = &self.sort {
            pairs.push(format!("sort={}", urlencoding::encode(sort)));
        }
        pairs.join("&")
    }
}

/// Request to create a draft note
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CreateDraftNoteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to_discussion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_discussion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionOptions>,
}

impl CreateDraftNoteOptions {
    pub fn new(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Default::default()
        }
    }
}

/// Request to update a draft note
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct UpdateDraftNoteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionOptions>,
}

/// Diff position sent when anchoring a note to a line or image.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PositionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_range: Option<LineRangeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct LineRangeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<LinePositionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<LinePositionOptions>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct LinePositionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_code: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line: Option<u64>,
}
