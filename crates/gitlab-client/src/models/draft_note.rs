use serde::{Deserialize, Serialize};

/// A merge request comment staged by a reviewer but not yet published.
///
/// Missing and `null` fields decode to their default, so a sparse response
/// body still yields a complete value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DraftNote {
    pub id: u64,
    pub author_id: u64,
    pub merge_request_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub resolve_discussion: bool,
    pub discussion_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
    pub commit_id: Option<String>,
    pub line_code: Option<String>,
    pub position: Option<NotePosition>,
}

/// Diff coordinates a draft note is anchored to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NotePosition {
    #[serde(deserialize_with = "null_as_default")]
    pub base_sha: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_sha: String,
    #[serde(deserialize_with = "null_as_default")]
    pub head_sha: String,
    #[serde(deserialize_with = "null_as_default")]
    pub old_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub new_path: String,
    /// `text` or `image`
    #[serde(deserialize_with = "null_as_default")]
    pub position_type: String,
    pub new_line: Option<u64>,
    pub old_line: Option<u64>,
    pub line_range: Option<LineRange>,
    // Image diff coordinates
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub x: Option<u64>,
    pub y: Option<u64>,
}

/// Multi-line range of a positioned note.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LineRange {
    pub start: Option<LinePosition>,
    pub end: Option<LinePosition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LinePosition {
    #[serde(deserialize_with = "null_as_default")]
    pub line_code: String,
    /// `new` or `old`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub line_type: String,
    pub old_line: Option<u64>,
    pub new_line: Option<u64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
