use std::fmt;

/// A GitLab project reference: numeric ID or `namespace/path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectId {
    Id(u64),
    Path(String),
}

impl ProjectId {
    /// Render as a single URL path segment.
    ///
    /// Paths are fully percent-encoded so `group/project` becomes
    /// `group%2Fproject`, which is what GitLab expects for `:id`.
    pub fn escaped(&self) -> String {
        match self {
            ProjectId::Id(id) => id.to_string(),
            ProjectId::Path(path) => urlencoding::encode(path).into_owned(),
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Id(id) => write!(f, "{}", id),
            ProjectId::Path(path) => f.write_str(path),
        }
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        ProjectId::Id(id)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        ProjectId::Path(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        ProjectId::Path(s)
    }
}

impl From<&String> for ProjectId {
    fn from(s: &String) -> Self {
        ProjectId::Path(s.clone())
    }
}
