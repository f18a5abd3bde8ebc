use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use gitlab_client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const LOCAL_CONFIG_FILE: &str = ".drafts.toml";
const ENV_PREFIX: &str = "GITLAB_";
const ENV_KEYS: &[&str] = &["url", "token", "project", "timeout_secs"];

/// Connection settings, merged from defaults, config files, environment and flags
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// API root including the version path
    pub url: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub token: Option<String>,
    /// Project ID or path with namespace
    #[serde(default, deserialize_with = "string_or_number")]
    pub project: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            token: None,
            project: None,
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, ENV_PREFIX)
    }

    fn load_with_env(config_path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for path in config_paths(config_path) {
            if path.exists() {
                debug!(path = %path.display(), "Loading config file");
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(env_prefix).only(ENV_KEYS));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(
        &mut self,
        cli_url: Option<String>,
        cli_token: Option<String>,
        cli_project: Option<String>,
    ) {
        if let Some(url) = cli_url {
            self.url = url;
        }
        if let Some(token) = cli_token {
            self.token = Some(token);
        }
        if let Some(project) = cli_project {
            self.project = Some(project);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!(
                "GitLab URL not configured. Set via --url, GITLAB_URL env var, or config file"
            ));
        }
        if self.token.as_deref().map_or(true, str::is_empty) {
            return Err(anyhow!(
                "GitLab token not configured. Set via --token, GITLAB_TOKEN env var, or config file"
            ));
        }
        if self.project.as_deref().map_or(true, str::is_empty) {
            return Err(anyhow!(
                "GitLab project not configured. Set via --project, GITLAB_PROJECT env var, or config file"
            ));
        }
        Ok(())
    }

    /// Copy of the config that is safe to print
    pub fn redacted(&self) -> Self {
        Self {
            token: self.token.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Unsigned(u64),
    Signed(i64),
}

/// Numeric project IDs arrive as integers from TOML and from figment's env
/// value parsing; keep them as strings.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Unsigned(n) => n.to_string(),
            StringOrNumber::Signed(n) => n.to_string(),
        }),
    )
}

/// Config files in increasing precedence.
///
/// An explicit path replaces the search entirely.
pub fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let mut paths = Vec::new();
    if let Some(dirs) = ProjectDirs::from("", "", "drafts") {
        paths.push(dirs.config_dir().join("config.toml"));
    }
    if let Ok(dir) = std::env::current_dir() {
        let local = dir.join(LOCAL_CONFIG_FILE);
        if !paths.contains(&local) {
            paths.push(local);
        }
    }
    paths
}
