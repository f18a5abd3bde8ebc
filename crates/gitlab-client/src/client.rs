use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use ureq::Agent;

use crate::draft_notes::DraftNotes;
use crate::error::{error_message, GitLabError, Result};
use crate::response::Response;

/// Default API root for gitlab.com.
pub const DEFAULT_BASE_URL: &str = "https://gitlab.com/api/v4";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("gitlab-client/", env!("CARGO_PKG_VERSION"));

/// Placeholder body for requests that send none.
pub const NO_BODY: Option<&()> = None;

/// HTTP methods used by the GitLab API resources in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// GitLab REST API client
pub struct GitLabClient {
    agent: Agent,
    base_url: String,
    token: String,
    user_agent: String,
}

/// Builder for [`GitLabClient`] when the defaults need adjusting.
#[derive(Debug, Clone)]
pub struct GitLabClientBuilder {
    base_url: String,
    token: String,
    timeout: Duration,
    user_agent: String,
}

impl GitLabClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn token(mut self, token: &str) -> Self {
        self.token = token.to_string();
        self
    }

    /// Global timeout covering connect, send and body read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn build(self) -> GitLabClient {
        let agent = Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        GitLabClient {
            agent,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            token: self.token,
            user_agent: self.user_agent,
        }
    }
}

impl GitLabClient {
    /// Create a new GitLab client.
    ///
    /// `base_url` should include the API version path, e.g. `https://gitlab.com/api/v4`.
    pub fn new(base_url: &str, token: &str) -> Self {
        Self::builder().base_url(base_url).token(token).build()
    }

    pub fn builder() -> GitLabClientBuilder {
        GitLabClientBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Draft notes on merge requests.
    pub fn draft_notes(&self) -> DraftNotes<'_> {
        DraftNotes::new(self)
    }

    /// Send a request and decode the JSON response body into `T`.
    ///
    /// `path` is relative to the API root. The raw [`Response`] is returned
    /// with the decoded value, and is also attached to API and decode errors.
    pub fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (text, response) = self.execute(method, path, body)?;

        match serde_json::from_str(&text) {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(GitLabError::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }

    /// Send a request whose successful response carries nothing of interest.
    pub fn send_no_content<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, body).map(|(_, response)| response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize<S>(&self, request: ureq::RequestBuilder<S>) -> ureq::RequestBuilder<S> {
        request
            .header("PRIVATE-TOKEN", &self.token)
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
    }

    /// Issue the request, check the status and read the body.
    fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(String, Response)>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let payload = body.map(serde_json::to_vec).transpose()?;

        debug!(%method, url = %url, has_body = payload.is_some(), "GitLab request");

        let result = match (method, payload) {
            (Method::Get, _) => self.authorize(self.agent.get(&url)).call(),
            (Method::Delete, _) => self.authorize(self.agent.delete(&url)).call(),
            (Method::Post, Some(bytes)) => self
                .authorize(self.agent.post(&url))
                .header("Content-Type", "application/json")
                .send(&bytes[..]),
            (Method::Post, None) => self.authorize(self.agent.post(&url)).send_empty(),
            (Method::Put, Some(bytes)) => self
                .authorize(self.agent.put(&url))
                .header("Content-Type", "application/json")
                .send(&bytes[..]),
            (Method::Put, None) => self.authorize(self.agent.put(&url)).send_empty(),
        };

        let mut http_response = result?;
        let response = Response::from_http(&http_response);
        debug!(%method, url = %url, status = response.status, "GitLab response");

        if !response.is_success() {
            let text = http_response
                .body_mut()
                .read_to_string()
                .unwrap_or_default();
            let message = error_message(response.status, &text);
            warn!(%method, url = %url, status = response.status, %message, "GitLab request failed");
            return Err(GitLabError::Api {
                status: response.status,
                message,
                response: Box::new(response),
            });
        }

        let text = http_response.body_mut().read_to_string()?;
        Ok((text, response))
    }
}
