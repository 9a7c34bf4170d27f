//! Run configuration: the values handed to the NetX test module

use std::fmt;

use crate::core::error::RunError;

/// Page size used when `-a` is not given
pub const DEFAULT_ASSETS_PER_PAGE: u32 = 10;

/// Environment variable carrying the account name
pub const USERNAME_VAR: &str = "NETX_USERNAME";
/// Environment variable carrying the account secret
pub const PASSWORD_VAR: &str = "NETX_PASSWORD";
/// Environment variable carrying the server URL
pub const URL_VAR: &str = "NETX_URL";
/// Environment variable carrying the listing page size
pub const ASSETS_PER_PAGE_VAR: &str = "ASSETS_PER_PAGE";

/// Target server as given with `-s`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerLocator {
    /// Bare hostname, e.g. `netxtest.example.org`
    Host(String),
    /// Full URL with a scheme, e.g. `https://netx.example.org`
    Url(String),
}

impl ServerLocator {
    /// Classify a raw `-s` value. Anything containing a scheme separator is a URL.
    pub fn parse(raw: &str) -> Self {
        if raw.contains("://") {
            ServerLocator::Url(raw.to_string())
        } else {
            ServerLocator::Host(raw.to_string())
        }
    }

    /// Resolve to the URL exported to the test module
    pub fn url(&self, default_scheme: &str) -> String {
        match self {
            ServerLocator::Host(host) => format!("{}://{}", default_scheme, host),
            ServerLocator::Url(url) => url.clone(),
        }
    }
}

impl fmt::Display for ServerLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerLocator::Host(host) => write!(f, "{}", host),
            ServerLocator::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Validated values for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub username: String,
    pub password: String,
    pub server: ServerLocator,
    /// Forwarded as given; the test module does its own parsing
    pub assets_per_page: String,
}

impl RunConfig {
    /// Build a run configuration from raw flag values.
    ///
    /// Username, password and server must be present and non-empty. Every
    /// missing one is reported at once so the user can fix the invocation in
    /// a single pass. A missing or empty page size falls back to
    /// [`DEFAULT_ASSETS_PER_PAGE`].
    pub fn from_parts(
        username: Option<String>,
        password: Option<String>,
        server: Option<String>,
        assets_per_page: Option<String>,
    ) -> Result<Self, RunError> {
        let username = non_empty(username);
        let password = non_empty(password);
        let server = non_empty(server);

        let mut missing = Vec::new();
        if username.is_none() {
            missing.push("-u <USERNAME>");
        }
        if password.is_none() {
            missing.push("-p <PASSWORD>");
        }
        if server.is_none() {
            missing.push("-s <SERVER>");
        }

        match (username, password, server) {
            (Some(username), Some(password), Some(server)) => Ok(Self {
                username,
                password,
                server: ServerLocator::parse(&server),
                assets_per_page: non_empty(assets_per_page)
                    .unwrap_or_else(|| DEFAULT_ASSETS_PER_PAGE.to_string()),
            }),
            _ => Err(RunError::MissingArguments { missing }),
        }
    }

    /// The four variables the test module reads, in export order
    pub fn env_vars(&self, default_scheme: &str) -> [(&'static str, String); 4] {
        [
            (USERNAME_VAR, self.username.clone()),
            (PASSWORD_VAR, self.password.clone()),
            (URL_VAR, self.server.url(default_scheme)),
            (ASSETS_PER_PAGE_VAR, self.assets_per_page.clone()),
        ]
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
