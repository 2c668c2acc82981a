// Configuration for the chat client. Values default to the constants
// below and can be overridden from the environment, the same way the
// API client picks up its base URL.

/// Base URL used when `CHAT_SERVER` is not set.
pub const DEFAULT_SERVER: &str = "http://localhost:3000";
/// Username used when `CHAT_USERNAME` is not set.
pub const DEFAULT_USERNAME: &str = "your_username";
/// Password used when `CHAT_PASSWORD` is not set.
pub const DEFAULT_PASSWORD: &str = "your_password";

pub const SERVER_ENV: &str = "CHAT_SERVER";
pub const USERNAME_ENV: &str = "CHAT_USERNAME";
pub const PASSWORD_ENV: &str = "CHAT_PASSWORD";

/// Server location and the credentials sent in every request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub server: String,
    pub username: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: DEFAULT_SERVER.into(),
            username: DEFAULT_USERNAME.into(),
            password: DEFAULT_PASSWORD.into(),
        }
    }
}

impl Config {
    pub fn new(
        server: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Config {
            server: server.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Start from the defaults and replace each field whose environment
    /// variable is set (`CHAT_SERVER`, `CHAT_USERNAME`, `CHAT_PASSWORD`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reads values through `lookup`, which keeps
    /// tests away from the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Config {
            server: lookup(SERVER_ENV).unwrap_or(defaults.server),
            username: lookup(USERNAME_ENV).unwrap_or(defaults.username),
            password: lookup(PASSWORD_ENV).unwrap_or(defaults.password),
        }
    }

    /// Server URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.server.trim_end_matches('/')
    }

    /// Things that look wrong but do not stop a send.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        let server = self.server.to_ascii_lowercase();
        if !(server.starts_with("http://") || server.starts_with("https://")) {
            out.push(format!("server URL `{}` is not http(s)", self.server));
        }
        if self.username.is_empty() {
            out.push("username is empty".into());
        }
        if self.password.is_empty() {
            out.push("password is empty".into());
        }
        out
    }
}
