// API client module: a small blocking HTTP client for the two chat
// endpoints. Each call is a single POST with a JSON body; credentials
// travel inside that body rather than in a header.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::error::SendError;
use crate::photo;

/// Blocking client holding the reqwest client and the configuration
/// (server URL and credentials) used for every request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

/// Body for `POST /api/message`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageRequest {
    pub username: String,
    pub password: String,
    pub message: String,
}

/// Body for `POST /api/photo`. `photo` is a data URL.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PhotoRequest {
    pub username: String,
    pub password: String,
    pub photo: String,
    pub caption: String,
}

impl ApiClient {
    /// Build a client for `config`. Requests wait for the server as long
    /// as it takes; no timeout is set.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, config })
    }

    /// Create an ApiClient configured from `CHAT_SERVER`, `CHAT_USERNAME`
    /// and `CHAT_PASSWORD`, falling back to the built-in defaults.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn message_url(&self) -> String {
        format!("{}/api/message", self.config.base_url())
    }

    pub fn photo_url(&self) -> String {
        format!("{}/api/photo", self.config.base_url())
    }

    pub fn message_request(&self, message: &str) -> MessageRequest {
        MessageRequest {
            username: self.config.username.clone(),
            password: self.config.password.clone(),
            message: message.to_string(),
        }
    }

    pub fn photo_request(&self, photo: String, caption: &str) -> PhotoRequest {
        PhotoRequest {
            username: self.config.username.clone(),
            password: self.config.password.clone(),
            photo,
            caption: caption.to_string(),
        }
    }

    /// Post a chat message and return the decoded JSON response.
    pub fn send_message(&self, message: &str) -> Result<Value, SendError> {
        let req = self.message_request(message);
        self.post_json(&self.message_url(), &req)
    }

    /// Read `path`, post it as a data URL with `caption` and return the
    /// decoded JSON response. Nothing is sent if the file can't be read.
    pub fn send_photo(&self, path: &Path, caption: &str) -> Result<Value, SendError> {
        let data = photo::load_photo(path)?;
        let req = self.photo_request(data, caption);
        self.post_json(&self.photo_url(), &req)
    }

    /// One POST attempt. Non-2xx keeps the raw body for the caller.
    fn post_json<T: Serialize>(&self, url: &str, body: &T) -> Result<Value, SendError> {
        tracing::debug!(url, "sending request");
        let res = self.client.post(url).json(body).send()?;

        let status = res.status();
        tracing::debug!(status = status.as_u16(), "response received");
        if !status.is_success() {
            let body = res
                .text()
                .unwrap_or_else(|e| format!("<response body unreadable: {e}>"));
            return Err(SendError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(res.json::<Value>()?)
    }
}
