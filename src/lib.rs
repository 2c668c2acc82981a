// chat_post: post a text message or an image to a chat server that
// authenticates with a username and password in the JSON body.
//
// - `config`: server URL and credentials, with in-source defaults and
//   environment overrides.
// - `cli`: turns the raw argument list into a `Command`.
// - `photo`: mime detection and data URL encoding for local images.
// - `api`: the blocking HTTP client for the two chat endpoints.
// - `error`: error types returned by `cli` and `api`.
// - `ui`: prints results and decides success or failure.
//
// Sending never prints anything; printing lives in `ui` so it can be
// swapped without touching the HTTP code.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod photo;
pub mod ui;

pub use api::ApiClient;
pub use cli::Command;
pub use config::Config;
pub use error::{SendError, UsageError};
