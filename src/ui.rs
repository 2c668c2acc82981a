// UI layer: runs one command against the API client and prints the
// result. All user-facing output goes to stdout; the spinner draws on
// stderr and stays hidden when stderr is not a terminal. The spinner is
// drawn from the calling thread only, no ticker thread is started.

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use crate::api::ApiClient;
use crate::cli::Command;
use crate::error::SendError;

/// Send `command`, print the outcome and report whether it succeeded.
pub fn run(api: &ApiClient, command: &Command) -> bool {
    let result = match command {
        Command::Message(text) => with_spinner("Sending message...", || api.send_message(text)),
        Command::Photo { path, caption } => {
            with_spinner("Uploading photo...", || api.send_photo(path, caption))
        }
    };
    if let Err(e) = &result {
        tracing::debug!(error = ?e, "send failed");
    }
    println!("{}", render(&result));
    result.is_ok()
}

/// Text printed for a finished send: the response as 2-space indented
/// JSON, or the error line.
pub fn render(result: &Result<Value, SendError>) -> String {
    match result {
        Ok(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        Err(e) => e.to_string(),
    }
}

fn with_spinner<T>(msg: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(msg);
    spinner.tick();
    let out = f();
    spinner.finish_and_clear();
    out
}
