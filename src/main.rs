// chat-post binary: one invocation, one request. Usage problems and
// failed sends both end with exit status 1.

use std::ffi::OsString;
use std::process::ExitCode;

use chat_post::{api::ApiClient, cli, ui, UsageError};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let mut args = std::env::args_os();
    let program = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "chat-post".into());
    let args: Vec<OsString> = args.collect();

    let command = match cli::parse(&args) {
        Ok(command) => command,
        Err(UsageError::NoArguments) => {
            println!("{}", cli::usage(&program));
            return ExitCode::FAILURE;
        }
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match send(&command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn send(command: &cli::Command) -> anyhow::Result<bool> {
    // Server URL and credentials come from `CHAT_SERVER`, `CHAT_USERNAME`
    // and `CHAT_PASSWORD`, or the defaults in `config`.
    let api = ApiClient::from_env()?;
    for warning in api.config().warnings() {
        tracing::warn!("{warning}");
    }
    Ok(ui::run(&api, command))
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
