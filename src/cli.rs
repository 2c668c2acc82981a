// Command-line dispatch. The argument list is inspected once: `--photo`
// in first position selects the photo form, anything else is message
// text. Arguments arrive as `OsString` so a path that is not UTF-8 still
// reaches the file system untouched.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::UsageError;

pub const PHOTO_FLAG: &str = "--photo";

/// What a single invocation should send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Message(String),
    Photo { path: PathBuf, caption: String },
}

/// Parse the arguments that follow the program name.
///
/// Message and caption text is converted lossily; the image path is kept
/// as given. Arguments after the caption are ignored in photo mode.
pub fn parse(args: &[OsString]) -> Result<Command, UsageError> {
    match args.split_first() {
        None => Err(UsageError::NoArguments),
        Some((first, rest)) if first == PHOTO_FLAG => {
            let path = rest.first().ok_or(UsageError::MissingImagePath)?;
            let caption = rest
                .get(1)
                .map(|c| c.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(Command::Photo {
                path: PathBuf::from(path),
                caption,
            })
        }
        Some(_) => {
            let words: Vec<_> = args.iter().map(|a| a.to_string_lossy()).collect();
            Ok(Command::Message(words.join(" ")))
        }
    }
}

/// Usage text showing both invocation forms.
pub fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {program} \"Your message here\"\n  {program} {PHOTO_FLAG} image.jpg \"Optional caption\""
    )
}
