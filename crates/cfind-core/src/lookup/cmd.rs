//! Command variant of the lookup: `mgarepo maintdb get <package>`.

use std::process::Command;

use super::{parse, LookupError};

/// Runs `mgarepo maintdb get` and returns the maintainer line from its
/// output. stderr is merged into the parsed text so that the banner line
/// mgarepo prints before the answer is handled the same way in both
/// streams.
pub(crate) fn fetch(package: &str) -> Result<String, LookupError> {
    let output = Command::new("mgarepo")
        .args(["maintdb", "get", package])
        .output()?;

    if !output.status.success() {
        return Err(LookupError::CommandFailed {
            status: output.status.code().unwrap_or(-1),
        });
    }

    let mut text = String::from_utf8_lossy(&output.stderr).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stdout));
    parse::maintainer_from_command_output(&text).ok_or(LookupError::EmptyResponse)
}
