//! Extracting the maintainer line from a lookup response.

/// First non-blank line of an HTTP response body, trimmed.
pub(crate) fn first_meaningful_line(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Maintainer line from `mgarepo maintdb get` output.
///
/// When the output spans more than one line the first line is a banner or
/// warning (e.g. an ssh notice) and the answer is on the second line;
/// single-line output is the answer itself.
pub(crate) fn maintainer_from_command_output(output: &str) -> Option<String> {
    let lines: Vec<&str> = output.trim_end_matches('\n').lines().collect();
    let candidate = if lines.len() > 1 {
        lines[1]
    } else {
        lines.first().copied().unwrap_or("")
    };
    let candidate = candidate.trim();
    if candidate.is_empty() {
        None
    } else {
        Some(candidate.to_string())
    }
}
