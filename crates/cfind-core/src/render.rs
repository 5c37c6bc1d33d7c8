//! Presentation adapter: lookup result -> rich-text fragment.
//!
//! The output is the two-line fragment the dialog's rich-text widget
//! displays: a profile hyperlink and a mailto hyperlink for the same
//! contributor. A failed or blank lookup renders as the empty string.

use crate::config::CfindConfig;
use crate::lookup::LookupError;
use crate::urls;

/// Render a lookup result for display.
///
/// Pure and deterministic: the same result always yields the same string.
pub fn render(cfg: &CfindConfig, result: &Result<String, LookupError>) -> String {
    let identifier = match result {
        Ok(id) if !id.trim().is_empty() => id.trim(),
        _ => return String::new(),
    };

    let profile = match urls::profile_url(cfg, identifier) {
        Ok(url) => url,
        // A malformed people_url folds to "nothing to show", like any
        // other lookup failure.
        Err(_) => return String::new(),
    };
    let mail = urls::mail_address(cfg, identifier);

    format!(
        "Maintainer:&nbsp;<a href=\"{}\">{}</a><br />e-mail:&nbsp;<a href=\"mailto:{}\">{}</a>",
        profile,
        escape_html(identifier),
        escape_html(&mail),
        escape_html(&mail),
    )
}

/// Minimal HTML escaping for text embedded in the fragment.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
