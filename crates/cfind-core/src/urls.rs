//! URL construction for the maintainers database and profile pages.
//!
//! Package names and usernames are user-supplied; they go into URLs only as
//! single path segments, percent-encoded by the `url` crate, so a name like
//! `a/b` or `../x` cannot change which resource is addressed.

use url::Url;

use crate::config::CfindConfig;

fn push_segment(base: &str, segment: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

/// Lookup endpoint for a package: `<maintdb_url>/<encoded-package>`.
pub fn lookup_url(cfg: &CfindConfig, package: &str) -> Result<Url, url::ParseError> {
    push_segment(&cfg.maintdb_url, package)
}

/// Profile page for a contributor: `<people_url>/<identifier>.html`.
pub fn profile_url(cfg: &CfindConfig, identifier: &str) -> Result<Url, url::ParseError> {
    push_segment(&cfg.people_url, &format!("{identifier}.html"))
}

/// Mail address for a contributor: `<identifier>@<mail_domain>`.
pub fn mail_address(cfg: &CfindConfig, identifier: &str) -> String {
    format!("{}@{}", identifier, cfg.mail_domain)
}
