//! Share-link composition and fragment-state resolution.
//!
//! A share link is `<base>#project=<token>`: the token is the project's
//! JSON record list run through [`crate::codec`], embedded verbatim.
//! Resolution fails open: malformed tokens or JSON degrade to a sample,
//! never to a user-facing error.

use tracing::warn;

use crate::codec;
use crate::project::{Project, ProjectError, SampleName};

/// Fragment parameter carrying an encoded project.
pub const PROJECT_PARAM: &str = "project";
/// Fragment parameter naming a built-in sample.
pub const SAMPLE_PARAM: &str = "sample";

/// Outcome of resolving a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedState {
    /// The link carried a decodable project.
    Files(Project),
    /// Fallback: a named sample (the link's, or the default).
    Sample(SampleName),
}

/// Compose a share link for `project` on top of `base`.
///
/// The token needs no further escaping; `base` is taken as-is and any
/// existing fragment on it is the caller's mistake.
pub fn compose(base: &str, project: &Project) -> Result<String, ProjectError> {
    let token = codec::encode(&project.to_json()?);
    Ok(format!("{base}#{PROJECT_PARAM}={token}"))
}

/// Everything after the first `#`, or `""` when there is no fragment.
#[must_use]
pub fn extract_fragment(url: &str) -> &str {
    url.split_once('#').map_or("", |(_, fragment)| fragment)
}

/// Parse a fragment as `&`-separated `key=value` pairs.
///
/// Values (and keys) are percent-decoded; a pair without `=` has an empty
/// value; empty segments are skipped.
#[must_use]
pub fn fragment_params(fragment: &str) -> Vec<(String, String)> {
    fragment
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key), percent_decode(value))
        })
        .collect()
}

fn percent_decode(text: &str) -> String {
    urlencoding::decode(text).map_or_else(|_| text.to_string(), |decoded| decoded.into_owned())
}

/// Resolve a fragment into project state, failing open to a sample.
///
/// A `project` parameter wins when it decodes and parses; otherwise a valid
/// `sample` parameter is used; otherwise `default_sample`. Decode and parse
/// failures are logged, not returned - callers never see partial state.
#[must_use]
pub fn resolve(fragment: &str, default_sample: &SampleName) -> ResolvedState {
    let params = fragment_params(fragment);
    let param = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    if let Some(token) = param(PROJECT_PARAM).filter(|token| !token.is_empty()) {
        match codec::decode(token) {
            Ok(json) => match Project::from_json(&json) {
                Ok(project) => return ResolvedState::Files(project),
                Err(err) => warn!("share link carries invalid project JSON {json:?}: {err}"),
            },
            Err(err) => warn!("share link carries an invalid project token: {err}"),
        }
    }

    if let Some(sample) = param(SAMPLE_PARAM).and_then(SampleName::parse) {
        return ResolvedState::Sample(sample);
    }
    ResolvedState::Sample(default_sample.clone())
}
