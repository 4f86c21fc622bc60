//! Playground project model and wire format.
//!
//! A project is an ordered mapping of file name to text content. On the
//! wire it is a JSON array of `{name, content}` records; the record order
//! is the map order.

#![allow(missing_docs)]

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

use crate::config::Limits;

/// Sample loaded when a share link carries no usable project state.
pub const DEFAULT_SAMPLE: &str = "examples/hello-world";

/// Project model and file-system errors.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Wire text is not the expected JSON record list. Distinct from
    /// [`crate::codec::DecodeError`]: the token itself was fine.
    #[error("invalid project JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// File name escapes the project scope or is otherwise unusable.
    #[error("invalid project file path '{0}'")]
    InvalidPath(SmolStr),

    /// File content exceeds the configured per-file limit.
    #[error("file '{name}' exceeds limit ({len} > {limit} bytes)")]
    TooLarge { name: SmolStr, len: usize, limit: usize },

    /// Project exceeds the configured file-count limit.
    #[error("project exceeds {0} files")]
    TooManyFiles(usize),

    /// Underlying file-system error.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// One file record as it appears in the share-token JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub name: String,
    /// Absent content is an empty file.
    #[serde(default)]
    pub content: String,
}

/// An editable code sample: ordered file name -> text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    files: IndexMap<SmolStr, String>,
}

impl Project {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a file. Later inserts win, preserving the position
    /// of the first insert.
    pub fn insert(&mut self, name: impl Into<SmolStr>, content: impl Into<String>) {
        self.files.insert(name.into(), content.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    /// Build a project from wire records. Duplicate names keep the last
    /// record's content.
    #[must_use]
    pub fn from_records(records: Vec<ProjectFile>) -> Self {
        let mut project = Self::new();
        for record in records {
            project.insert(record.name, record.content);
        }
        project
    }

    #[must_use]
    pub fn to_records(&self) -> Vec<ProjectFile> {
        self.files
            .iter()
            .map(|(name, content)| ProjectFile {
                name: name.to_string(),
                content: content.clone(),
            })
            .collect()
    }

    /// Serialize to the wire format: a JSON array of `{name, content}`.
    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string(&self.to_records())?)
    }

    /// Parse the wire format back into a project.
    pub fn from_json(text: &str) -> Result<Self, ProjectError> {
        let records: Vec<ProjectFile> = serde_json::from_str(text)?;
        Ok(Self::from_records(records))
    }

    /// Collect the text files beneath `root` into a project.
    ///
    /// Hidden entries are skipped; names are normalized to forward slashes
    /// relative to `root`, in sorted order.
    pub fn load_dir(root: &Path, limits: &Limits) -> Result<Self, ProjectError> {
        let mut names = Vec::new();
        collect_files(root, &PathBuf::new(), &mut names)?;
        // The tool's own config travels with the directory, not the share.
        names.retain(|name| name != crate::config::CONFIG_FILE);
        names.sort();

        if names.len() > limits.max_files {
            return Err(ProjectError::TooManyFiles(limits.max_files));
        }

        let mut project = Self::new();
        for name in names {
            let content = fs::read_to_string(root.join(&name))?;
            if content.len() > limits.max_file_bytes {
                return Err(ProjectError::TooLarge {
                    name: SmolStr::new(&name),
                    len: content.len(),
                    limit: limits.max_file_bytes,
                });
            }
            project.insert(SmolStr::new(&name), content);
        }
        Ok(project)
    }

    /// Materialize the project beneath `root`, creating parent directories.
    ///
    /// Every file name must pass [`normalize_file_path`]; a decoded share
    /// is untrusted and must not write outside `root`.
    pub fn write_dir(&self, root: &Path) -> Result<(), ProjectError> {
        for (name, content) in &self.files {
            let normalized = normalize_file_path(name)?;
            let target = root.join(&normalized);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(target, content)?;
        }
        Ok(())
    }
}

/// Validate and normalize a project-relative file path.
///
/// Rejects empty, absolute, and hidden paths and any traversal out of the
/// project scope; returns the forward-slash form.
pub fn normalize_file_path(path: &str) -> Result<String, ProjectError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(ProjectError::InvalidPath(SmolStr::new(path)));
    }

    let raw = Path::new(trimmed);
    if raw.is_absolute() {
        return Err(ProjectError::InvalidPath(SmolStr::new(path)));
    }

    let mut parts = Vec::new();
    for component in raw.components() {
        match component {
            Component::Normal(value) => {
                let text = value.to_string_lossy();
                if text.starts_with('.') {
                    return Err(ProjectError::InvalidPath(SmolStr::new(path)));
                }
                parts.push(text.to_string());
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ProjectError::InvalidPath(SmolStr::new(path)));
            }
        }
    }

    if parts.is_empty() {
        return Err(ProjectError::InvalidPath(SmolStr::new(path)));
    }
    Ok(parts.join("/"))
}

fn collect_files(root: &Path, relative: &Path, out: &mut Vec<String>) -> Result<(), ProjectError> {
    let dir = root.join(relative);
    for entry in fs::read_dir(&dir)?.flatten() {
        let path = entry.path();
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if file_name.starts_with('.') {
            continue;
        }
        let next_relative = if relative.as_os_str().is_empty() {
            PathBuf::from(file_name.as_ref())
        } else {
            relative.join(file_name.as_ref())
        };
        if path.is_dir() {
            collect_files(root, &next_relative, out)?;
        } else {
            out.push(next_relative.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(())
}

/// Validated name of a built-in sample project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleName(SmolStr);

impl SampleName {
    /// Accepts names over `[A-Za-z0-9_/-]`; anything else is not a sample.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if !text.is_empty()
            && text
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/'))
        {
            Some(Self(SmolStr::new(text)))
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Site path of the sample's project manifest.
    #[must_use]
    pub fn project_src(&self) -> String {
        format!("/samples/{}/project.json", self.0)
    }
}

impl Default for SampleName {
    fn default() -> Self {
        Self(SmolStr::new(DEFAULT_SAMPLE))
    }
}

impl std::fmt::Display for SampleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_round_trip_in_order() {
        let mut project = Project::new();
        project.insert("index.html", "<main></main>");
        project.insert("app.ts", "export const x = 1;");
        project.insert("styles.css", "main { color: red }");

        let json = project.to_json().expect("serialize");
        let back = Project::from_json(&json).expect("parse");
        assert_eq!(back, project);
        assert_eq!(
            back.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["index.html", "app.ts", "styles.css"]
        );
    }

    #[test]
    fn missing_content_is_an_empty_file() {
        let project = Project::from_json(r#"[{"name":"empty.ts"}]"#).expect("parse");
        assert_eq!(project.get("empty.ts"), Some(""));
    }

    #[test]
    fn duplicate_records_keep_the_last_content() {
        let project =
            Project::from_json(r#"[{"name":"a","content":"1"},{"name":"a","content":"2"}]"#)
                .expect("parse");
        assert_eq!(project.len(), 1);
        assert_eq!(project.get("a"), Some("2"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Project::from_json("{not json").expect_err("must fail");
        assert!(matches!(err, ProjectError::Parse(_)));
        let err = Project::from_json(r#"{"name":"a"}"#).expect_err("not a list");
        assert!(matches!(err, ProjectError::Parse(_)));
    }

    #[test]
    fn path_normalization_accepts_nested_names() {
        assert_eq!(normalize_file_path("src/app.ts").expect("ok"), "src/app.ts");
        assert_eq!(normalize_file_path("./a/b.css").expect("ok"), "a/b.css");
    }

    #[test]
    fn path_normalization_rejects_escapes() {
        for bad in ["", "  ", "/etc/passwd", "../up.ts", "a/../../b", ".hidden", "a/.git/c"] {
            assert!(
                matches!(normalize_file_path(bad), Err(ProjectError::InvalidPath(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn sample_names_follow_the_allowed_alphabet() {
        assert!(SampleName::parse("examples/hello-world").is_some());
        assert!(SampleName::parse("motion_01").is_some());
        for bad in ["", "a b", "a#b", "über", "a?x=1"] {
            assert!(SampleName::parse(bad).is_none(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn sample_src_matches_the_site_layout() {
        let sample = SampleName::default();
        assert_eq!(sample.as_str(), DEFAULT_SAMPLE);
        assert_eq!(
            sample.project_src(),
            format!("/samples/{DEFAULT_SAMPLE}/project.json")
        );
    }
}
