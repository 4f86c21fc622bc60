//! `padlink export` - write a project directory as a downloadable archive.

use std::path::{Path, PathBuf};

use anyhow::Context;

use padlink::archive;
use padlink::config::PadlinkConfig;
use padlink::Project;

use crate::style;

pub fn run_export(project: Option<PathBuf>, output: Option<PathBuf>) -> anyhow::Result<()> {
    let root = project.unwrap_or_else(|| PathBuf::from("."));
    let config = PadlinkConfig::discover(&root)?;
    let project = Project::load_dir(&root, &config.limits)
        .with_context(|| format!("loading project from {}", root.display()))?;

    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.zip", project_dir_name(&root))));
    archive::write_archive(&project, &output)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "{}",
        style::ok(format!(
            "Exported {} file(s) to {}",
            project.len(),
            output.display()
        ))
    );
    Ok(())
}

fn project_dir_name(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(root)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("playground")
        .replace(|c: char| !c.is_ascii_alphanumeric() && c != '-', "_")
}
