//! `padlink open` - resolve a share link back into project state.

use std::path::{Path, PathBuf};

use anyhow::Context;

use padlink::config::PadlinkConfig;
use padlink::{link, ResolvedState};

use crate::style;

pub fn run_open(link_text: &str, out: Option<PathBuf>) -> anyhow::Result<()> {
    let config = PadlinkConfig::discover(Path::new("."))?;
    let fragment = if link_text.contains('#') {
        link::extract_fragment(link_text)
    } else {
        link_text
    };

    match link::resolve(fragment, &config.default_sample()) {
        ResolvedState::Files(project) => match out {
            Some(dir) => {
                project
                    .write_dir(&dir)
                    .with_context(|| format!("writing project to {}", dir.display()))?;
                println!(
                    "{}",
                    style::ok(format!("Wrote {} file(s) to {}", project.len(), dir.display()))
                );
                for (name, _) in project.iter() {
                    println!("  {name}");
                }
            }
            None => {
                println!("{} file(s) in the link:", project.len());
                for (name, content) in project.iter() {
                    println!("  {name} ({} bytes)", content.len());
                }
                println!("Pass --out <dir> to write them.");
            }
        },
        ResolvedState::Sample(sample) => {
            println!(
                "{}",
                style::warn(format!(
                    "Link opens sample '{sample}' ({})",
                    sample.project_src()
                ))
            );
        }
    }
    Ok(())
}
