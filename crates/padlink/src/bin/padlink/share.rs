//! `padlink share` - pack a project directory into a shareable URL.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use qrcode::{render::svg, QrCode};

use padlink::config::PadlinkConfig;
use padlink::{link, Project};

use crate::style;

pub fn run_share(
    project: Option<PathBuf>,
    base_url: Option<String>,
    qr: Option<PathBuf>,
) -> anyhow::Result<()> {
    let root = project.unwrap_or_else(|| PathBuf::from("."));
    let config = PadlinkConfig::discover(&root)?;
    let project = Project::load_dir(&root, &config.limits)
        .with_context(|| format!("loading project from {}", root.display()))?;
    if project.is_empty() {
        eprintln!(
            "{}",
            style::warn(format!("Warning: no files under {}; the link will open an empty project.", root.display()))
        );
    }

    let base = base_url.unwrap_or_else(|| config.share.base_url.clone());
    let url = link::compose(&base, &project)?;

    println!("{}", style::accent(&url));
    println!("{} file(s) packed into the link", project.len());

    if let Some(path) = qr {
        let svg = render_qr(&url)?;
        fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
        println!("{}", style::ok(format!("QR code written to {}", path.display())));
    }
    Ok(())
}

fn render_qr(text: &str) -> anyhow::Result<String> {
    let code = QrCode::new(text.as_bytes()).context("share URL does not fit in a QR code")?;
    Ok(code.render::<svg::Color>().min_dimensions(240, 240).build())
}
