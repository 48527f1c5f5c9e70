use crate::config::{IconsLayout, ICON_SIZES};
use crate::icons::resize_icon;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The source image was absent; nothing was attempted.
    MissingSource(PathBuf),
    Completed {
        created: Vec<PathBuf>,
        failed: Vec<PathBuf>,
    },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed { failed, .. } if failed.is_empty())
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Generate every icon in [`ICON_SIZES`] from the layout's source image.
///
/// A missing source aborts before any output is written. Individual icon
/// failures are reported and the remaining sizes are still attempted.
pub fn run(layout: &IconsLayout) -> RunOutcome {
    let source = layout.source_path();
    if !source.exists() {
        tracing::error!(source = %source.display(), "source image missing");
        println!("ERROR: {} not found!", source.display());
        return RunOutcome::MissingSource(source);
    }

    println!("Creating PNG icons from {}...", source.display());
    println!();

    let mut created = Vec::new();
    let mut failed = Vec::new();
    for icon in ICON_SIZES.iter() {
        let output = layout.output_path(icon);
        if resize_icon(&source, &output, icon.size) {
            created.push(output);
        } else {
            failed.push(output);
        }
    }

    println!();
    if failed.is_empty() {
        println!("SUCCESS: All icons created successfully!");
        println!();
        println!("Next step: Update manifest.json to use .png files");
    } else {
        println!("ERROR: Some icons failed to create");
    }
    tracing::info!(created = created.len(), failed = failed.len(), "icon generation finished");

    RunOutcome::Completed { created, failed }
}
