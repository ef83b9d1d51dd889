//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use rp_core::Catalog;
use serde::Serialize;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load the catalog from `--data-dir` if given, otherwise the builtin
/// datasets. Construction validates the data and fails fast.
pub(crate) fn load_catalog(global: &GlobalArgs) -> Result<Catalog> {
    match &global.data_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            let curriculum_path = dir.join("curriculum.yml");
            let gate_path = dir.join("gate.yml");

            let curriculum = std::fs::read_to_string(&curriculum_path)
                .with_context(|| format!("Failed to read {}", curriculum_path.display()))?;
            let gate = std::fs::read_to_string(&gate_path)
                .with_context(|| format!("Failed to read {}", gate_path.display()))?;

            if global.verbose {
                log::debug!("loading dataset from {}", dir.display());
            }
            Catalog::from_yaml(&curriculum, &gate)
                .with_context(|| format!("Invalid dataset in {}", dir.display()))
        }
        None => Catalog::builtin().context("Failed to load builtin datasets"),
    }
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
