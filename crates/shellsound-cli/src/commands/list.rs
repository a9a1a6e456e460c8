//! List command implementation

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use shellsound_synth::{Catalog, SoundKey, SAMPLE_RATE};
use std::process::ExitCode;

use super::reporting::print_json;

/// One row of the catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct CatalogRow {
    /// Catalog key
    pub key: SoundKey,
    /// Path relative to the output root, with `/` separators
    pub path: String,
    /// Catalog description
    pub description: &'static str,
    /// Nominal duration in seconds
    pub duration_seconds: f64,
    /// Samples rendered at the fixed sample rate
    pub num_samples: usize,
    /// Output gain
    pub gain: f64,
    /// Synthesis strategy label
    pub strategy: String,
}

/// Builds the listing for the built-in catalog, in catalog order.
pub fn catalog_rows() -> Vec<CatalogRow> {
    Catalog::builtin()
        .iter()
        .map(|entry| CatalogRow {
            key: entry.key,
            path: entry.key.relative_path().to_string_lossy().replace('\\', "/"),
            description: entry.description,
            duration_seconds: entry.recipe.duration,
            num_samples: entry.recipe.sample_count(SAMPLE_RATE),
            gain: entry.recipe.gain,
            strategy: entry.recipe.body.strategy(),
        })
        .collect()
}

/// Run the list command
pub fn run(json: bool) -> Result<ExitCode> {
    let rows = catalog_rows();
    if json {
        print_json(&rows)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut current_pack = None;
    for row in &rows {
        if current_pack != Some(row.key.pack) {
            if current_pack.is_some() {
                println!();
            }
            println!("{}", row.key.pack.as_str().cyan().bold());
            current_pack = Some(row.key.pack);
        }
        println!(
            "  {:<24} {:>5.2}s {:>6} samples  gain {:.2}  {}",
            row.path,
            row.duration_seconds,
            row.num_samples,
            row.gain,
            row.strategy.dimmed()
        );
        println!("  {:<24} {}", "", row.description);
    }
    println!();
    println!("{} {} sounds", "Total:".blue().bold(), rows.len());

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_rows() {
        let rows = catalog_rows();
        assert_eq!(rows.len(), 27);
        assert_eq!(rows[0].path, "meme/error/light.wav");
        assert_eq!(rows[26].path, "retro/success/heavy.wav");
        assert!(rows.iter().all(|r| !r.strategy.is_empty()));
    }

    #[test]
    fn test_catalog_rows_sample_counts() {
        let rows = catalog_rows();
        let chill_medium = rows
            .iter()
            .find(|r| r.path == "chill/success/medium.wav")
            .unwrap();
        assert_eq!(chill_medium.num_samples, 13230);
        assert!(chill_medium.strategy.starts_with("segments["));
    }
}
