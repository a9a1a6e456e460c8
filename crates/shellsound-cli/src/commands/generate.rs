//! Generate command implementation
//!
//! Renders every selected catalog sound and writes it under the output root.
//! A failure on one file is recorded and the batch continues.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use shellsound_synth::{write_sound, Catalog, CatalogFilter, SoundKey};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::reporting::{print_banner, print_field, print_json};

/// Result of generating a single sound
#[derive(Debug, Clone, Serialize)]
pub struct SoundOutcome {
    /// Catalog key
    pub key: SoundKey,
    /// Target file path
    pub path: PathBuf,
    /// Whether the file was written
    pub success: bool,
    /// Error message if failed
    pub error: Option<String>,
    /// Number of samples written
    pub num_samples: Option<usize>,
    /// Peak level before encoding
    pub peak: Option<f64>,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: Option<String>,
    /// Generation time in milliseconds
    pub duration_ms: u64,
}

/// Summary of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    /// Output root
    pub out_root: PathBuf,
    /// Sounds attempted
    pub total: usize,
    /// Files written
    pub written: usize,
    /// Files that failed
    pub failed: usize,
    /// Total runtime in seconds
    pub runtime_seconds: f64,
    /// Per-sound results, in catalog order
    pub sounds: Vec<SoundOutcome>,
}

impl GenerationSummary {
    /// Exit code for this run: 1 if anything failed.
    pub fn exit_code(&self) -> ExitCode {
        if self.failed > 0 {
            ExitCode::from(1)
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &SoundOutcome> {
        self.sounds.iter().filter(|s| !s.success)
    }
}

/// Generates every catalog sound passing `filter` into `out_root`.
///
/// Existing files are overwritten. Per-file errors are collected into the
/// summary rather than returned.
pub fn generate_into(out_root: &Path, filter: &CatalogFilter) -> GenerationSummary {
    generate_with(out_root, filter, |_| {})
}

fn generate_with(
    out_root: &Path,
    filter: &CatalogFilter,
    mut on_outcome: impl FnMut(&SoundOutcome),
) -> GenerationSummary {
    let start = Instant::now();
    let entries = Catalog::builtin().select(filter);
    let mut sounds = Vec::with_capacity(entries.len());

    for entry in entries {
        let sound_start = Instant::now();
        let outcome = match write_sound(out_root, entry) {
            Ok(written) => SoundOutcome {
                key: written.key,
                path: written.path,
                success: true,
                error: None,
                num_samples: Some(written.stats.num_samples),
                peak: Some(written.stats.peak),
                pcm_hash: Some(written.stats.pcm_hash),
                duration_ms: sound_start.elapsed().as_millis() as u64,
            },
            Err(e) => SoundOutcome {
                key: entry.key,
                path: out_root.join(entry.key.relative_path()),
                success: false,
                error: Some(e.to_string()),
                num_samples: None,
                peak: None,
                pcm_hash: None,
                duration_ms: sound_start.elapsed().as_millis() as u64,
            },
        };
        on_outcome(&outcome);
        sounds.push(outcome);
    }

    let written = sounds.iter().filter(|s| s.success).count();
    GenerationSummary {
        out_root: out_root.to_path_buf(),
        total: sounds.len(),
        written,
        failed: sounds.len() - written,
        runtime_seconds: start.elapsed().as_secs_f64(),
        sounds,
    }
}

/// Run the generate command
///
/// # Arguments
/// * `out_root` - Output root directory (default: `<workspace>/sounds`)
/// * `filter` - Restrict generation to part of the catalog
/// * `json` - Print a JSON summary instead of human output
/// * `verbose` - Show per-file statistics
///
/// # Returns
/// Exit code: 0 success, 1 if any file failed
pub fn run(
    out_root: &Path,
    filter: &CatalogFilter,
    json: bool,
    verbose: bool,
) -> Result<ExitCode> {
    if json {
        let summary = generate_into(out_root, filter);
        print_json(&summary)?;
        return Ok(summary.exit_code());
    }

    print_banner("Shellsound Generator");
    print_field("Output directory:", out_root.display());
    println!(
        "{} Generating {} sounds",
        "INFO".blue().bold(),
        Catalog::builtin().select(filter).len()
    );
    println!();

    let summary = generate_with(out_root, filter, |outcome| print_outcome(outcome, verbose));

    print_summary(&summary);
    Ok(summary.exit_code())
}

fn print_outcome(outcome: &SoundOutcome, verbose: bool) {
    if outcome.success {
        println!("  {} {}", "wrote".green(), outcome.path.display());
        if verbose {
            println!(
                "        {} samples, peak {:.3}, {} ({}ms)",
                outcome.num_samples.unwrap_or_default(),
                outcome.peak.unwrap_or_default(),
                outcome.pcm_hash.as_deref().unwrap_or("unknown").dimmed(),
                outcome.duration_ms
            );
        }
    } else {
        println!(
            "  {} {} - {}",
            "FAILED".red(),
            outcome.path.display(),
            outcome.error.as_deref().unwrap_or("unknown error")
        );
    }
}

fn print_summary(summary: &GenerationSummary) {
    println!();
    print_banner("Generation Summary");
    print_field("Total sounds:", summary.total);
    println!("{} {}", "Written:".green().bold(), summary.written);
    println!("{} {}", "Failed:".red().bold(), summary.failed);
    print_field("Total runtime:", format!("{:.2}s", summary.runtime_seconds));
    println!();

    if summary.failed > 0 {
        println!("{}", "Failed sounds:".red().bold());
        for outcome in summary.failures() {
            println!(
                "  - {}: {}",
                outcome.key,
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
        println!();
    }
}
