//! Inspect command implementation
//!
//! Renders one sound in memory and reports its statistics. Nothing is written.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use shellsound_synth::{render, Catalog, SoundKey, SoundStats};
use std::process::ExitCode;

use super::reporting::{print_banner, print_field, print_json};

/// Inspection report for one sound
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    /// Catalog key
    pub key: SoundKey,
    /// Path relative to the output root, with `/` separators
    pub path: String,
    /// Catalog description
    pub description: &'static str,
    /// Synthesis strategy label
    pub strategy: String,
    /// Output gain
    pub gain: f64,
    /// Fade-in length as a fraction of the sound
    pub fade_in: f64,
    /// Fade-out length as a fraction of the sound
    pub fade_out: f64,
    /// Fade-in length in seconds
    pub fade_in_seconds: f64,
    /// Fade-out length in seconds
    pub fade_out_seconds: f64,
    /// Upper bound on the rendered peak
    pub peak_bound: f64,
    /// Statistics of the rendered sound
    pub stats: SoundStats,
}

/// Renders `key` and builds its report.
pub fn inspect(key: &SoundKey) -> Result<InspectReport> {
    let entry = Catalog::builtin()
        .require(key)
        .with_context(|| format!("Cannot inspect {}", key))?;
    let sound = render(entry);
    let fade = entry.recipe.fade;
    let duration = sound.stats.duration_seconds;

    Ok(InspectReport {
        key: entry.key,
        path: entry.key.relative_path().to_string_lossy().replace('\\', "/"),
        description: entry.description,
        strategy: entry.recipe.body.strategy(),
        gain: entry.recipe.gain,
        fade_in: fade.fade_in,
        fade_out: fade.fade_out,
        fade_in_seconds: fade.fade_in * duration,
        fade_out_seconds: fade.fade_out * duration,
        peak_bound: entry.recipe.peak_bound(),
        stats: sound.stats,
    })
}

/// Run the inspect command
pub fn run(key: &SoundKey, json: bool) -> Result<ExitCode> {
    let report = inspect(key)?;
    if json {
        print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    print_banner(&format!("Sound {}", report.key));
    print_field("Description:", report.description);
    print_field("File:", &report.path);
    print_field("Strategy:", &report.strategy);
    print_field(
        "Envelope:",
        format!(
            "fade in {:.3}s ({:.0}%), fade out {:.3}s ({:.0}%), gain {:.2}",
            report.fade_in_seconds,
            report.fade_in * 100.0,
            report.fade_out_seconds,
            report.fade_out * 100.0,
            report.gain
        ),
    );
    println!();

    let stats = &report.stats;
    print_field("Samples:", stats.num_samples);
    print_field("Duration:", format!("{:.3}s", stats.duration_seconds));
    print_field(
        "Peak:",
        format!("{:.4} (bound {:.4})", stats.peak, report.peak_bound),
    );
    print_field("RMS:", format!("{:.4}", stats.rms));
    if stats.clipped_samples > 0 {
        println!(
            "{} {}",
            "Clipped samples:".yellow().bold(),
            stats.clipped_samples
        );
    } else {
        print_field("Clipped samples:", 0);
    }
    print_field("PCM hash:", &stats.pcm_hash);

    Ok(ExitCode::SUCCESS)
}
