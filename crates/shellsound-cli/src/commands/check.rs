//! Check command implementation
//!
//! Verifies that the files under the output root match a fresh render of the
//! catalog.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use shellsound_synth::{verify_sound, Catalog, FileStatus, VerifiedSound};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::reporting::{print_banner, print_field, print_json};

/// Summary of a check run
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    /// Output root
    pub out_root: PathBuf,
    /// Sounds checked
    pub total: usize,
    /// Files matching a fresh render
    pub ok: usize,
    /// Files not on disk
    pub missing: usize,
    /// Files whose format or payload differs
    pub stale: usize,
    /// Files that could not be parsed
    pub unreadable: usize,
    /// Per-sound results, in catalog order
    pub sounds: Vec<VerifiedSound>,
}

impl CheckSummary {
    /// True if every file is `ok`.
    pub fn all_ok(&self) -> bool {
        self.ok == self.total
    }

    /// Exit code for this run: 1 unless every file is `ok`.
    pub fn exit_code(&self) -> ExitCode {
        if self.all_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}

/// Verifies every catalog sound under `out_root`.
pub fn check_dir(out_root: &Path) -> CheckSummary {
    let sounds: Vec<VerifiedSound> = Catalog::builtin()
        .iter()
        .map(|entry| verify_sound(out_root, entry))
        .collect();
    let count = |status: FileStatus| sounds.iter().filter(|s| s.status == status).count();

    CheckSummary {
        out_root: out_root.to_path_buf(),
        total: sounds.len(),
        ok: count(FileStatus::Ok),
        missing: count(FileStatus::Missing),
        stale: count(FileStatus::Stale),
        unreadable: count(FileStatus::Unreadable),
        sounds,
    }
}

/// Run the check command
///
/// # Returns
/// Exit code: 0 if every file matches, 1 otherwise
pub fn run(out_root: &Path, json: bool) -> Result<ExitCode> {
    let summary = check_dir(out_root);

    if json {
        print_json(&summary)?;
    } else {
        print_report(&summary);
    }

    Ok(summary.exit_code())
}

fn print_report(summary: &CheckSummary) {
    print_banner("Shellsound Check");
    print_field("Output directory:", summary.out_root.display());
    println!();

    for sound in &summary.sounds {
        let padded = format!("{:<11}", sound.status.as_str());
        let label = match sound.status {
            FileStatus::Ok => padded.green(),
            FileStatus::Missing => padded.yellow(),
            FileStatus::Stale | FileStatus::Unreadable => padded.red(),
        };
        match &sound.detail {
            Some(detail) => println!("  {} {} - {}", label, sound.key, detail),
            None => println!("  {} {}", label, sound.key),
        }
    }

    println!();
    println!("{} {}", "OK:".green().bold(), summary.ok);
    println!("{} {}", "Missing:".yellow().bold(), summary.missing);
    println!("{} {}", "Stale:".red().bold(), summary.stale);
    println!("{} {}", "Unreadable:".red().bold(), summary.unreadable);

    if !summary.all_ok() {
        println!();
        println!(
            "{} Run `shellsound generate` to regenerate the catalog",
            "INFO".blue().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate::generate_into;
    use pretty_assertions::assert_eq;
    use shellsound_synth::CatalogFilter;

    #[test]
    fn test_check_empty_dir_reports_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let summary = check_dir(tmp.path());
        assert_eq!(summary.total, 27);
        assert_eq!(summary.missing, 27);
        assert!(!summary.all_ok());
        assert_eq!(summary.exit_code(), ExitCode::from(1));
    }

    #[test]
    fn test_check_after_generate_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        generate_into(tmp.path(), &CatalogFilter::default());

        let summary = check_dir(tmp.path());
        assert_eq!(summary.ok, 27);
        assert!(summary.all_ok());
        assert_eq!(summary.exit_code(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_detects_tampering() {
        let tmp = tempfile::tempdir().unwrap();
        generate_into(tmp.path(), &CatalogFilter::default());

        let stale = tmp.path().join("retro/success/heavy.wav");
        let mut bytes = std::fs::read(&stale).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        std::fs::write(&stale, bytes).unwrap();

        std::fs::remove_file(tmp.path().join("meme/warning/light.wav")).unwrap();
        std::fs::write(tmp.path().join("chill/error/medium.wav"), b"junk").unwrap();

        let summary = check_dir(tmp.path());
        assert_eq!(summary.ok, 24);
        assert_eq!(summary.stale, 1);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.unreadable, 1);
        assert_eq!(summary.exit_code(), ExitCode::from(1));
    }
}
