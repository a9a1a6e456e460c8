//! Output location resolution.

use std::path::{Path, PathBuf};

/// Name of the directory sounds are written into.
pub const SOUNDS_DIR: &str = "sounds";

/// Workspace root: two levels above this crate's manifest directory.
///
/// The path is fixed when the binary is built. It only names a usable
/// workspace while the source tree is still in place.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Default output root.
///
/// `<workspace>/sounds` when the build-time workspace still has its
/// `Cargo.toml`, otherwise `sounds` under the current directory. An
/// installed or relocated binary therefore never writes into the build
/// machine's source path.
pub fn default_out_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    out_root_from(&workspace_root(), &cwd)
}

fn out_root_from(workspace: &Path, cwd: &Path) -> PathBuf {
    if workspace.join("Cargo.toml").is_file() {
        workspace.join(SOUNDS_DIR)
    } else {
        cwd.join(SOUNDS_DIR)
    }
}

/// Resolves an optional `--out-root` argument.
pub fn resolve_out_root(out_root: Option<&str>) -> PathBuf {
    match out_root {
        Some(dir) => PathBuf::from(dir),
        None => default_out_root(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_out_root_is_workspace_sounds() {
        let root = default_out_root();
        assert_eq!(root, workspace_root().join(SOUNDS_DIR));
        assert!(workspace_root().join("Cargo.toml").exists());
        assert!(workspace_root().join("crates").is_dir());
    }

    #[test]
    fn test_missing_workspace_falls_back_to_cwd() {
        let cwd = tempfile::tempdir().unwrap();
        let gone = cwd.path().join("deleted-checkout");

        assert_eq!(out_root_from(&gone, cwd.path()), cwd.path().join(SOUNDS_DIR));
    }

    #[test]
    fn test_workspace_with_manifest_is_used() {
        let workspace = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        std::fs::write(workspace.path().join("Cargo.toml"), b"[workspace]\n").unwrap();

        assert_eq!(
            out_root_from(workspace.path(), cwd.path()),
            workspace.path().join(SOUNDS_DIR)
        );
    }

    #[test]
    fn test_resolve_explicit_out_root() {
        assert_eq!(resolve_out_root(Some("/tmp/out")), PathBuf::from("/tmp/out"));
        assert_eq!(resolve_out_root(None), default_out_root());
    }
}
