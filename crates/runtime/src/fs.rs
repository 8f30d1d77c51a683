//! Filesystem checks for driver candidates.

use std::path::Path;

/// Existence and permission checks on a candidate path.
pub trait FileSystem: Send + Sync {
	fn exists(&self, path: &Path) -> bool;
	fn is_executable(&self, path: &Path) -> bool;
}

/// Checks against the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
	fn exists(&self, path: &Path) -> bool {
		path.exists()
	}

	#[cfg(unix)]
	fn is_executable(&self, path: &Path) -> bool {
		use std::os::unix::fs::PermissionsExt;

		std::fs::metadata(path)
			.map(|meta| meta.permissions().mode() & 0o111 != 0)
			.unwrap_or(false)
	}

	// No execute bit to inspect; anything that exists can be launched.
	#[cfg(not(unix))]
	fn is_executable(&self, path: &Path) -> bool {
		path.exists()
	}
}
