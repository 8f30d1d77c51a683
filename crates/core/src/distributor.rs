//! Distributor boundary and a file-backed implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use grid_protocol::DistributorStatus;
use grid_runtime::Result;
use tracing::debug;

/// Source of truth for live node state.
///
/// Fetch failures are the distributor's own error type; the grid passes them
/// through untouched.
pub trait Distributor: Send + Sync {
	type Error;

	fn status(&self) -> std::result::Result<DistributorStatus, Self::Error>;
}

impl<D: Distributor + ?Sized> Distributor for Arc<D> {
	type Error = D::Error;

	fn status(&self) -> std::result::Result<DistributorStatus, Self::Error> {
		(**self).status()
	}
}

/// Distributor that reads a JSON status snapshot from disk on every fetch.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
	path: PathBuf,
}

impl SnapshotFile {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Distributor for SnapshotFile {
	type Error = grid_runtime::Error;

	fn status(&self) -> Result<DistributorStatus> {
		debug!(target = "grid", path = %self.path.display(), "reading status snapshot");
		let raw = std::fs::read_to_string(&self.path)?;
		Ok(serde_json::from_str(&raw)?)
	}
}
