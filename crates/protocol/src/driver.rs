//! Driver resolution result type.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Paths produced by a driver lookup.
///
/// Either field may be absent: an empty `driver_path` means the lookup did not
/// find a driver, which resolution reports as "not located".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPaths {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub driver_path: Option<PathBuf>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub browser_path: Option<PathBuf>,
}

impl DriverPaths {
	/// Result carrying only a driver path.
	pub fn driver(path: impl Into<PathBuf>) -> Self {
		Self {
			driver_path: Some(path.into()),
			browser_path: None,
		}
	}

	/// Result with neither path set.
	pub fn empty() -> Self {
		Self::default()
	}
}
