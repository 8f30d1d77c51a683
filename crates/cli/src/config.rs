//! CLI configuration file.
//!
//! Looked up at `--config <FILE>` when given, otherwise at
//! `$XDG_CONFIG_HOME/grid/config.json` (falling back to `~/.config`). A missing
//! default file means defaults; a missing explicit file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Schema version written into new config files.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
	#[serde(default)]
	pub schema: u32,
	/// Public URL reported by `grid status` when `--url` is not given.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub public_url: Option<String>,
	/// Default for `grid driver --offline`.
	#[serde(default)]
	pub offline: bool,
	/// Driver manager binary; without one, drivers are looked up on `PATH`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub manager: Option<PathBuf>,
}

impl GridConfig {
	/// Creates a config with current [`SCHEMA_VERSION`].
	pub fn new() -> Self {
		Self {
			schema: SCHEMA_VERSION,
			..Default::default()
		}
	}

	/// Loads the explicit config file, or the default one if it exists.
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		match explicit {
			Some(path) => read_config(path),
			None => match default_path() {
				Some(path) if path.exists() => read_config(&path),
				_ => Ok(Self::new()),
			},
		}
	}
}

/// Default config location, if a config home can be determined.
pub fn default_path() -> Option<PathBuf> {
	std::env::var_os("XDG_CONFIG_HOME")
		.filter(|v| !v.is_empty())
		.map(PathBuf::from)
		.or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
		.map(|home| home.join("grid").join("config.json"))
}

fn read_config(path: &Path) -> Result<GridConfig> {
	fs::read_to_string(path)
		.context("reading file")
		.and_then(|content| serde_json::from_str(&content).context("parsing JSON"))
		.map_err(|source| CliError::Config {
			path: path.to_path_buf(),
			source,
		})
}
