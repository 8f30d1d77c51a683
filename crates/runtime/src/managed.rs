//! Managed driver resolution.
//!
//! A [`ManagedResolution`] is consulted when no explicit driver override is
//! set. Two implementations ship here:
//!
//! - [`PathLookup`] searches `PATH` for the driver executable
//! - [`ManagerCommand`] delegates to an external driver manager binary that
//!   may download drivers and reports paths as JSON

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, anyhow, bail};
use grid_protocol::{Capabilities, DriverPaths};
use serde::Deserialize;
use tracing::debug;

use crate::service::KnownDriver;

/// Locates (and possibly fetches) a driver binary for a capability set.
///
/// Implementations may fail for any reason; the finder wraps those failures
/// and does not fall back further.
pub trait ManagedResolution: Send + Sync {
	fn driver_path(&self, capabilities: &Capabilities, offline: bool) -> anyhow::Result<DriverPaths>;
}

impl<F> ManagedResolution for F
where
	F: Fn(&Capabilities, bool) -> anyhow::Result<DriverPaths> + Send + Sync,
{
	fn driver_path(&self, capabilities: &Capabilities, offline: bool) -> anyhow::Result<DriverPaths> {
		self(capabilities, offline)
	}
}

fn known_driver(capabilities: &Capabilities) -> anyhow::Result<KnownDriver> {
	KnownDriver::from_browser_name(&capabilities.browser_name)
		.ok_or_else(|| anyhow!("no known driver for browser '{}'", capabilities.browser_name))
}

/// Finds drivers already installed on `PATH`. Never downloads, so `offline`
/// has no effect.
#[derive(Debug, Clone, Default)]
pub struct PathLookup {
	search_path: Option<OsString>,
}

impl PathLookup {
	/// Searches the process `PATH`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Searches the given `PATH`-style list instead of the process one.
	pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
		Self {
			search_path: Some(search_path.into()),
		}
	}
}

impl ManagedResolution for PathLookup {
	fn driver_path(&self, capabilities: &Capabilities, _offline: bool) -> anyhow::Result<DriverPaths> {
		let binary = known_driver(capabilities)?.binary_name();

		let found = match &self.search_path {
			Some(paths) => {
				let cwd = std::env::current_dir().context("reading current directory")?;
				which::which_in(binary, Some(paths), cwd)
			}
			None => which::which(binary),
		};

		match found {
			Ok(path) => {
				debug!(target = "grid", binary, path = %path.display(), "driver found on PATH");
				Ok(DriverPaths::driver(path))
			}
			Err(err) => {
				debug!(target = "grid", binary, error = %err, "driver not found on PATH");
				Ok(DriverPaths::empty())
			}
		}
	}
}

/// Runs an external driver manager and reads the paths it reports.
///
/// The manager is invoked as
/// `<binary> --browser <name> [--browser-version <v>] [--offline] --output json`
/// and must print `{"result": {"driver_path": .., "browser_path": ..}}`.
#[derive(Debug, Clone)]
pub struct ManagerCommand {
	binary: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ManagerOutput {
	result: ManagerResult,
}

#[derive(Debug, Deserialize)]
struct ManagerResult {
	#[serde(default)]
	code: i32,
	#[serde(default)]
	message: Option<String>,
	#[serde(default)]
	driver_path: Option<String>,
	#[serde(default)]
	browser_path: Option<String>,
}

impl ManagerCommand {
	pub fn new(binary: impl Into<PathBuf>) -> Self {
		Self { binary: binary.into() }
	}

	pub fn binary(&self) -> &std::path::Path {
		&self.binary
	}

	fn args(capabilities: &Capabilities, offline: bool) -> Vec<String> {
		let mut args = vec!["--browser".to_string(), capabilities.browser_name.clone()];
		if let Some(version) = capabilities.browser_version.as_ref().filter(|v| !v.is_empty()) {
			args.push("--browser-version".to_string());
			args.push(version.clone());
		}
		if offline {
			args.push("--offline".to_string());
		}
		args.push("--output".to_string());
		args.push("json".to_string());
		args
	}
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
	value.filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}

fn parse_manager_output(stdout: &[u8]) -> anyhow::Result<DriverPaths> {
	let output: ManagerOutput = serde_json::from_slice(stdout).context("malformed driver manager output")?;
	let result = output.result;
	if result.code != 0 {
		bail!(
			"driver manager returned code {}: {}",
			result.code,
			result.message.unwrap_or_default()
		);
	}

	Ok(DriverPaths {
		driver_path: non_empty_path(result.driver_path),
		browser_path: non_empty_path(result.browser_path),
	})
}

impl ManagedResolution for ManagerCommand {
	fn driver_path(&self, capabilities: &Capabilities, offline: bool) -> anyhow::Result<DriverPaths> {
		let args = Self::args(capabilities, offline);
		debug!(target = "grid", manager = %self.binary.display(), ?args, "running driver manager");

		let output = Command::new(&self.binary)
			.args(&args)
			.stdin(Stdio::null())
			.output()
			.with_context(|| format!("failed to run {}", self.binary.display()))?;

		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr);
			bail!("{} exited with {}: {}", self.binary.display(), output.status, stderr.trim());
		}

		parse_manager_output(&output.stdout)
	}
}
