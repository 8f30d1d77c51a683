//! Driver binary resolution
//!
//! Resolves the executable a driver service should launch for a capability set.
//! Resolution is a strict three-stage pipeline:
//! 1. Environment override keyed by the service's driver property
//! 2. Managed resolution (only when no override is set)
//! 3. Validation of whichever candidate won
//!
//! The first stage that yields a candidate wins; a failure in managed
//! resolution ends the call without validation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use grid_protocol::{Capabilities, DriverPaths};
use serde::Serialize;
use tracing::{debug, warn};

use crate::env::{Environment, SystemEnvironment};
use crate::error::{Error, Result};
use crate::fs::{FileSystem, LocalFileSystem};
use crate::managed::ManagedResolution;
use crate::service::DriverService;

/// Where a resolved driver path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverSource {
	/// Explicit environment override.
	Override,
	/// Managed resolution.
	Managed,
}

/// A validated, executable driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDriver {
	pub driver_path: PathBuf,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub browser_path: Option<PathBuf>,
	pub source: DriverSource,
}

/// Candidate produced by the locate stages, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Candidate {
	Override(PathBuf),
	Managed(DriverPaths),
}

/// Resolves and validates driver executables.
///
/// Holds only shared, read-only collaborators, so one finder can serve
/// concurrent calls.
#[derive(Clone)]
pub struct DriverFinder {
	env: Arc<dyn Environment>,
	fs: Arc<dyn FileSystem>,
	managed: Arc<dyn ManagedResolution>,
}

impl std::fmt::Debug for DriverFinder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DriverFinder").finish_non_exhaustive()
	}
}

impl DriverFinder {
	/// Finder reading the process environment and local filesystem.
	pub fn new(managed: impl ManagedResolution + 'static) -> Self {
		Self::with_collaborators(SystemEnvironment, LocalFileSystem, managed)
	}

	pub fn with_collaborators(
		env: impl Environment + 'static,
		fs: impl FileSystem + 'static,
		managed: impl ManagedResolution + 'static,
	) -> Self {
		Self {
			env: Arc::new(env),
			fs: Arc::new(fs),
			managed: Arc::new(managed),
		}
	}

	/// Resolves a driver with network access allowed.
	///
	/// # Errors
	///
	/// See [`DriverFinder::resolve_with`].
	pub fn resolve(&self, service: &dyn DriverService, capabilities: &Capabilities) -> Result<ResolvedDriver> {
		self.resolve_with(service, capabilities, false)
	}

	/// Resolves a driver, passing `offline` through to managed resolution.
	///
	/// # Errors
	///
	/// - [`Error::InvalidArgument`] if `capabilities` has no browser name
	/// - [`Error::DriverResolution`] if managed resolution fails
	/// - [`Error::NotLocated`] if no candidate path was produced
	/// - [`Error::InvalidPath`] if the candidate does not exist
	/// - [`Error::NotExecutable`] if the candidate cannot be executed
	pub fn resolve_with(
		&self,
		service: &dyn DriverService,
		capabilities: &Capabilities,
		offline: bool,
	) -> Result<ResolvedDriver> {
		if capabilities.browser_name.trim().is_empty() {
			return Err(Error::missing("Browser options"));
		}

		let candidate = self.locate(service, capabilities, offline)?;
		self.validate(service, candidate)
	}

	fn locate(&self, service: &dyn DriverService, capabilities: &Capabilities, offline: bool) -> Result<Candidate> {
		let property = service.driver_property();
		if let Some(value) = self.env.get(property).filter(|value| !value.is_empty()) {
			let path = PathBuf::from(value);
			debug!(target = "grid", property, path = %path.display(), "using driver override");
			return Ok(Candidate::Override(path));
		}

		debug!(target = "grid", driver = service.driver_name(), offline, "no override; using managed resolution");
		self.managed
			.driver_path(capabilities, offline)
			.map(Candidate::Managed)
			.map_err(|source| Error::DriverResolution {
				capabilities: Box::new(capabilities.clone()),
				source,
			})
	}

	fn validate(&self, service: &dyn DriverService, candidate: Candidate) -> Result<ResolvedDriver> {
		let driver = service.driver_name();
		let (source, paths) = match candidate {
			Candidate::Override(path) => (DriverSource::Override, DriverPaths::driver(path)),
			Candidate::Managed(paths) => (DriverSource::Managed, paths),
		};

		let Some(driver_path) = paths.driver_path.filter(|p| !p.as_os_str().is_empty()) else {
			warn!(target = "grid", driver, "driver could not be located");
			return Err(Error::NotLocated { driver: driver.to_string() });
		};

		check_path(&*self.fs, driver, &driver_path)?;

		debug!(target = "grid", driver, path = %driver_path.display(), ?source, "driver resolved");
		Ok(ResolvedDriver {
			driver_path,
			browser_path: paths.browser_path,
			source,
		})
	}
}

fn check_path(fs: &dyn FileSystem, driver: &str, path: &Path) -> Result<()> {
	if !fs.exists(path) {
		warn!(target = "grid", driver, path = %path.display(), "driver path does not exist");
		return Err(Error::InvalidPath {
			driver: driver.to_string(),
			path: path.to_path_buf(),
		});
	}

	if !fs.is_executable(path) {
		warn!(target = "grid", driver, path = %path.display(), "driver path is not executable");
		return Err(Error::NotExecutable {
			driver: driver.to_string(),
			path: path.to_path_buf(),
		});
	}

	Ok(())
}
