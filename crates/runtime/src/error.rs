//! Error types for driver resolution and grid status.

use std::path::PathBuf;

use grid_protocol::Capabilities;
use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a grid view or resolving a driver binary.
///
/// Each resolution stage fails with its own variant so callers can tell
/// "nothing found" ([`Error::NotLocated`]) apart from "found but broken"
/// ([`Error::InvalidPath`], [`Error::NotExecutable`]) and from a broken
/// lookup mechanism ([`Error::DriverResolution`]).
#[derive(Debug, Error)]
pub enum Error {
	/// A required input was missing or empty.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// Managed resolution itself failed.
	#[error("Unable to obtain: {capabilities}, error {source}")]
	DriverResolution {
		/// The capabilities that were requested.
		capabilities: Box<Capabilities>,
		#[source]
		source: anyhow::Error,
	},

	/// Neither the override nor managed resolution produced a path.
	#[error("Unable to locate or obtain {driver}")]
	NotLocated { driver: String },

	/// A path was produced but nothing exists there.
	#[error("{driver} located at {}, but invalid", path.display())]
	InvalidPath { driver: String, path: PathBuf },

	/// The path exists but lacks execute permission.
	#[error("{driver} located at {}, cannot be executed", path.display())]
	NotExecutable { driver: String, path: PathBuf },

	/// I/O error.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Builds an [`Error::InvalidArgument`] naming the missing input.
	pub fn missing(what: &str) -> Self {
		Error::InvalidArgument(format!("{what} must be set"))
	}

	/// Returns true when no driver candidate was found at all.
	pub fn is_not_located(&self) -> bool {
		matches!(self, Error::NotLocated { .. })
	}

	/// Returns true for failures that concern a specific driver candidate
	/// (missing, invalid, or non-executable).
	pub fn is_driver_issue(&self) -> bool {
		matches!(
			self,
			Error::NotLocated { .. } | Error::InvalidPath { .. } | Error::NotExecutable { .. }
		)
	}

	/// Returns the offending path for path-related failures.
	pub fn driver_path(&self) -> Option<&std::path::Path> {
		match self {
			Error::InvalidPath { path, .. } | Error::NotExecutable { path, .. } => Some(path),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_driver_and_path() {
		let err = Error::InvalidPath {
			driver: "chromedriver".into(),
			path: PathBuf::from("/opt/drivers/chromedriver"),
		};
		assert_eq!(err.to_string(), "chromedriver located at /opt/drivers/chromedriver, but invalid");
		assert_eq!(err.driver_path(), Some(std::path::Path::new("/opt/drivers/chromedriver")));

		let err = Error::NotLocated { driver: "geckodriver".into() };
		assert_eq!(err.to_string(), "Unable to locate or obtain geckodriver");
		assert!(err.driver_path().is_none());
	}

	#[test]
	fn resolution_error_keeps_cause() {
		let err = Error::DriverResolution {
			capabilities: Box::new(Capabilities::new("chrome")),
			source: anyhow::anyhow!("network unreachable"),
		};
		let Error::DriverResolution { capabilities, .. } = &err else {
			unreachable!();
		};
		assert_eq!(capabilities.browser_name, "chrome");
		assert_eq!(
			err.to_string(),
			"Unable to obtain: Capabilities {browserName: chrome}, error network unreachable"
		);
		let source = std::error::Error::source(&err).map(|s| s.to_string());
		assert_eq!(source.as_deref(), Some("network unreachable"));
		assert!(!err.is_driver_issue());
	}

	#[test]
	fn classification_helpers() {
		assert!(Error::NotLocated { driver: "x".into() }.is_not_located());
		assert!(
			Error::NotExecutable {
				driver: "x".into(),
				path: PathBuf::from("/x")
			}
			.is_driver_issue()
		);
		assert!(!Error::missing("Browser options").is_driver_issue());
		assert_eq!(Error::missing("Browser options").to_string(), "Invalid argument: Browser options must be set");
	}
}
