use std::path::PathBuf;

use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("failed to load config {}", path.display())]
	Config {
		path: PathBuf,
		#[source]
		source: anyhow::Error,
	},

	#[error(transparent)]
	Grid(#[from] grid::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

impl CliError {
	/// Maps this error to an output code and message.
	pub fn to_command_error(&self) -> CommandError {
		let code = match self {
			CliError::InvalidInput(_) => ErrorCode::InvalidInput,
			CliError::Config { .. } => ErrorCode::ConfigError,
			CliError::Grid(err) => grid_error_code(err),
			CliError::Io(_) => ErrorCode::IoError,
			CliError::Anyhow(_) => ErrorCode::InternalError,
		};

		let details = match self {
			CliError::Grid(err) => err
				.driver_path()
				.map(|path| serde_json::json!({ "path": path.display().to_string() })),
			_ => None,
		};

		CommandError {
			code,
			message: self.to_string(),
			details,
		}
		.with_cause(self)
	}
}

fn grid_error_code(err: &grid::Error) -> ErrorCode {
	use grid::Error;

	match err {
		Error::InvalidArgument(_) => ErrorCode::InvalidInput,
		Error::DriverResolution { .. } => ErrorCode::DriverResolutionFailed,
		Error::NotLocated { .. } => ErrorCode::DriverNotLocated,
		Error::InvalidPath { .. } => ErrorCode::DriverInvalidPath,
		Error::NotExecutable { .. } => ErrorCode::DriverNotExecutable,
		Error::Io(_) => ErrorCode::IoError,
		Error::Json(_) => ErrorCode::InvalidInput,
	}
}

impl CommandError {
	/// Appends the source chain so wrapped causes are not lost.
	fn with_cause(mut self, err: &(dyn std::error::Error + 'static)) -> Self {
		let mut source = err.source();
		while let Some(cause) = source {
			let text = cause.to_string();
			if !self.message.contains(&text) {
				self.message.push_str(": ");
				self.message.push_str(&text);
			}
			source = cause.source();
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn driver_errors_map_to_distinct_codes() {
		let not_located: CliError = grid::Error::NotLocated { driver: "chromedriver".into() }.into();
		assert_eq!(not_located.to_command_error().code, ErrorCode::DriverNotLocated);

		let invalid: CliError = grid::Error::InvalidPath {
			driver: "chromedriver".into(),
			path: PathBuf::from("/nope"),
		}
		.into();
		let cmd = invalid.to_command_error();
		assert_eq!(cmd.code, ErrorCode::DriverInvalidPath);
		assert_eq!(cmd.details.unwrap()["path"], "/nope");

		let wrapped: CliError = grid::Error::DriverResolution {
			capabilities: Box::new(grid::Capabilities::new("chrome")),
			source: anyhow::anyhow!("boom"),
		}
		.into();
		assert_eq!(wrapped.to_command_error().code, ErrorCode::DriverResolutionFailed);
	}

	#[test]
	fn config_errors_include_cause() {
		let err = CliError::Config {
			path: PathBuf::from("/etc/grid.json"),
			source: anyhow::anyhow!("expected value at line 1"),
		};
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::ConfigError);
		assert_eq!(cmd.message, "failed to load config /etc/grid.json: expected value at line 1");
	}
}
