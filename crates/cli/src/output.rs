//! Output envelope for CLI commands.
//!
//! Every command prints one result on stdout:
//!
//! ```json
//! { "ok": true, "command": "status", "data": { ... } }
//! ```
//!
//! On failure:
//!
//! ```json
//! { "ok": false, "command": "driver", "error": { "code": "DRIVER_NOT_LOCATED", "message": "..." } }
//! ```

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// JSON envelope (default)
	#[default]
	Json,
	/// Human-readable text
	Text,
}

/// Result envelope printed by every command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
	pub ok: bool,
	pub command: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,
}

impl<T: Serialize> CommandResult<T> {
	pub fn success(command: &str, data: T) -> Self {
		Self {
			ok: true,
			command: command.to_string(),
			data: Some(data),
			error: None,
		}
	}

	pub fn failure(command: &str, error: CommandError) -> Self {
		Self {
			ok: false,
			command: command.to_string(),
			data: None,
			error: Some(error),
		}
	}
}

/// Structured error information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
	pub code: ErrorCode,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Missing or malformed input
	InvalidInput,
	/// Config file could not be read
	ConfigError,
	/// Managed resolution failed
	DriverResolutionFailed,
	/// No driver candidate found
	DriverNotLocated,
	/// Driver candidate does not exist
	DriverInvalidPath,
	/// Driver candidate is not executable
	DriverNotExecutable,
	/// File I/O error
	IoError,
	/// Unknown/internal error
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// Same spelling as the serialized form
		let name = serde_json::to_value(self)
			.ok()
			.and_then(|v| v.as_str().map(str::to_owned))
			.unwrap_or_default();
		f.write_str(&name)
	}
}

/// Text rendering for command payloads.
pub trait TextOutput {
	fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Prints a successful result in the requested format.
pub fn print_success<T: Serialize + TextOutput>(command: &str, data: T, format: OutputFormat) {
	match format {
		OutputFormat::Json => print_result(&CommandResult::success(command, data), format),
		OutputFormat::Text => {
			let mut stdout = io::stdout().lock();
			let _ = data.write_text(&mut stdout);
		}
	}
}

/// Prints a result envelope.
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Json => {
			if let Ok(json) = serde_json::to_string_pretty(result) {
				println!("{json}");
			}
		}
		OutputFormat::Text => {
			if let Some(error) = &result.error {
				println!("{}: {}", error.code, error.message);
			}
		}
	}
}

pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn success_envelope_omits_error() {
		let value = serde_json::to_value(CommandResult::success("status", json!({"usedSlots": 1}))).unwrap();
		assert_eq!(value, json!({"ok": true, "command": "status", "data": {"usedSlots": 1}}));
	}

	#[test]
	fn failure_envelope_carries_code() {
		let error = CommandError {
			code: ErrorCode::DriverNotExecutable,
			message: "chromedriver located at /x, cannot be executed".into(),
			details: None,
		};
		let value = serde_json::to_value(CommandResult::<()>::failure("driver", error)).unwrap();
		assert_eq!(value["ok"], false);
		assert_eq!(value["error"]["code"], "DRIVER_NOT_EXECUTABLE");
		assert!(value.get("data").is_none());
	}

	#[test]
	fn error_code_display_matches_wire_name() {
		assert_eq!(ErrorCode::DriverNotLocated.to_string(), "DRIVER_NOT_LOCATED");
		assert_eq!(ErrorCode::InvalidInput.to_string(), "INVALID_INPUT");
	}
}
