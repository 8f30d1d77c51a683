//! End-to-end checks for the `grid` binary.

use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Runs `grid` with an isolated config home; returns parsed stdout and the exit status.
fn run_grid(home: &Path, args: &[&str], envs: &[(&str, &str)]) -> (Value, bool) {
	let output = Command::new(env!("CARGO_BIN_EXE_grid"))
		.env("XDG_CONFIG_HOME", home)
		.env_remove("RUST_LOG")
		.envs(envs.iter().copied())
		.args(args)
		.output()
		.expect("failed to execute grid");

	let stdout = String::from_utf8_lossy(&output.stdout);
	let parsed = serde_json::from_str(&stdout).unwrap_or_else(|_| serde_json::json!({ "raw": stdout }));
	(parsed, output.status.success())
}

fn write_snapshot(dir: &Path) -> String {
	let path = dir.join("status.json");
	std::fs::write(
		&path,
		r#"{"nodes":[
			{"nodeId":"n1","uri":"http://n1:5555","isUp":true,"maxSessionCount":5,
			 "stereotypes":{"chrome":10},"usedStereotypes":{"chrome":3,"firefox":2}},
			{"nodeId":"n2","uri":"http://n2:5555","isUp":true,"maxSessionCount":4,
			 "stereotypes":{"firefox":1,"edge":1},"usedStereotypes":{}}
		]}"#,
	)
	.unwrap();
	path.to_string_lossy().into_owned()
}

#[test]
fn status_reports_capped_totals() {
	let temp = TempDir::new().unwrap();
	let snapshot = write_snapshot(temp.path());

	let (json, ok) = run_grid(
		temp.path(),
		&["status", "--snapshot", &snapshot, "--url", "http://grid:4444"],
		&[],
	);

	assert!(ok, "status failed: {json}");
	assert_eq!(json["ok"], true);
	assert_eq!(json["data"]["url"], "http://grid:4444");
	assert_eq!(json["data"]["totalSlots"], 7);
	assert_eq!(json["data"]["usedSlots"], 5);
	assert_eq!(json["data"]["nodes"][0]["id"], "n1");
	assert_eq!(json["data"]["nodes"][1]["maxSessionCount"], 4);
}

#[test]
fn status_reads_url_from_config() {
	let temp = TempDir::new().unwrap();
	let snapshot = write_snapshot(temp.path());
	std::fs::create_dir_all(temp.path().join("grid")).unwrap();
	std::fs::write(
		temp.path().join("grid").join("config.json"),
		r#"{"publicUrl":"http://from-config:4444"}"#,
	)
	.unwrap();

	let (json, ok) = run_grid(temp.path(), &["status", "--snapshot", &snapshot], &[]);

	assert!(ok, "status failed: {json}");
	assert_eq!(json["data"]["url"], "http://from-config:4444");
}

#[test]
fn status_without_url_fails_with_invalid_input() {
	let temp = TempDir::new().unwrap();
	let snapshot = write_snapshot(temp.path());

	let (json, ok) = run_grid(temp.path(), &["status", "--snapshot", &snapshot], &[]);

	assert!(!ok);
	assert_eq!(json["ok"], false);
	assert_eq!(json["command"], "status");
	assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[test]
fn driver_override_pointing_nowhere_is_invalid_path() {
	let temp = TempDir::new().unwrap();
	let missing = temp.path().join("chromedriver");
	let missing = missing.to_string_lossy().into_owned();

	let (json, ok) = run_grid(temp.path(), &["driver", "chrome"], &[("SE_CHROMEDRIVER", missing.as_str())]);

	assert!(!ok);
	assert_eq!(json["error"]["code"], "DRIVER_INVALID_PATH");
	let message = json["error"]["message"].as_str().unwrap_or_default();
	assert!(message.contains("chromedriver"), "message: {message}");
	assert!(message.contains(missing.as_str()), "message: {message}");
}

#[cfg(unix)]
#[test]
fn driver_override_is_validated_and_returned() {
	use std::os::unix::fs::PermissionsExt;

	let temp = TempDir::new().unwrap();
	let driver = temp.path().join("geckodriver");
	std::fs::write(&driver, "#!/bin/sh\nexit 0\n").unwrap();
	std::fs::set_permissions(&driver, std::fs::Permissions::from_mode(0o755)).unwrap();
	let driver = driver.to_string_lossy().into_owned();

	let (json, ok) = run_grid(temp.path(), &["driver", "firefox"], &[("SE_GECKODRIVER", driver.as_str())]);

	assert!(ok, "driver failed: {json}");
	assert_eq!(json["data"]["driver"], "geckodriver");
	assert_eq!(json["data"]["driverPath"], driver.as_str());
	assert_eq!(json["data"]["source"], "override");
}

#[cfg(unix)]
#[test]
fn driver_without_execute_bit_is_rejected() {
	use std::os::unix::fs::PermissionsExt;

	let temp = TempDir::new().unwrap();
	let driver = temp.path().join("chromedriver");
	std::fs::write(&driver, "not a binary").unwrap();
	std::fs::set_permissions(&driver, std::fs::Permissions::from_mode(0o644)).unwrap();
	let driver = driver.to_string_lossy().into_owned();

	let (json, ok) = run_grid(temp.path(), &["driver", "chrome"], &[("SE_CHROMEDRIVER", driver.as_str())]);

	assert!(!ok);
	assert_eq!(json["error"]["code"], "DRIVER_NOT_EXECUTABLE");
}
