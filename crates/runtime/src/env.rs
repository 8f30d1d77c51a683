//! Environment lookup used for driver overrides.

use std::collections::HashMap;
use std::ffi::OsString;

/// Read-only key/value lookup.
///
/// Values are raw OS strings: an override naming a path that is not valid
/// UTF-8 is still an override.
pub trait Environment: Send + Sync {
	fn get(&self, key: &str) -> Option<OsString>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
	fn get(&self, key: &str) -> Option<OsString> {
		std::env::var_os(key)
	}
}

impl Environment for HashMap<String, String> {
	fn get(&self, key: &str) -> Option<OsString> {
		HashMap::get(self, key).map(OsString::from)
	}
}

impl Environment for HashMap<String, OsString> {
	fn get(&self, key: &str) -> Option<OsString> {
		HashMap::get(self, key).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn map_lookups_return_os_strings() {
		let plain: HashMap<String, String> = [("SE_CHROMEDRIVER".to_string(), "/opt/chromedriver".to_string())].into();
		assert_eq!(Environment::get(&plain, "SE_CHROMEDRIVER"), Some(OsString::from("/opt/chromedriver")));
		assert_eq!(Environment::get(&plain, "SE_GECKODRIVER"), None);
	}

	#[cfg(unix)]
	#[test]
	fn non_utf8_values_survive_lookup() {
		use std::os::unix::ffi::OsStrExt;

		let raw = std::ffi::OsStr::from_bytes(b"/opt/drv\xff").to_os_string();
		let env: HashMap<String, OsString> = [("SE_CHROMEDRIVER".to_string(), raw.clone())].into();
		assert_eq!(Environment::get(&env, "SE_CHROMEDRIVER"), Some(raw));
	}
}
