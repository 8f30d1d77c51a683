//! Requested browser capabilities.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Browser capability set a driver is resolved for.
///
/// Only `browser_name` is required; everything the typed fields don't cover is
/// kept in `extra` so it survives a round trip through JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
	pub browser_name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub browser_version: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub platform_name: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Capabilities {
	pub fn new(browser_name: impl Into<String>) -> Self {
		Self {
			browser_name: browser_name.into(),
			..Default::default()
		}
	}

	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.browser_version = Some(version.into());
		self
	}

	pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
		self.platform_name = Some(platform.into());
		self
	}

	/// Adds a free-form capability entry.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}
}

impl fmt::Display for Capabilities {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Capabilities {{browserName: {}", self.browser_name)?;
		if let Some(version) = &self.browser_version {
			write!(f, ", browserVersion: {version}")?;
		}
		if let Some(platform) = &self.platform_name {
			write!(f, ", platformName: {platform}")?;
		}
		for (key, value) in &self.extra {
			write!(f, ", {key}: {value}")?;
		}
		write!(f, "}}")
	}
}
