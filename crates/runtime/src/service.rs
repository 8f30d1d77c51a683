//! Driver service descriptors.

/// Describes the driver a service launches.
///
/// `driver_property` names the environment entry that can point at an explicit
/// driver binary; `driver_name` is what error messages call the driver.
pub trait DriverService: Send + Sync {
	fn driver_property(&self) -> &str;
	fn driver_name(&self) -> &str;
}

/// A descriptor built from plain strings, for drivers not in [`KnownDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverServiceInfo {
	pub name: String,
	pub property: String,
}

impl DriverServiceInfo {
	pub fn new(name: impl Into<String>, property: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			property: property.into(),
		}
	}
}

impl DriverService for DriverServiceInfo {
	fn driver_property(&self) -> &str {
		&self.property
	}

	fn driver_name(&self) -> &str {
		&self.name
	}
}

/// Browser names accepted for Safari Technology Preview.
pub const SAFARITP_NAMES: &[&str] = &[
	"safaritp",
	"safari technology preview",
	"safaritechnologypreview",
];

/// Drivers the grid knows how to look up by browser name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownDriver {
	Chrome,
	Firefox,
	Edge,
	Safari,
	SafariTechnologyPreview,
}

impl KnownDriver {
	pub const ALL: [KnownDriver; 5] = [
		KnownDriver::Chrome,
		KnownDriver::Firefox,
		KnownDriver::Edge,
		KnownDriver::Safari,
		KnownDriver::SafariTechnologyPreview,
	];

	/// Maps a capability `browserName` to its driver. Case-insensitive.
	pub fn from_browser_name(name: &str) -> Option<Self> {
		let name = name.trim().to_ascii_lowercase();
		match name.as_str() {
			"chrome" | "chromium" | "google chrome" => Some(KnownDriver::Chrome),
			"firefox" | "mozilla firefox" => Some(KnownDriver::Firefox),
			"microsoftedge" | "msedge" | "edge" => Some(KnownDriver::Edge),
			"safari" => Some(KnownDriver::Safari),
			other if SAFARITP_NAMES.contains(&other) => Some(KnownDriver::SafariTechnologyPreview),
			_ => None,
		}
	}

	/// Canonical `browserName` for this driver.
	pub fn browser_name(self) -> &'static str {
		match self {
			KnownDriver::Chrome => "chrome",
			KnownDriver::Firefox => "firefox",
			KnownDriver::Edge => "MicrosoftEdge",
			KnownDriver::Safari => "safari",
			KnownDriver::SafariTechnologyPreview => SAFARITP_NAMES[0],
		}
	}

	/// Executable name searched for on `PATH`.
	pub fn binary_name(self) -> &'static str {
		match self {
			KnownDriver::Chrome => "chromedriver",
			KnownDriver::Firefox => "geckodriver",
			KnownDriver::Edge => "msedgedriver",
			KnownDriver::Safari | KnownDriver::SafariTechnologyPreview => "safaridriver",
		}
	}
}

impl DriverService for KnownDriver {
	fn driver_property(&self) -> &str {
		match self {
			KnownDriver::Chrome => "SE_CHROMEDRIVER",
			KnownDriver::Firefox => "SE_GECKODRIVER",
			KnownDriver::Edge => "SE_EDGEDRIVER",
			KnownDriver::Safari | KnownDriver::SafariTechnologyPreview => "SE_SAFARIDRIVER",
		}
	}

	fn driver_name(&self) -> &str {
		self.binary_name()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn browser_names_map_to_drivers() {
		assert_eq!(KnownDriver::from_browser_name("chrome"), Some(KnownDriver::Chrome));
		assert_eq!(KnownDriver::from_browser_name("Firefox"), Some(KnownDriver::Firefox));
		assert_eq!(KnownDriver::from_browser_name("MicrosoftEdge"), Some(KnownDriver::Edge));
		assert_eq!(
			KnownDriver::from_browser_name("Safari Technology Preview"),
			Some(KnownDriver::SafariTechnologyPreview)
		);
		assert_eq!(KnownDriver::from_browser_name("lynx"), None);
	}

	#[test]
	fn canonical_names_round_trip() {
		for driver in KnownDriver::ALL {
			assert_eq!(KnownDriver::from_browser_name(driver.browser_name()), Some(driver));
		}
	}

	#[test]
	fn safari_variants_share_a_driver() {
		assert_eq!(KnownDriver::Safari.driver_name(), "safaridriver");
		assert_eq!(KnownDriver::SafariTechnologyPreview.driver_name(), "safaridriver");
		assert_eq!(
			KnownDriver::Safari.driver_property(),
			KnownDriver::SafariTechnologyPreview.driver_property()
		);
	}
}
