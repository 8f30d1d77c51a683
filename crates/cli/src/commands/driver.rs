use std::io::{self, Write};

use grid::Capabilities;
use grid::runtime::{
	DriverFinder, DriverService, DriverServiceInfo, KnownDriver, ManagerCommand, PathLookup, ResolvedDriver,
};
use serde::Serialize;
use tracing::info;

use crate::cli::DriverArgs;
use crate::config::GridConfig;
use crate::error::{CliError, Result};
use crate::output::{OutputFormat, TextOutput, print_success};

/// Resolution printed by `grid driver`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverReport {
	pub driver: String,
	#[serde(flatten)]
	pub resolved: ResolvedDriver,
}

impl TextOutput for DriverReport {
	fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
		writeln!(out, "{}", self.resolved.driver_path.display())?;
		if let Some(browser) = &self.resolved.browser_path {
			writeln!(out, "browser: {}", browser.display())?;
		}
		Ok(())
	}
}

fn capabilities(args: &DriverArgs) -> Capabilities {
	let mut caps = Capabilities::new(args.browser.clone());
	if let Some(version) = &args.browser_version {
		caps = caps.with_version(version.clone());
	}
	if let Some(platform) = &args.platform {
		caps = caps.with_platform(platform.clone());
	}
	caps
}

fn service(args: &DriverArgs) -> Result<Box<dyn DriverService>> {
	if let (Some(name), Some(property)) = (&args.driver_name, &args.property) {
		return Ok(Box::new(DriverServiceInfo::new(name.clone(), property.clone())));
	}

	KnownDriver::from_browser_name(&args.browser)
		.map(|driver| Box::new(driver) as Box<dyn DriverService>)
		.ok_or_else(|| {
			CliError::InvalidInput(format!(
				"no built-in driver for browser '{}'; pass --driver-name and --property",
				args.browser
			))
		})
}

fn finder(args: &DriverArgs, config: &GridConfig) -> DriverFinder {
	match args.manager.as_ref().or(config.manager.as_ref()) {
		Some(manager) => DriverFinder::new(ManagerCommand::new(manager.clone())),
		None => DriverFinder::new(PathLookup::new()),
	}
}

/// Flags win over the config file in both directions.
fn offline(args: &DriverArgs, config: &GridConfig) -> bool {
	if args.online {
		return false;
	}
	args.offline || config.offline
}

pub fn resolve(args: &DriverArgs, config: &GridConfig) -> Result<DriverReport> {
	let service = service(args)?;
	let caps = capabilities(args);
	let offline = offline(args, config);

	let resolved = finder(args, config).resolve_with(service.as_ref(), &caps, offline)?;
	info!(
		target = "grid",
		driver = service.driver_name(),
		path = %resolved.driver_path.display(),
		"driver resolved"
	);

	Ok(DriverReport {
		driver: service.driver_name().to_string(),
		resolved,
	})
}

pub fn execute(args: &DriverArgs, config: &GridConfig, format: OutputFormat) -> Result<()> {
	let report = resolve(args, config)?;
	print_success("driver", report, format);
	Ok(())
}
