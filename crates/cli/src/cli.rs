use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Root CLI for the grid tool.
#[derive(Parser, Debug)]
#[command(name = "grid")]
#[command(about = "Grid topology reports and driver resolution")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: json (default) or text
	#[arg(short = 'f', long, global = true, value_enum, default_value = "json")]
	pub format: OutputFormat,

	/// Config file (defaults to $XDG_CONFIG_HOME/grid/config.json)
	#[arg(long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Report nodes and slot usage from a distributor status snapshot.
	Status(StatusArgs),
	/// Resolve the driver executable for a browser.
	Driver(DriverArgs),
}

impl Commands {
	/// Command name used in output envelopes.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Status(_) => "status",
			Commands::Driver(_) => "driver",
		}
	}
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
	/// Distributor status snapshot (JSON).
	#[arg(long, value_name = "FILE")]
	pub snapshot: PathBuf,

	/// Grid's public URL (overrides config `publicUrl`).
	#[arg(long, value_name = "URL")]
	pub url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DriverArgs {
	/// Browser name (chrome, firefox, MicrosoftEdge, safari, safaritp, ...).
	#[arg(value_name = "BROWSER")]
	pub browser: String,

	/// Requested browser version.
	#[arg(long, value_name = "VERSION")]
	pub browser_version: Option<String>,

	/// Requested platform name.
	#[arg(long, value_name = "PLATFORM")]
	pub platform: Option<String>,

	/// Do not let managed resolution touch the network.
	#[arg(long, conflicts_with = "online")]
	pub offline: bool,

	/// Allow network access even when the config file sets offline.
	#[arg(long)]
	pub online: bool,

	/// External driver manager binary used for managed resolution.
	#[arg(long, value_name = "PATH")]
	pub manager: Option<PathBuf>,

	/// Driver name for browsers without a built-in descriptor.
	#[arg(long, value_name = "NAME", requires = "property")]
	pub driver_name: Option<String>,

	/// Environment key holding a driver override, paired with --driver-name.
	#[arg(long, value_name = "KEY", requires = "driver_name")]
	pub property: Option<String>,
}
