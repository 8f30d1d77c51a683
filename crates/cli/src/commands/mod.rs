mod driver;
mod status;

use crate::cli::{Cli, Commands};
use crate::config::GridConfig;
use crate::error::Result;

pub use driver::DriverReport;
pub use status::TopologyReport;

pub fn dispatch(cli: Cli) -> Result<()> {
	let config = GridConfig::load(cli.config.as_deref())?;
	let format = cli.format;

	match cli.command {
		Commands::Status(args) => status::execute(&args, &config, format),
		Commands::Driver(args) => driver::execute(&args, &config, format),
	}
}
