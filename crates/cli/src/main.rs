use clap::Parser;
use grid_cli::cli::Cli;
use grid_cli::error::CliError;
use grid_cli::output::{self, OutputFormat};
use grid_cli::{commands, logging};

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	let command = cli.command.name();

	if let Err(err) = commands::dispatch(cli) {
		handle_error(command, err, format);
		std::process::exit(1);
	}
}

fn handle_error(command: &'static str, err: CliError, format: OutputFormat) {
	let cmd_error = err.to_command_error();

	// Always print to stderr for humans
	output::print_error_stderr(&cmd_error);

	if format == OutputFormat::Json {
		output::print_result(&output::CommandResult::<()>::failure(command, cmd_error), format);
	}
}
