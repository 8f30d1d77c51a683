use std::io::{self, Write};
use std::sync::Arc;

use grid::{Grid, SnapshotFile, Topology};
use serde::Serialize;
use tracing::info;

use crate::cli::StatusArgs;
use crate::config::GridConfig;
use crate::error::Result;
use crate::output::{OutputFormat, TextOutput, print_success};

/// Topology printed by `grid status`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TopologyReport(pub Topology);

impl TextOutput for TopologyReport {
	fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
		let topology = &self.0;
		writeln!(out, "Grid {}", topology.url)?;
		for node in &topology.nodes {
			let state = if node.is_up { "up" } else { "down" };
			writeln!(out, "  {} {} {} max={}", node.id, node.uri, state, node.max_session_count)?;
		}
		writeln!(out, "Slots: {}/{} used", topology.used_slots, topology.total_slots)
	}
}

pub fn build_report(args: &StatusArgs, config: &GridConfig) -> Result<TopologyReport> {
	let mut builder = Grid::<SnapshotFile>::builder().distributor(Arc::new(SnapshotFile::new(&args.snapshot)));
	if let Some(url) = args.url.as_ref().or(config.public_url.as_ref()) {
		builder = builder.url(url.clone());
	}
	let grid = builder.build()?;

	let topology = grid.topology()?;
	info!(
		target = "grid",
		nodes = topology.nodes.len(),
		total = topology.total_slots,
		used = topology.used_slots,
		"grid status"
	);
	Ok(TopologyReport(topology))
}

pub fn execute(args: &StatusArgs, config: &GridConfig, format: OutputFormat) -> Result<()> {
	let report = build_report(args, config)?;
	print_success("status", report, format);
	Ok(())
}
