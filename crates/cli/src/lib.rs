//! `grid` command-line tool: topology reports and driver resolution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
