//! CLI library components for the tabl command-line tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod selection;
