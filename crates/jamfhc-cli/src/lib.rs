//! CLI surface of the Jamf Pro health-check exporter.

pub mod parser;

pub use parser::Cli;
