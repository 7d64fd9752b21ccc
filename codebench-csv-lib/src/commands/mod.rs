//! Command-line interface and orchestration for codebench-csv
//!
//! # Implementation Model
//!
//! The `run` function parses command-line arguments using clap and routes to one of
//! three handlers:
//!
//! - **schema**: Print the file name and quoted header of every table, or of one table
//! - **init**: Generate a default configuration file
//! - **prepare**: Load the configuration and create the output directory the tables
//!   will be written to
//!
//! Every handler writes through a [`Host`] so tests can capture output and exit codes.
//! The `common` module holds the logging setup shared by all commands.

mod common;
mod host;
mod init;
mod prepare;
mod run;
mod schema;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use prepare::{PrepareArgs, prepare_output};
pub use run::run;
pub use schema::{SchemaArgs, print_schema};

#[cfg(test)]
pub use host::TestHost;
