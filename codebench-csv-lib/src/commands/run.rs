//! Command dispatch logic for codebench-csv

use super::common::{LogLevel, init_logging};
use super::{InitArgs, PrepareArgs, SchemaArgs, init_config, prepare_output, print_schema};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "codebench-csv", author, version, long_about = None)]
#[command(about = "Export Codebench dataset entities as CSV tables")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the file name and header of each table
    Schema(SchemaArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Create the output directory and show where each table will be written
    Prepare(PrepareArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.log_level);

    match &cli.command {
        Command::Schema(schema_args) => print_schema(host, schema_args),
        Command::Init(init_args) => init_config(host, init_args),
        Command::Prepare(prepare_args) => prepare_output(host, prepare_args),
    }
}
