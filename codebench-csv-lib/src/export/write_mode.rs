use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::Display;

/// What to do when the destination of a table already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Display, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WriteMode {
    /// Replace the file with the header and the new rows.
    Overwrite,

    /// Add the new rows after the existing ones, without another header.
    Append,
}
