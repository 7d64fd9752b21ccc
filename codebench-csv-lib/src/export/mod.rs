//! CSV persistence of entity tables
//!
//! # Implementation Model
//!
//! A [`Table`] is built from a homogeneous collection of records: the header comes from the
//! record kind and each record contributes one row. Building fails as soon as one record
//! has an unresolved reference, so a table is never written partially denormalized.
//!
//! Tables are written UTF-8 encoded, comma separated, with every field quoted. The
//! [`WriteMode`] chosen by the caller decides what happens to an existing destination:
//!
//! - **Overwrite**: the file is truncated and rewritten with header and rows
//! - **Append**: rows are appended without repeating the header; a missing file is
//!   created with a header, exactly like overwrite
//!
//! [`DatasetWriter`] binds an output directory to the fixed file name of each table and
//! applies a per-kind write mode. Runs default to append so they can be streamed in
//! batches; every other kind is rewritten whole.
//!
//! Nothing here coordinates concurrent writers. Callers targeting the same file must
//! serialize their calls.

mod dataset_writer;
mod output_dir;
mod table;
mod write_mode;

pub use dataset_writer::DatasetWriter;
pub use output_dir::ensure_output_directory;
pub use table::{ExportError, Table, export};
pub use write_mode::WriteMode;

/// Log target for the export module
const LOG_TARGET: &str = "    export";
