use super::{ExportError, WriteMode, ensure_output_directory, export};
use crate::config::Config;
use crate::model::{Activity, Class, ErrorCount, Period, Record, Run, Solution, Student, TableKind};
use camino::{Utf8Path, Utf8PathBuf};
use core::borrow::Borrow;

/// Writes each entity kind to its fixed file inside one output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetWriter {
    output_dir: Utf8PathBuf,
    runs_mode: WriteMode,
    tables_mode: WriteMode,
}

impl DatasetWriter {
    /// Create a writer that appends runs and overwrites every other table.
    #[must_use]
    pub fn new(output_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            runs_mode: WriteMode::Append,
            tables_mode: WriteMode::Overwrite,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            runs_mode: config.runs_mode,
            tables_mode: config.tables_mode,
        }
    }

    /// Change the write mode used for runs and for every other table.
    #[must_use]
    pub const fn with_modes(mut self, runs_mode: WriteMode, tables_mode: WriteMode) -> Self {
        self.runs_mode = runs_mode;
        self.tables_mode = tables_mode;
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    #[must_use]
    pub const fn mode(&self, kind: TableKind) -> WriteMode {
        match kind {
            TableKind::Runs => self.runs_mode,
            _ => self.tables_mode,
        }
    }

    #[must_use]
    pub fn table_path(&self, kind: TableKind) -> Utf8PathBuf {
        self.output_dir.join(kind.file_name())
    }

    /// Create the output directory if needed. Failure is logged, not raised.
    pub fn create_output_dir(&self) -> bool {
        ensure_output_directory(&self.output_dir)
    }

    pub fn save_periods<I>(&self, periods: I) -> Result<usize, ExportError>
    where
        I: IntoIterator,
        I::Item: Borrow<Period>,
    {
        self.save::<Period, I>(TableKind::Periods, periods)
    }

    pub fn save_classes<I>(&self, classes: I) -> Result<usize, ExportError>
    where
        I: IntoIterator,
        I::Item: Borrow<Class>,
    {
        self.save::<Class, I>(TableKind::Classes, classes)
    }

    pub fn save_activities<I>(&self, activities: I) -> Result<usize, ExportError>
    where
        I: IntoIterator,
        I::Item: Borrow<Activity>,
    {
        self.save::<Activity, I>(TableKind::Activities, activities)
    }

    pub fn save_students<I>(&self, students: I) -> Result<usize, ExportError>
    where
        I: IntoIterator,
        I::Item: Borrow<Student>,
    {
        self.save::<Student, I>(TableKind::Students, students)
    }

    /// Save a batch of runs. With the default append mode, repeated calls accumulate rows
    /// under a single header.
    pub fn save_runs<I>(&self, runs: I) -> Result<usize, ExportError>
    where
        I: IntoIterator,
        I::Item: Borrow<Run>,
    {
        self.save::<Run, I>(TableKind::Runs, runs)
    }

    pub fn save_solutions<I>(&self, solutions: I) -> Result<usize, ExportError>
    where
        I: IntoIterator,
        I::Item: Borrow<Solution>,
    {
        self.save::<Solution, I>(TableKind::Solutions, solutions)
    }

    pub fn save_errors<I>(&self, errors: I) -> Result<usize, ExportError>
    where
        I: IntoIterator,
        I::Item: Borrow<ErrorCount>,
    {
        self.save::<ErrorCount, I>(TableKind::Errors, errors)
    }

    fn save<R, I>(&self, kind: TableKind, records: I) -> Result<usize, ExportError>
    where
        R: Record,
        I: IntoIterator,
        I::Item: Borrow<R>,
    {
        export::<R, I>(records, &self.table_path(kind), self.mode(kind))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_modes() {
        let writer = DatasetWriter::new("csv");
        assert_eq!(writer.mode(TableKind::Runs), WriteMode::Append);
        assert_eq!(writer.mode(TableKind::Periods), WriteMode::Overwrite);
        assert_eq!(writer.mode(TableKind::Errors), WriteMode::Overwrite);
    }

    #[test]
    fn test_with_modes() {
        let writer = DatasetWriter::new("csv").with_modes(WriteMode::Overwrite, WriteMode::Append);
        assert_eq!(writer.mode(TableKind::Runs), WriteMode::Overwrite);
        assert_eq!(writer.mode(TableKind::Students), WriteMode::Append);
    }

    #[test]
    fn test_table_path() {
        let writer = DatasetWriter::new("out/csv");
        assert_eq!(writer.output_dir(), "out/csv");
        assert_eq!(writer.table_path(TableKind::Runs), Utf8PathBuf::from("out/csv/execucoes.csv"));
        assert_eq!(writer.table_path(TableKind::Errors), Utf8PathBuf::from("out/csv/erros.csv"));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            output_dir: "dataset/csv".into(),
            runs_mode: WriteMode::Overwrite,
            tables_mode: WriteMode::Overwrite,
        };
        let writer = DatasetWriter::from_config(&config);
        assert_eq!(writer.output_dir(), "dataset/csv");
        assert_eq!(writer.mode(TableKind::Runs), WriteMode::Overwrite);
    }
}
