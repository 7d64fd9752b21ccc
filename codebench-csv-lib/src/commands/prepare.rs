use super::Host;
use crate::Result;
use crate::config::Config;
use crate::export::DatasetWriter;
use crate::model::TableKind;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::app_err;
use std::io::Write;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
pub struct PrepareArgs {
    /// Path to configuration file (default is `codebench.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Create the configured output directory and list where each table will be written
pub fn prepare_output<H: Host>(host: &mut H, args: &PrepareArgs) -> Result<()> {
    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let writer = DatasetWriter::from_config(&config);

    if !writer.create_output_dir() {
        let _ = writeln!(host.error(), "Could not create output directory '{}'", writer.output_dir());
        host.exit(1);
        return Err(app_err!("unable to create output directory '{}'", writer.output_dir()));
    }

    let _ = writeln!(host.output(), "Tables will be written to '{}':", writer.output_dir());
    for kind in TableKind::iter() {
        let _ = writeln!(host.output(), "  {:<16} {} ({})", kind.file_name(), kind.entity(), writer.mode(kind));
    }

    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::TestHost;
    use std::fs;

    fn write_config(root: &Utf8Path, output_dir: &Utf8Path) -> Utf8PathBuf {
        let path = root.join("codebench.toml");
        fs::write(&path, format!("output_dir = '{output_dir}'\n")).unwrap();
        path
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_creates_output_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let output_dir = root.join("dataset").join("csv");
        let config = write_config(&root, &output_dir);

        let mut host = TestHost::new();
        prepare_output(&mut host, &PrepareArgs { config: Some(config) }).unwrap();

        assert!(output_dir.is_dir());
        let text = host.output_text();
        assert!(text.contains(output_dir.as_str()));
        assert!(text.contains("execucoes.csv"));
        assert!(text.contains("Run (append)"));
        assert!(text.contains("Period (overwrite)"));
        assert_eq!(host.exit_code, None);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_reports_blocked_output_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let blocker = root.join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let config = write_config(&root, &blocker.join("csv"));

        let mut host = TestHost::new();
        assert!(prepare_output(&mut host, &PrepareArgs { config: Some(config) }).is_err());
        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_text().contains("Could not create output directory"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_invalid_config_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let config = root.join("codebench.toml");
        fs::write(&config, "output_dir = 42\n").unwrap();

        let mut host = TestHost::new();
        assert!(prepare_output(&mut host, &PrepareArgs { config: Some(config) }).is_err());
    }
}
