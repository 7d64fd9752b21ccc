use super::LOG_TARGET;
use camino::Utf8Path;
use std::fs;

/// Create the output directory, and any missing parent, if it does not exist.
///
/// Failure is logged and reported through the return value; it is up to the caller to
/// decide whether to carry on.
pub fn ensure_output_directory(path: &Utf8Path) -> bool {
    match fs::create_dir_all(path) {
        Ok(()) => {
            log::debug!(target: LOG_TARGET, "Output directory '{path}' is ready");
            true
        }
        Err(e) => {
            log::error!(target: LOG_TARGET, "Could not create output directory '{path}': {e}");
            false
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_root(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = temp_root(&tmp).join("out").join("csv");
        assert!(ensure_output_directory(&path));
        assert!(path.is_dir());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = temp_root(&tmp).join("csv");
        assert!(ensure_output_directory(&path));
        assert!(ensure_output_directory(&path));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_reports_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = temp_root(&tmp).join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        assert!(!ensure_output_directory(&blocker.join("csv")));
    }
}
