use super::{Period, define_record};
use camino::Utf8PathBuf;
use std::sync::Arc;

/// A cohort of students within a [`Period`].
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub period: Arc<Period>,
    pub code: u64,
    pub description: Option<String>,

    /// Directory of the class inside the dataset.
    pub path: Utf8PathBuf,
}

impl Class {
    #[must_use]
    pub fn new(period: Arc<Period>, code: u64, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            period,
            code,
            description: None,
            path: path.into(),
        }
    }
}

define_record! {
    Class as class in "turmas.csv" {
        periodo: class.period.description.as_str(),
        codigo: class.code,
        descricao: class.description.as_deref(),
    }
}
