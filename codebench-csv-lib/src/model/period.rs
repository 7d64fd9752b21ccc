use super::define_record;
use camino::Utf8PathBuf;

/// An academic term, such as `2023-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    /// Year and semester number.
    pub description: String,

    /// Directory of the period inside the dataset.
    pub path: Utf8PathBuf,
}

impl Period {
    #[must_use]
    pub fn new(description: impl Into<String>, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            description: description.into(),
            path: path.into(),
        }
    }
}

define_record! {
    Period as period in "periodos.csv" {
        descricao: period.description.as_str(),
    }
}
