use super::{Class, Period, define_record};
use camino::Utf8PathBuf;
use std::sync::Arc;

/// A graded assignment made of one or more exercises, given to a [`Class`].
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub class: Arc<Class>,
    pub code: u64,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub language: Option<String>,
    pub kind: Option<String>,
    pub weight: Option<f64>,
    pub block_count: Option<u64>,
    pub blocks: Vec<String>,

    /// Activity description file inside the dataset.
    pub path: Utf8PathBuf,
}

impl Activity {
    #[must_use]
    pub fn new(class: Arc<Class>, code: u64, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            class,
            code,
            title: None,
            start_date: None,
            end_date: None,
            language: None,
            kind: None,
            weight: None,
            block_count: None,
            blocks: Vec::new(),
            path: path.into(),
        }
    }

    #[must_use]
    pub fn period(&self) -> &Period {
        &self.class.period
    }
}

define_record! {
    Activity as activity in "atividades.csv" {
        periodo: activity.period().description.as_str(),
        turma: activity.class.code,
        codigo: activity.code,
        titulo: activity.title.as_deref(),
        data_inicio: activity.start_date.as_deref(),
        data_termino: activity.end_date.as_deref(),
        linguagem: activity.language.as_deref(),
        tipo: activity.kind.as_deref(),
        peso: activity.weight,
        n_blocos: activity.block_count,
        blocos: activity.blocks.as_slice(),
    }
}
