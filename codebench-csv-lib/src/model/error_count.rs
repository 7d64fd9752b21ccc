use super::{Activity, Class, Link, MissingReference, Period, Record, Student, define_record};

/// How many times one interpreter error type was raised while a student worked on an
/// exercise.
///
/// The references are unset on construction and must be filled in by the caller before
/// the row is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorCount {
    pub period: Link<Period>,
    pub class: Link<Class>,
    pub activity: Link<Activity>,
    pub student: Link<Student>,
    pub exercise: Option<u64>,

    /// Error name as reported by the interpreter, e.g. `ZeroDivisionError`.
    pub kind: String,
    pub occurrences: u64,
}

impl ErrorCount {
    #[must_use]
    pub fn new(kind: impl Into<String>, occurrences: u64) -> Self {
        Self {
            kind: kind.into(),
            occurrences,
            ..Self::default()
        }
    }

    pub fn period(&self) -> Result<&Period, MissingReference> {
        self.period.resolve(Self::KIND, "periodo")
    }

    pub fn class(&self) -> Result<&Class, MissingReference> {
        self.class.resolve(Self::KIND, "turma")
    }

    pub fn activity(&self) -> Result<&Activity, MissingReference> {
        self.activity.resolve(Self::KIND, "atividade")
    }

    pub fn student(&self) -> Result<&Student, MissingReference> {
        self.student.resolve(Self::KIND, "estudante")
    }

    pub fn exercise(&self) -> Result<u64, MissingReference> {
        self.exercise.ok_or(MissingReference::new(Self::KIND, "exercicio"))
    }
}

define_record! {
    ErrorCount as error in "erros.csv" {
        periodo: error.period()?.description.as_str(),
        turma: error.class()?.code,
        atividade: error.activity()?.code,
        estudante: error.student()?.code,
        exercicio: error.exercise()?,
        tipo: error.kind.as_str(),
        ocorrencias: error.occurrences,
    }
}
