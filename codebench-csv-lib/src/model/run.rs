use super::{Activity, Class, CodeTokens, Metrics, Period, Student, define_record};
use std::sync::Arc;

/// One student's attempts at one exercise: behaviour counters plus the metrics of the
/// last submitted code.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub period: Arc<Period>,
    pub class: Arc<Class>,
    pub student: Arc<Student>,
    pub activity: Arc<Activity>,
    pub exercise: u64,

    /// Total implementation time.
    pub total_time: Option<f64>,

    /// Implementation time discounting idle intervals.
    pub focus_time: Option<f64>,
    pub submissions: Option<u64>,
    pub tests: Option<u64>,
    pub errors: Option<u64>,
    pub execution_time: Option<f64>,
    pub final_grade: Option<f64>,
    pub correct: Option<bool>,

    /// `None` when the student's code could not be analysed.
    pub metrics: Option<Metrics>,

    /// `None` when the student's code could not be tokenized.
    pub tokens: Option<CodeTokens>,
}

impl Run {
    #[must_use]
    pub const fn new(period: Arc<Period>, class: Arc<Class>, student: Arc<Student>, activity: Arc<Activity>, exercise: u64) -> Self {
        Self {
            period,
            class,
            student,
            activity,
            exercise,
            total_time: None,
            focus_time: None,
            submissions: None,
            tests: None,
            errors: None,
            execution_time: None,
            final_grade: None,
            correct: None,
            metrics: None,
            tokens: None,
        }
    }

    #[must_use]
    pub fn metrics_or_unset(&self) -> &Metrics {
        self.metrics.as_ref().unwrap_or(&Metrics::UNSET)
    }

    #[must_use]
    pub fn tokens_or_unset(&self) -> &CodeTokens {
        self.tokens.as_ref().unwrap_or(&CodeTokens::UNSET)
    }
}

define_record! {
    Run as run in "execucoes.csv" {
        periodo: run.period.description.as_str(),
        turma: run.class.code,
        estudante: run.student.code,
        atividade: run.activity.code,
        exercicio: run.exercise,
        tempo_total: run.total_time,
        tempo_foco: run.focus_time,
        n_submissoes: run.submissions,
        n_testes: run.tests,
        n_erros: run.errors,
        t_execucao: run.execution_time,
        nota_final: run.final_grade,
        acertou: run.correct,
    }
    embeds {
        Metrics: run.metrics_or_unset(),
        CodeTokens: run.tokens_or_unset(),
    }
}
