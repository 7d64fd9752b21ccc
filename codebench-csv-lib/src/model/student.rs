use super::{Class, Period, define_record};
use camino::Utf8PathBuf;
use std::sync::Arc;

/// A student enrolled in a [`Class`], with the demographic data gathered at enrollment.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub period: Arc<Period>,
    pub class: Arc<Class>,
    pub code: u64,
    pub course_id: Option<u64>,
    pub course_name: Option<String>,
    pub institution_id: Option<u64>,
    pub institution_name: Option<String>,
    pub school_name: Option<String>,
    pub school_type: Option<String>,
    pub school_shift: Option<String>,
    pub school_graduation_year: Option<u32>,
    pub sex: Option<String>,
    pub birth_year: Option<u32>,
    pub marital_status: Option<String>,
    pub has_children: Option<bool>,

    /// Directory of the student inside the dataset.
    pub path: Utf8PathBuf,
}

impl Student {
    #[must_use]
    pub fn new(period: Arc<Period>, class: Arc<Class>, code: u64, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            period,
            class,
            code,
            course_id: None,
            course_name: None,
            institution_id: None,
            institution_name: None,
            school_name: None,
            school_type: None,
            school_shift: None,
            school_graduation_year: None,
            sex: None,
            birth_year: None,
            marital_status: None,
            has_children: None,
            path: path.into(),
        }
    }
}

define_record! {
    Student as student in "estudantes.csv" {
        periodo: student.period.description.as_str(),
        turma: student.class.code,
        codigo: student.code,
        curso_id: student.course_id,
        curso_nome: student.course_name.as_deref(),
        instituicao_id: student.institution_id,
        instituicao_nome: student.institution_name.as_deref(),
        escola_nome: student.school_name.as_deref(),
        escola_tipo: student.school_type.as_deref(),
        escola_turno: student.school_shift.as_deref(),
        escola_ano_grad: student.school_graduation_year,
        sexo: student.sex.as_deref(),
        ano_nascimento: student.birth_year,
        estado_civil: student.marital_status.as_deref(),
        tem_filhos: student.has_children,
    }
}
