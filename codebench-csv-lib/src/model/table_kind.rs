use super::{Activity, Class, ErrorCount, Period, Record, Run, Solution, Student};
use clap::ValueEnum;
use strum::{Display, EnumIter};

/// The tables produced from a dataset, one per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, ValueEnum)]
#[strum(serialize_all = "snake_case")]
pub enum TableKind {
    Periods,
    Classes,
    Activities,
    Students,
    Runs,
    Solutions,
    Errors,
}

impl TableKind {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Periods => Period::FILE_NAME,
            Self::Classes => Class::FILE_NAME,
            Self::Activities => Activity::FILE_NAME,
            Self::Students => Student::FILE_NAME,
            Self::Runs => Run::FILE_NAME,
            Self::Solutions => Solution::FILE_NAME,
            Self::Errors => ErrorCount::FILE_NAME,
        }
    }

    #[must_use]
    pub fn entity(self) -> &'static str {
        match self {
            Self::Periods => Period::KIND,
            Self::Classes => Class::KIND,
            Self::Activities => Activity::KIND,
            Self::Students => Student::KIND,
            Self::Runs => Run::KIND,
            Self::Solutions => Solution::KIND,
            Self::Errors => ErrorCount::KIND,
        }
    }

    #[must_use]
    pub fn csv_header(self) -> &'static [&'static str] {
        match self {
            Self::Periods => Period::csv_header(),
            Self::Classes => Class::csv_header(),
            Self::Activities => Activity::csv_header(),
            Self::Students => Student::csv_header(),
            Self::Runs => Run::csv_header(),
            Self::Solutions => Solution::csv_header(),
            Self::Errors => ErrorCount::csv_header(),
        }
    }
}
