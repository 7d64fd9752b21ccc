use super::{CodeTokens, Metrics, define_record};

/// Metrics of the reference solution written by an instructor for an exercise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    /// Exercise code.
    pub code: u64,
    pub metrics: Option<Metrics>,
    pub tokens: Option<CodeTokens>,
}

impl Solution {
    #[must_use]
    pub const fn new(code: u64) -> Self {
        Self {
            code,
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
    Solution as solution in "solucoes.csv" {
        codigo: solution.code,
    }
    embeds {
        Metrics: solution.metrics_or_unset(),
        CodeTokens: solution.tokens_or_unset(),
    }
}
