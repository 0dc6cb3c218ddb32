use serde::Serialize;

use crate::config::CategoryConfig;
use crate::error::EvalError;
use crate::pipeline::corpus::DroppedLines;
use crate::pipeline::runtime::{CorpusEvaluation, LineAlignment};
use crate::types::ErrorRate;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub schema_version: u32,
    pub meta: Meta,
    pub rates: Vec<ErrorRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charsets: Option<CharsetSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alignments: Vec<LineAlignment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub reference_path: String,
    pub hypothesis_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub line_pairs: u64,
    pub dropped_lines: DroppedLines,
}

/// The configured sets as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharsetSummary {
    pub copy_chars: String,
    pub punctuation: String,
    pub symbols: String,
}

impl CharsetSummary {
    pub fn from_config(config: &CategoryConfig) -> Self {
        Self {
            copy_chars: config.copy_chars.display(),
            punctuation: config.punctuation.display(),
            symbols: config.symbols.display(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub generated_at: String,
    pub reference_path: &'a str,
    pub hypothesis_path: &'a str,
    pub lang: Option<&'a str>,
    pub category_config: Option<&'a CategoryConfig>,
}

pub fn build_report(
    context: ReportContext<'_>,
    evaluation: &CorpusEvaluation,
    alignments: Vec<LineAlignment>,
) -> Result<EvaluationReport, EvalError> {
    let rates = evaluation.rates();
    for rate in &rates {
        checked_rate(rate)?;
    }

    Ok(EvaluationReport {
        schema_version: SCHEMA_VERSION,
        meta: Meta {
            generated_at: context.generated_at,
            reference_path: context.reference_path.to_string(),
            hypothesis_path: context.hypothesis_path.to_string(),
            lang: context.lang.map(str::to_string),
            line_pairs: evaluation.line_pairs(),
            dropped_lines: evaluation.dropped,
        },
        rates,
        charsets: context.category_config.map(CharsetSummary::from_config),
        alignments,
    })
}

fn checked_rate(rate: &ErrorRate) -> Result<(), EvalError> {
    if !rate.rate_percent.is_finite() || rate.rate_percent < 0.0 {
        return Err(EvalError::invalid_input(format!(
            "rate for '{}' is not a finite non-negative value: {}",
            rate.label, rate.rate_percent
        )));
    }
    Ok(())
}
