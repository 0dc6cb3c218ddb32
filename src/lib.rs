pub mod alignment;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod types;

pub use alignment::{
    backtrace, edit_distance, edit_operations, render_alignment, Alignment, DistanceMatrix,
};
pub use config::{CategoryConfig, CategorySets, EvalConfig};
pub use error::EvalError;
pub use metrics::{
    count_category_errors, count_word_errors, filter_category, sentence_error, Category, Charset,
    CorpusTally,
};
pub use pipeline::builder::EvaluatorBuilder;
pub use pipeline::corpus::{DroppedLines, LinePair};
pub use pipeline::runtime::{CorpusEvaluation, Evaluator, LineAlignment};
pub use pipeline::defaults::{LevenshteinAligner, WhitespaceTokenizer};
pub use pipeline::traits::{SequenceAligner, Tokenizer};
pub use report::{build_report, CharsetSummary, EvaluationReport, Meta, ReportContext};
pub use types::{EditOp, ErrorRate, ErrorTally, ErrorType};
