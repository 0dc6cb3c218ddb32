use crate::alignment::backtrace::edit_operations;
use crate::pipeline::traits::{SequenceAligner, Tokenizer};
use crate::types::EditOp;

/// Splits on Unicode whitespace, dropping empty tokens.
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }
}

/// Minimum-cost word alignment read back from the Levenshtein table.
pub struct LevenshteinAligner;

impl SequenceAligner for LevenshteinAligner {
    fn align(&self, source: &[&str], target: &[&str]) -> Vec<EditOp> {
        edit_operations(source, target)
    }
}
