use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::alignment::render::{render_operations, Alignment};
use crate::config::{CategoryConfig, CategorySets};
use crate::error::EvalError;
use crate::metrics::aggregate::{line_pair_tally, CorpusTally};
use crate::pipeline::corpus::{DroppedLines, LinePair, LinePairs};
use crate::pipeline::traits::{SequenceAligner, Tokenizer};
use crate::types::ErrorRate;

/// Result of one pass over a reference/hypothesis corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusEvaluation {
    pub tally: CorpusTally,
    pub dropped: DroppedLines,
}

impl CorpusEvaluation {
    pub fn rates(&self) -> Vec<ErrorRate> {
        self.tally.rates()
    }

    pub fn line_pairs(&self) -> u64 {
        self.tally.line_pairs()
    }
}

/// Rendered alignment of one mismatched line pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineAlignment {
    pub line_number: u64,
    pub alignment: Alignment,
}

pub struct Evaluator {
    category_sets: CategorySets,
    category_config: Option<CategoryConfig>,
    tokenizer: Box<dyn Tokenizer>,
    aligner: Box<dyn SequenceAligner>,
}

pub(crate) struct EvaluatorParts {
    pub category_sets: CategorySets,
    pub category_config: Option<CategoryConfig>,
    pub tokenizer: Box<dyn Tokenizer>,
    pub aligner: Box<dyn SequenceAligner>,
}

impl Evaluator {
    pub(crate) fn from_parts(parts: EvaluatorParts) -> Self {
        Self {
            category_sets: parts.category_sets,
            category_config: parts.category_config,
            tokenizer: parts.tokenizer,
            aligner: parts.aligner,
        }
    }

    pub fn category_sets(&self) -> &CategorySets {
        &self.category_sets
    }

    /// The configuration section the sets were loaded from, if any.
    pub fn category_config(&self) -> Option<&CategoryConfig> {
        self.category_config.as_ref()
    }

    /// Fold one line pair into `tally` and return the updated tally.
    pub fn accumulate(&self, tally: CorpusTally, reference: &str, hypothesis: &str) -> CorpusTally {
        tally + self.line_pair_tally(reference, hypothesis)
    }

    fn line_pair_tally(&self, reference: &str, hypothesis: &str) -> CorpusTally {
        let reference_tokens = self.tokenizer.tokenize(reference);
        let hypothesis_tokens = self.tokenizer.tokenize(hypothesis);
        line_pair_tally(
            reference,
            hypothesis,
            &reference_tokens,
            &hypothesis_tokens,
            &self.category_sets,
            self.aligner.as_ref(),
        )
    }

    pub fn evaluate_readers<R: BufRead, H: BufRead>(
        &self,
        reference: R,
        hypothesis: H,
        mut on_pair: impl FnMut(&LinePair),
    ) -> Result<CorpusEvaluation, EvalError> {
        let mut pairs = LinePairs::new(reference, hypothesis);
        let mut tally = CorpusTally::default();

        for pair in pairs.by_ref() {
            let pair = pair?;
            let pair_tally = self.line_pair_tally(&pair.reference, &pair.hypothesis);
            tracing::debug!(
                line = pair.line_number,
                word_errors = pair_tally.word.errors,
                words = pair_tally.word.total,
                "evaluated line pair"
            );
            tally += pair_tally;
            on_pair(&pair);
        }

        let dropped = pairs.dropped();
        if !dropped.is_empty() {
            tracing::warn!(
                dropped_reference_lines = dropped.reference,
                dropped_hypothesis_lines = dropped.hypothesis,
                "reference and hypothesis differ in length; unpaired lines were not evaluated"
            );
        }
        tracing::info!(
            line_pairs = tally.line_pairs(),
            sentence_errors = tally.sentence.errors,
            word_errors = tally.word.errors,
            "corpus evaluation finished"
        );

        Ok(CorpusEvaluation { tally, dropped })
    }

    pub fn evaluate_files(
        &self,
        reference: &Path,
        hypothesis: &Path,
    ) -> Result<CorpusEvaluation, EvalError> {
        self.evaluate_files_with_progress(reference, hypothesis, |_| {})
    }

    /// Like [`Evaluator::evaluate_files`], calling `on_pair` after every
    /// evaluated line pair.
    pub fn evaluate_files_with_progress(
        &self,
        reference: &Path,
        hypothesis: &Path,
        on_pair: impl FnMut(&LinePair),
    ) -> Result<CorpusEvaluation, EvalError> {
        let reference = open_reader(reference, "open reference file")?;
        let hypothesis = open_reader(hypothesis, "open hypothesis file")?;
        self.evaluate_readers(reference, hypothesis, on_pair)
    }

    /// Alignment of a line pair, or `None` when both tokenize identically.
    pub fn align_line_pair(&self, reference: &str, hypothesis: &str) -> Option<Alignment> {
        let reference_tokens = self.tokenizer.tokenize(reference);
        let hypothesis_tokens = self.tokenizer.tokenize(hypothesis);
        if reference_tokens == hypothesis_tokens {
            return None;
        }
        let source: Vec<&str> = reference_tokens.iter().map(String::as_str).collect();
        let target: Vec<&str> = hypothesis_tokens.iter().map(String::as_str).collect();
        let ops = self.aligner.align(&source, &target);
        Some(render_operations(&source, &target, &ops))
    }

    pub fn alignments_from_readers<R: BufRead, H: BufRead>(
        &self,
        reference: R,
        hypothesis: H,
    ) -> Result<Vec<LineAlignment>, EvalError> {
        let mut alignments = Vec::new();
        for pair in LinePairs::new(reference, hypothesis) {
            let pair = pair?;
            if let Some(alignment) = self.align_line_pair(&pair.reference, &pair.hypothesis) {
                alignments.push(LineAlignment {
                    line_number: pair.line_number,
                    alignment,
                });
            }
        }
        Ok(alignments)
    }

    pub fn alignments_from_files(
        &self,
        reference: &Path,
        hypothesis: &Path,
    ) -> Result<Vec<LineAlignment>, EvalError> {
        let reference = open_reader(reference, "open reference file")?;
        let hypothesis = open_reader(hypothesis, "open hypothesis file")?;
        self.alignments_from_readers(reference, hypothesis)
    }
}

fn open_reader(path: &Path, context: &'static str) -> Result<BufReader<File>, EvalError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| EvalError::io(context, e))
}
