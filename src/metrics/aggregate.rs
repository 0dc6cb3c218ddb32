use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::config::CategorySets;
use crate::metrics::category::Category;
use crate::metrics::counter::{count_category_errors_with, count_word_errors_with, sentence_error};
use crate::pipeline::traits::SequenceAligner;
use crate::types::{ErrorRate, ErrorTally, ErrorType};

/// Running totals for every report row over a corpus pass.
///
/// The tally is a plain value: the corpus loop owns it and threads it
/// through `Evaluator::accumulate` one line pair at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusTally {
    pub sentence: ErrorTally,
    pub word: ErrorTally,
    pub copy_word: ErrorTally,
    pub uppercase_word: ErrorTally,
    pub digit: ErrorTally,
    pub punctuation: ErrorTally,
    pub symbol: ErrorTally,
}

impl CorpusTally {
    pub fn get(&self, error_type: ErrorType) -> ErrorTally {
        match error_type {
            ErrorType::Sentence => self.sentence,
            ErrorType::Word => self.word,
            ErrorType::CopyWord => self.copy_word,
            ErrorType::UppercaseWord => self.uppercase_word,
            ErrorType::Digit => self.digit,
            ErrorType::Punctuation => self.punctuation,
            ErrorType::Symbol => self.symbol,
        }
    }

    /// Number of line pairs folded in so far.
    pub fn line_pairs(&self) -> u64 {
        self.sentence.total
    }

    /// Rate records in report order.
    pub fn rates(&self) -> Vec<ErrorRate> {
        ErrorType::ALL
            .iter()
            .map(|&error_type| ErrorRate::from_tally(error_type, self.get(error_type)))
            .collect()
    }
}

impl Add for CorpusTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            sentence: self.sentence + rhs.sentence,
            word: self.word + rhs.word,
            copy_word: self.copy_word + rhs.copy_word,
            uppercase_word: self.uppercase_word + rhs.uppercase_word,
            digit: self.digit + rhs.digit,
            punctuation: self.punctuation + rhs.punctuation,
            symbol: self.symbol + rhs.symbol,
        }
    }
}

impl AddAssign for CorpusTally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Counts for a single line pair, given its raw lines and their tokens.
pub fn line_pair_tally<S: AsRef<str>>(
    reference: &str,
    hypothesis: &str,
    reference_tokens: &[S],
    hypothesis_tokens: &[S],
    sets: &CategorySets,
    aligner: &dyn SequenceAligner,
) -> CorpusTally {
    let count = |category: Category<'_>| {
        count_category_errors_with(aligner, reference_tokens, hypothesis_tokens, category)
    };

    CorpusTally {
        sentence: ErrorTally::new(sentence_error(reference, hypothesis), 1),
        word: count_word_errors_with(aligner, reference_tokens, hypothesis_tokens),
        copy_word: count(Category::CopyChars(&sets.copy_chars)),
        uppercase_word: count(Category::Uppercase),
        digit: count(Category::Digits),
        punctuation: count(Category::Punctuation(&sets.punctuation)),
        symbol: count(Category::Symbols(&sets.symbols)),
    }
}
