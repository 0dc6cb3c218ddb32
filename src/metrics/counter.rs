use crate::metrics::category::{filter_category, Category};
use crate::pipeline::defaults::LevenshteinAligner;
use crate::pipeline::traits::SequenceAligner;
use crate::types::ErrorTally;

/// 1 when the trimmed lines differ character for character, else 0.
pub fn sentence_error(reference: &str, hypothesis: &str) -> u64 {
    u64::from(reference.trim() != hypothesis.trim())
}

/// Count non-equal edit operations between two token sequences.
///
/// The total is always the source length, so the ratio is a word error rate
/// relative to the reference.
pub fn count_word_errors<S: AsRef<str>>(source: &[S], target: &[S]) -> ErrorTally {
    count_word_errors_with(&LevenshteinAligner, source, target)
}

/// [`count_word_errors`] with the edit script produced by `aligner`.
pub fn count_word_errors_with<S: AsRef<str>>(
    aligner: &dyn SequenceAligner,
    source: &[S],
    target: &[S],
) -> ErrorTally {
    let source: Vec<&str> = source.iter().map(AsRef::as_ref).collect();
    let target: Vec<&str> = target.iter().map(AsRef::as_ref).collect();
    let errors = aligner
        .align(&source, &target)
        .into_iter()
        .filter(|op| op.is_error())
        .count();
    ErrorTally::new(errors as u64, source.len() as u64)
}

/// Word errors restricted to the tokens of one category.
pub fn count_category_errors<S: AsRef<str>>(
    source: &[S],
    target: &[S],
    category: Category<'_>,
) -> ErrorTally {
    count_category_errors_with(&LevenshteinAligner, source, target, category)
}

pub fn count_category_errors_with<S: AsRef<str>>(
    aligner: &dyn SequenceAligner,
    source: &[S],
    target: &[S],
    category: Category<'_>,
) -> ErrorTally {
    let (source, target) = filter_category(source, target, category);
    count_word_errors_with(aligner, &source, &target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::category::Charset;
    use crate::types::EditOp;

    /// Treats every column as a substitution.
    struct SubstituteAll;

    impl SequenceAligner for SubstituteAll {
        fn align(&self, source: &[&str], target: &[&str]) -> Vec<EditOp> {
            vec![EditOp::Substitute; source.len().max(target.len())]
        }
    }

    fn words(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn sentence_error_ignores_surrounding_whitespace() {
        assert_eq!(sentence_error("the cat sat", "the cat sat"), 0);
        assert_eq!(sentence_error("  the cat sat\n", "the cat sat"), 0);
        assert_eq!(sentence_error("the cat sat", "the  cat sat"), 1);
        assert_eq!(sentence_error("The cat", "the cat"), 1);
    }

    #[test]
    fn identical_lines_have_no_word_errors() {
        let tokens = words("the cat sat");
        assert_eq!(count_word_errors(&tokens, &tokens), ErrorTally::new(0, 3));
    }

    #[test]
    fn substitution_counts_once() {
        let (source, target) = (words("I have 3 cats"), words("I have 3 dogs"));
        assert_eq!(count_word_errors(&source, &target), ErrorTally::new(1, 4));
        assert_eq!(
            count_category_errors(&source, &target, Category::Digits),
            ErrorTally::new(0, 1)
        );
    }

    #[test]
    fn deletion_counts_against_source_length() {
        let (source, target) = (words("A B C"), words("A B"));
        assert_eq!(count_word_errors(&source, &target), ErrorTally::new(1, 3));
    }

    #[test]
    fn denominator_is_source_length_not_target() {
        let (source, target) = (words("a"), words("a b c d"));
        assert_eq!(count_word_errors(&source, &target), ErrorTally::new(3, 1));
        assert_eq!(count_word_errors(&target, &source), ErrorTally::new(3, 4));
    }

    #[test]
    fn empty_source_counts_inserts_with_zero_total() {
        let empty: Vec<&str> = Vec::new();
        let target = words("hello world");
        let tally = count_word_errors(&empty, &target);
        assert_eq!(tally, ErrorTally::new(2, 0));
        assert_eq!(tally.rate_percent(), 0.0);
    }

    #[test]
    fn punctuation_errors_use_filtered_sequences() {
        let punctuation = Charset::from_chars(".,?");
        let (source, target) = (words("Hello , world ."), words("Hello world ?"));
        assert_eq!(
            count_category_errors(&source, &target, Category::Punctuation(&punctuation)),
            // [",", "."] vs ["?"]: one substitution and one deletion
            ErrorTally::new(2, 2)
        );
    }

    #[test]
    fn word_category_matches_plain_count() {
        let (source, target) = (words("a b c d"), words("a x c"));
        assert_eq!(
            count_category_errors(&source, &target, Category::Word),
            count_word_errors(&source, &target)
        );
    }

    #[test]
    fn custom_aligner_drives_the_error_count() {
        let tokens = words("the cat sat");
        assert_eq!(
            count_word_errors_with(&SubstituteAll, &tokens, &tokens),
            ErrorTally::new(3, 3)
        );
    }

    #[test]
    fn custom_aligner_sees_filtered_category_tokens() {
        let (source, target) = (words("I have 3 cats"), words("I have 3 dogs"));
        assert_eq!(
            count_category_errors_with(&SubstituteAll, &source, &target, Category::Digits),
            ErrorTally::new(1, 1)
        );
    }
}
