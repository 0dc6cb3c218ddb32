use std::path::Path;

use crate::config::{CategoryConfig, CategorySets, EvalConfig};
use crate::error::EvalError;
use crate::pipeline::defaults::{LevenshteinAligner, WhitespaceTokenizer};
use crate::pipeline::runtime::{Evaluator, EvaluatorParts};
use crate::pipeline::traits::{SequenceAligner, Tokenizer};

pub struct EvaluatorBuilder {
    config: EvalConfig,
    category_sets: Option<CategorySets>,
    tokenizer: Option<Box<dyn Tokenizer>>,
    aligner: Option<Box<dyn SequenceAligner>>,
}

impl EvaluatorBuilder {
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            category_sets: None,
            tokenizer: None,
            aligner: None,
        }
    }

    /// Use these sets instead of loading the configuration file.
    pub fn with_category_sets(mut self, category_sets: CategorySets) -> Self {
        self.category_sets = Some(category_sets);
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Replace the Levenshtein aligner used for error counts and rendering.
    pub fn with_sequence_aligner(mut self, aligner: Box<dyn SequenceAligner>) -> Self {
        self.aligner = Some(aligner);
        self
    }

    pub fn build(self) -> Result<Evaluator, EvalError> {
        let (category_sets, category_config) = match self.category_sets {
            Some(sets) => (sets, None),
            None => {
                let config =
                    CategoryConfig::load(Path::new(&self.config.config_path), &self.config.lang)?;
                tracing::debug!(
                    config_path = %self.config.config_path,
                    lang = %self.config.lang,
                    "loaded category config"
                );
                (config.category_sets(), Some(config))
            }
        };

        Ok(Evaluator::from_parts(EvaluatorParts {
            category_sets,
            category_config,
            tokenizer: self
                .tokenizer
                .unwrap_or_else(|| Box::new(WhitespaceTokenizer)),
            aligner: self
                .aligner
                .unwrap_or_else(|| Box::new(LevenshteinAligner)),
        }))
    }
}
