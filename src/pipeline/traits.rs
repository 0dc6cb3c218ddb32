use crate::types::EditOp;

/// Splits one line of a corpus into word tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, line: &str) -> Vec<String>;
}

/// Produces the edit script that turns `source` into `target`, in forward
/// order. Every source token is consumed by exactly one `Equal`,
/// `Substitute` or `Delete`, every target token by one `Equal`,
/// `Substitute` or `Insert`.
pub trait SequenceAligner: Send + Sync {
    fn align(&self, source: &[&str], target: &[&str]) -> Vec<EditOp>;
}
