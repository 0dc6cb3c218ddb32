pub mod aggregate;
pub mod category;
pub mod counter;

pub use aggregate::CorpusTally;
pub use category::{filter_category, Category, Charset};
pub use counter::{
    count_category_errors, count_category_errors_with, count_word_errors, count_word_errors_with,
    sentence_error,
};
