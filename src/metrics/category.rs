use std::collections::HashSet;

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::error::EvalError;

/// A set of tokens or characters configured for one error category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset {
    members: HashSet<String>,
    chars: HashSet<char>,
}

impl Charset {
    /// Each character of `text` becomes a member.
    pub fn from_chars(text: &str) -> Self {
        Self::from_tokens(text.chars().map(String::from))
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: HashSet<String> = tokens.into_iter().map(Into::into).collect();
        let chars = members
            .iter()
            .filter_map(|member| {
                let mut it = member.chars();
                let c = it.next()?;
                it.next().is_none().then_some(c)
            })
            .collect();
        Self { members, chars }
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// True when every character of `token` is a single-character member.
    pub fn covers(&self, token: &str) -> bool {
        token.chars().all(|c| self.contains_char(c))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Token subset an error count is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category<'a> {
    /// No filtering: plain word errors.
    Word,
    CopyChars(&'a Charset),
    Uppercase,
    Digits,
    Punctuation(&'a Charset),
    Symbols(&'a Charset),
}

impl<'a> Category<'a> {
    /// Resolve a category by name. Unknown names fall back to [`Category::Word`].
    pub fn from_name(name: &str, charset: Option<&'a Charset>) -> Result<Self, EvalError> {
        let require = |charset: Option<&'a Charset>| {
            charset.ok_or_else(|| {
                EvalError::config(format!("category '{name}' requires a charset"))
            })
        };
        Ok(match name {
            "copy_chars" => Self::CopyChars(require(charset)?),
            "uppercase" => Self::Uppercase,
            "digits" => Self::Digits,
            "punctuation" => Self::Punctuation(require(charset)?),
            "symbols" => Self::Symbols(require(charset)?),
            _ => Self::Word,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::CopyChars(_) => "copy_chars",
            Self::Uppercase => "uppercase",
            Self::Digits => "digits",
            Self::Punctuation(_) => "punctuation",
            Self::Symbols(_) => "symbols",
        }
    }
}

/// Narrow both sequences to the tokens relevant to `category`, keeping
/// their order. Source and target are filtered independently, except that
/// copy-char target tokens must also appear in the filtered source.
pub fn filter_category<'t, S: AsRef<str>>(
    source: &'t [S],
    target: &'t [S],
    category: Category<'_>,
) -> (Vec<&'t str>, Vec<&'t str>) {
    let source = source.iter().map(AsRef::as_ref);
    let target = target.iter().map(AsRef::as_ref);

    match category {
        Category::Word => (source.collect(), target.collect()),
        Category::CopyChars(charset) => {
            let kept_source: Vec<&str> = source.filter(|token| charset.covers(token)).collect();
            let source_members: HashSet<&str> = kept_source.iter().copied().collect();
            let kept_target = target
                .filter(|token| charset.covers(token) && source_members.contains(token))
                .collect();
            (kept_source, kept_target)
        }
        Category::Uppercase => filter_both(source, target, has_uppercase),
        Category::Digits => filter_both(source, target, has_digit),
        Category::Punctuation(charset) | Category::Symbols(charset) => {
            filter_both(source, target, |token| charset.contains_token(token))
        }
    }
}

fn filter_both<'t>(
    source: impl Iterator<Item = &'t str>,
    target: impl Iterator<Item = &'t str>,
    keep: impl Fn(&str) -> bool,
) -> (Vec<&'t str>, Vec<&'t str>) {
    (
        source.filter(|token| keep(token)).collect(),
        target.filter(|token| keep(token)).collect(),
    )
}

fn has_uppercase(token: &str) -> bool {
    token.chars().any(char::is_uppercase)
}

/// Decimal digits of any script; fractions and letter numerals do not count.
fn has_digit(token: &str) -> bool {
    token
        .chars()
        .any(|c| c.general_category() == GeneralCategory::DecimalNumber)
}
