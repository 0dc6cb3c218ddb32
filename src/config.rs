use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::EvalError;
use crate::metrics::category::Charset;

/// Where to find the category configuration and which language section to
/// use from it.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub config_path: String,
    pub lang: String,
}

impl EvalConfig {
    pub const DEFAULT_CONFIG_PATH: &'static str = "config.json";
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            config_path: Self::DEFAULT_CONFIG_PATH.to_string(),
            lang: String::new(),
        }
    }
}

/// A charset entry as written in the configuration file: either one string
/// or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CharList {
    Text(String),
    List(Vec<String>),
}

impl CharList {
    /// Every character of a string is a member; list items are members as-is.
    fn to_char_charset(&self) -> Charset {
        match self {
            Self::Text(text) => Charset::from_chars(text),
            Self::List(items) => Charset::from_tokens(items),
        }
    }

    /// Whitespace-delimited members; list items are members as-is.
    fn to_token_charset(&self) -> Charset {
        match self {
            Self::Text(text) => Charset::from_tokens(text.split_whitespace()),
            Self::List(items) => Charset::from_tokens(items),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.concat(),
        }
    }
}

/// One language section of the category configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryConfig {
    pub copy_chars: CharList,
    pub punctuation: CharList,
    pub symbols: CharList,
}

impl CategoryConfig {
    pub fn load(path: &Path, lang: &str) -> Result<Self, EvalError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| EvalError::io("read category config", e))?;
        Self::from_json_str(&data, lang)
    }

    pub fn from_json_str(json: &str, lang: &str) -> Result<Self, EvalError> {
        let mut sections: BTreeMap<String, CategoryConfig> = serde_json::from_str(json)
            .map_err(|e| EvalError::json("parse category config", e))?;
        sections.remove(lang).ok_or_else(|| {
            let available = sections.keys().cloned().collect::<Vec<_>>().join(", ");
            EvalError::config(format!(
                "language '{lang}' not found in category config (available: {available})"
            ))
        })
    }

    pub fn category_sets(&self) -> CategorySets {
        CategorySets {
            copy_chars: self.copy_chars.to_char_charset(),
            punctuation: self.punctuation.to_char_charset(),
            symbols: self.symbols.to_token_charset(),
        }
    }
}

/// The three resolved sets consumed by the category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySets {
    pub copy_chars: Charset,
    pub punctuation: Charset,
    pub symbols: Charset,
}
