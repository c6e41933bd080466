//! Reserved words, operator lexemes and delimiter characters.
//!
//! The scanner treats these as data. The built-in table targets Python
//! source; a different table can be loaded from JSON:
//!
//! ```json
//! { "keywords": ["let"], "operators": ["=", "=="], "delimiters": ["(", ")"] }
//! ```
//!
//! Any field left out keeps its built-in Python value.

use std::collections::{BTreeSet, HashSet};
use std::ops::Bound;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::error::LexiconError;

pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

pub const PYTHON_OPERATORS: &[&str] = &[
    "**=", "//=", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "**", "//", "+", "-", "*",
    "/", "%", "=", "<", ">",
];

pub const PYTHON_DELIMITERS: &[char] = &['(', ')', '[', ']', '{', '}', ',', ':', '.', ';'];

static PYTHON: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    keywords: PYTHON_KEYWORDS.iter().map(|s| s.to_string()).collect(),
    operators: PYTHON_OPERATORS.iter().map(|s| s.to_string()).collect(),
    delimiters: PYTHON_DELIMITERS.iter().copied().collect(),
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    keywords: HashSet<String>,
    // Ordered so that every operator sharing a prefix sits in one contiguous run.
    operators: BTreeSet<String>,
    delimiters: HashSet<char>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    keywords: Option<Vec<String>>,
    operators: Option<Vec<String>>,
    delimiters: Option<Vec<String>>,
}

impl Lexicon {
    /// Build a lexicon, rejecting empty operators.
    pub fn new<K, O, D>(keywords: K, operators: O, delimiters: D) -> Result<Self, LexiconError>
    where
        K: IntoIterator,
        K::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        D: IntoIterator<Item = char>,
    {
        let operators: BTreeSet<String> = operators.into_iter().map(Into::into).collect();
        if operators.contains("") {
            return Err(LexiconError::EmptyOperator);
        }
        Ok(Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            operators,
            delimiters: delimiters.into_iter().collect(),
        })
    }

    /// The built-in Python table.
    pub fn python() -> &'static Lexicon {
        &PYTHON
    }

    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        let base = Self::python();

        let delimiters = match file.delimiters {
            Some(list) => list
                .into_iter()
                .map(|d| single_char(&d).ok_or(LexiconError::InvalidDelimiter(d)))
                .collect::<Result<HashSet<char>, _>>()?,
            None => base.delimiters.clone(),
        };
        let keywords = file.keywords.map_or_else(
            || base.keywords.clone(),
            |list| list.into_iter().collect(),
        );
        let operators = file
            .operators
            .unwrap_or_else(|| base.operators.iter().cloned().collect());

        Self::new(keywords, operators, delimiters)
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_operator(&self, lexeme: &str) -> bool {
        self.operators.contains(lexeme)
    }

    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }

    /// True if at least one operator starts with `prefix`.
    pub fn is_operator_prefix(&self, prefix: &str) -> bool {
        self.operators
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|op| op.starts_with(prefix))
    }

    /// Longest operator at the start of `rest`.
    ///
    /// The candidate grows one character at a time while it still prefixes
    /// some operator; the last candidate that was itself an operator wins.
    pub fn longest_operator<'s>(&self, rest: &'s str) -> Option<&'s str> {
        let mut longest = None;
        for (i, ch) in rest.char_indices() {
            let candidate = &rest[..i + ch.len_utf8()];
            if !self.is_operator_prefix(candidate) {
                break;
            }
            if self.is_operator(candidate) {
                longest = Some(candidate);
            }
        }
        longest
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::python().clone()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
