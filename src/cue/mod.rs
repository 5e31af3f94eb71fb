//! Minimal CUE-language evaluation
//!
//! Compiles the data subset of CUE (nested struct literals with scalar
//! leaves, `//` comments, newline- or comma-separated fields) into a
//! [`CueValue`] tree, from which scalars are extracted by dotted path.
//! There is no registry crate for CUE, so the grammar lives in `cue.pest`
//! and is compiled with pest.

use pest::Parser;
use pest_derive::Parser;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "cue/cue.pest"]
struct CueParser;

/// An evaluated CUE value.
#[derive(Debug, Clone, PartialEq)]
pub enum CueValue {
    Struct(BTreeMap<String, CueValue>),
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

#[derive(Debug, Error)]
pub enum CueError {
    #[error("CUE syntax error: {0}")]
    Syntax(Box<pest::error::Error<Rule>>),

    #[error("integer literal out of range: {0}")]
    IntOutOfRange(String),
}

/// Compile a CUE document into its evaluated value tree.
///
/// Duplicate fields in a struct overwrite earlier ones; full CUE
/// unification is not implemented.
pub fn compile(input: &str) -> Result<CueValue, CueError> {
    let mut pairs = CueParser::parse(Rule::document, input)
        .map_err(|e| CueError::Syntax(Box::new(e)))?;

    let document = pairs.next().expect("grammar yields one document");
    build_struct(document.into_inner())
}

fn build_struct(pairs: pest::iterators::Pairs<'_, Rule>) -> Result<CueValue, CueError> {
    let mut fields = BTreeMap::new();
    for pair in pairs {
        match pair.as_rule() {
            Rule::field => {
                let mut inner = pair.into_inner();
                let key = inner.next().expect("field has a key").as_str().to_string();
                let value = inner.next().expect("field has a value");
                fields.insert(key, build_value(value)?);
            }
            Rule::EOI => {}
            other => unreachable!("unexpected rule in struct body: {:?}", other),
        }
    }
    Ok(CueValue::Struct(fields))
}

fn build_value(pair: pest::iterators::Pair<'_, Rule>) -> Result<CueValue, CueError> {
    match pair.as_rule() {
        Rule::struct_lit => build_struct(pair.into_inner()),
        Rule::string => {
            let inner = pair.into_inner().next().expect("string has inner");
            Ok(CueValue::String(unescape(inner.as_str())))
        }
        Rule::integer => {
            let text = pair.as_str();
            text.parse::<i64>()
                .map(CueValue::Int)
                .map_err(|_| CueError::IntOutOfRange(text.to_string()))
        }
        Rule::float => {
            // Grammar guarantees digits.digits, which always parses.
            Ok(CueValue::Float(pair.as_str().parse().expect("valid float literal")))
        }
        Rule::boolean => Ok(CueValue::Bool(pair.as_str() == "true")),
        Rule::null => Ok(CueValue::Null),
        other => unreachable!("unexpected value rule: {:?}", other),
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    // Surrogate code points have no char representation.
                    None => tracing::warn!("dropping invalid unicode escape \\u{}", hex),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

impl CueValue {
    /// Resolve a dotted path like `config.database.host` against this value.
    pub fn lookup(&self, path: &str) -> Option<&CueValue> {
        let mut current = self;
        for segment in path.split('.') {
            match current {
                CueValue::Struct(fields) => current = fields.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CueValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CueValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}
