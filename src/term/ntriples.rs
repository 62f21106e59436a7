//! Parser for single terms in N-Triples syntax.

use std::str::{Chars, FromStr};

use thiserror::Error;

use super::{Term, XSD_STRING};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTermError {
    #[error("empty input")]
    Empty,
    #[error("unterminated {0}")]
    Unterminated(&'static str),
    #[error("invalid escape sequence \\{0}")]
    InvalidEscape(char),
    #[error("invalid unicode escape {0:?}")]
    InvalidCodepoint(String),
    #[error("unexpected trailing input {0:?}")]
    Trailing(String),
    #[error("unrecognized term {0:?}")]
    Unrecognized(String),
}

impl FromStr for Term {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseTermError::Empty);
        }
        if let Some(rest) = s.strip_prefix('<') {
            let (iri, tail) = parse_iri(rest)?;
            expect_end(tail)?;
            return Ok(Term::Iri(iri));
        }
        if let Some(label) = s.strip_prefix("_:") {
            return Ok(Term::BlankNode(label.to_owned()));
        }
        if let Some(rest) = s.strip_prefix('"') {
            let (lexical, tail) = parse_quoted(rest)?;
            if let Some(language) = tail.strip_prefix('@') {
                return Ok(Term::lang_string(lexical, language));
            }
            if let Some(datatype) = tail.strip_prefix("^^<") {
                let (datatype, tail) = parse_iri(datatype)?;
                expect_end(tail)?;
                // `^^rdf:langString` without a tag parses; validation rejects it
                return Ok(Term::literal(lexical, datatype));
            }
            expect_end(tail)?;
            return Ok(Term::literal(lexical, XSD_STRING));
        }
        Err(ParseTermError::Unrecognized(s.to_owned()))
    }
}

fn expect_end(tail: &str) -> Result<(), ParseTermError> {
    if tail.trim().is_empty() {
        Ok(())
    } else {
        Err(ParseTermError::Trailing(tail.to_owned()))
    }
}

/// Returns the IRI and the input after the closing `>`.
fn parse_iri(input: &str) -> Result<(String, &str), ParseTermError> {
    let mut iri = String::new();
    let mut chars = input.chars();
    loop {
        match chars.next() {
            Some('>') => return Ok((iri, chars.as_str())),
            Some('\\') => match chars.next() {
                Some('u') => iri.push(parse_codepoint(&mut chars, 4)?),
                Some('U') => iri.push(parse_codepoint(&mut chars, 8)?),
                Some(c) => return Err(ParseTermError::InvalidEscape(c)),
                None => return Err(ParseTermError::Unterminated("IRI")),
            },
            Some(c) => iri.push(c),
            None => return Err(ParseTermError::Unterminated("IRI")),
        }
    }
}

/// Returns the unescaped string and the input after the closing quote.
fn parse_quoted(input: &str) -> Result<(String, &str), ParseTermError> {
    let mut value = String::new();
    let mut chars = input.chars();
    loop {
        match chars.next() {
            Some('"') => return Ok((value, chars.as_str())),
            Some('\\') => {
                let c = match chars.next() {
                    Some('t') => '\t',
                    Some('b') => '\u{8}',
                    Some('n') => '\n',
                    Some('r') => '\r',
                    Some('f') => '\u{c}',
                    Some('"') => '"',
                    Some('\'') => '\'',
                    Some('\\') => '\\',
                    Some('u') => parse_codepoint(&mut chars, 4)?,
                    Some('U') => parse_codepoint(&mut chars, 8)?,
                    Some(c) => return Err(ParseTermError::InvalidEscape(c)),
                    None => return Err(ParseTermError::Unterminated("literal")),
                };
                value.push(c);
            }
            Some(c) => value.push(c),
            None => return Err(ParseTermError::Unterminated("literal")),
        }
    }
}

fn parse_codepoint(chars: &mut Chars<'_>, digits: usize) -> Result<char, ParseTermError> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits {
        return Err(ParseTermError::InvalidCodepoint(hex));
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(ParseTermError::InvalidCodepoint(hex))
}
