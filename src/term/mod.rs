mod id;
mod ntriples;

use std::fmt::{Display, Write};

use minicbor::{Decode, Encode};

use crate::error::{CoderError, Result};

pub use id::TermId;
pub use ntriples::ParseTermError;

pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// An RDF term. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Encode, Decode)]
pub enum Term {
    #[n(0)]
    Iri(#[n(0)] String),
    #[n(1)]
    Literal(#[n(0)] Literal),
    #[n(2)]
    BlankNode(#[n(0)] String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Encode, Decode)]
pub struct Literal {
    #[n(0)]
    lexical: String,
    #[n(1)]
    datatype: String,
    #[n(2)]
    language: Option<String>,
}

impl Literal {
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn validate(&self) -> Result<()> {
        validate_iri(&self.datatype)?;
        match (&self.language, self.datatype == RDF_LANG_STRING) {
            (Some(tag), true) => validate_language_tag(tag),
            (Some(tag), false) => Err(CoderError::malformed(format!(
                "language tag @{tag} requires datatype <{RDF_LANG_STRING}>, found <{}>",
                self.datatype
            ))),
            (None, true) => Err(CoderError::malformed(
                "rdf:langString literal without a language tag",
            )),
            (None, false) => Ok(()),
        }
    }
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Term {
        Term::Iri(iri.into())
    }

    pub fn blank_node(label: impl Into<String>) -> Term {
        Term::BlankNode(label.into())
    }

    /// Blank node with a process-unique, time ordered label.
    pub fn fresh_blank_node() -> Term {
        Term::BlankNode(format!("b{}", uuid::Uuid::now_v7().as_simple()))
    }

    pub fn literal(lexical: impl Into<String>, datatype: impl Into<String>) -> Term {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        })
    }

    /// Plain `xsd:string` literal.
    pub fn string(lexical: impl Into<String>) -> Term {
        Term::literal(lexical, XSD_STRING)
    }

    /// `rdf:langString` literal. The tag is lower-cased so that
    /// `"chat"@EN` and `"chat"@en` are the same term.
    pub fn lang_string(lexical: impl Into<String>, language: &str) -> Term {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: RDF_LANG_STRING.to_owned(),
            language: Some(language.to_ascii_lowercase()),
        })
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// IRIs and blank nodes may appear in subject and context position.
    pub fn is_resource(&self) -> bool {
        self.is_iri() || self.is_blank_node()
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Term::Iri(iri) => validate_iri(iri),
            Term::Literal(literal) => literal.validate(),
            Term::BlankNode(label) => validate_blank_node_label(label),
        }
    }

    pub(crate) fn to_bytes(&self) -> Result<Vec<u8>> {
        minicbor::to_vec(self).map_err(|e| CoderError::malformed(e.to_string()))
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Term, minicbor::decode::Error> {
        minicbor::decode(bytes)
    }
}

fn validate_iri(iri: &str) -> Result<()> {
    if let Some(c) = iri
        .chars()
        .find(|c| c.is_control() || matches!(c, ' ' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\'))
    {
        return Err(CoderError::malformed(format!(
            "IRI <{iri}> contains forbidden character {c:?}"
        )));
    }
    let Some((scheme, _)) = iri.split_once(':') else {
        return Err(CoderError::malformed(format!("IRI <{iri}> is not absolute")));
    };
    let mut chars = scheme.chars();
    let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return Err(CoderError::malformed(format!(
            "IRI <{iri}> has an invalid scheme"
        )));
    }
    Ok(())
}

fn validate_language_tag(tag: &str) -> Result<()> {
    let mut subtags = tag.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic()));
    if primary_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        Ok(())
    } else {
        Err(CoderError::malformed(format!("invalid language tag @{tag}")))
    }
}

fn validate_blank_node_label(label: &str) -> Result<()> {
    let mut chars = label.chars();
    let valid = chars.next().is_some_and(|c| c.is_alphanumeric() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !label.ends_with('.');
    if valid {
        Ok(())
    } else {
        Err(CoderError::malformed(format!(
            "invalid blank node label _:{label}"
        )))
    }
}

/// N-Triples syntax.
impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(label) => write!(f, "_:{label}"),
            Term::Literal(literal) => {
                f.write_char('"')?;
                for c in literal.lexical.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        c => f.write_char(c)?,
                    }
                }
                f.write_char('"')?;
                match &literal.language {
                    Some(language) => write!(f, "@{language}"),
                    None if literal.datatype == XSD_STRING => Ok(()),
                    None => write!(f, "^^<{}>", literal.datatype),
                }
            }
        }
    }
}

/// A statement, optionally in a named graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    pub context: Option<Term>,
}

impl Quad {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Quad {
        Quad {
            subject,
            predicate,
            object,
            context: None,
        }
    }

    pub fn in_context(self, context: Term) -> Quad {
        Quad {
            context: Some(context),
            ..self
        }
    }

    /// Checks that every term fits its position.
    pub fn validate(&self) -> Result<()> {
        if !self.subject.is_resource() {
            return Err(CoderError::malformed(format!(
                "subject {} must be an IRI or a blank node",
                self.subject
            )));
        }
        if !self.predicate.is_iri() {
            return Err(CoderError::malformed(format!(
                "predicate {} must be an IRI",
                self.predicate
            )));
        }
        if let Some(context) = &self.context {
            if !context.is_resource() {
                return Err(CoderError::malformed(format!(
                    "context {context} must be an IRI or a blank node"
                )));
            }
        }
        Ok(())
    }
}

/// Storage form of a [`Quad`]. The default graph is [`TermId::DEFAULT_CONTEXT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedQuad {
    pub subject: TermId,
    pub predicate: TermId,
    pub object: TermId,
    pub context: TermId,
}

#[cfg(test)]
mod tests {
    use super::{Quad, RDF_LANG_STRING, Term, XSD_STRING};
    use crate::error::CoderError;

    #[test]
    fn structural_equality() {
        assert_eq!(Term::iri("http://example.org/a"), Term::iri("http://example.org/a"));
        assert_ne!(Term::iri("http://example.org/a"), Term::blank_node("a"));
        assert_eq!(Term::lang_string("chat", "EN"), Term::lang_string("chat", "en"));
        assert_ne!(Term::string("1"), Term::literal("1", "http://www.w3.org/2001/XMLSchema#integer"));
    }

    #[test]
    fn valid_terms() {
        for term in [
            Term::iri("http://schema.org/name"),
            Term::iri("urn:datafabric:org:1"),
            Term::blank_node("b0"),
            Term::blank_node("node_1.x-y"),
            Term::string("hello"),
            Term::lang_string("hello", "en-GB"),
            Term::literal("42", "http://www.w3.org/2001/XMLSchema#integer"),
            Term::fresh_blank_node(),
        ] {
            assert!(term.validate().is_ok(), "{term}");
        }
    }

    #[test]
    fn malformed_terms() {
        for term in [
            Term::iri(""),
            Term::iri("relative/path"),
            Term::iri("http://example.org/a b"),
            Term::iri("http://example.org/<a>"),
            Term::iri("1http://example.org/"),
            Term::blank_node(""),
            Term::blank_node("a."),
            Term::blank_node("-a"),
            Term::literal("x", RDF_LANG_STRING),
            Term::lang_string("x", "not a tag"),
            Term::lang_string("x", "toolongprimary"),
            Term::literal("x", "not an iri"),
        ] {
            assert!(
                matches!(term.validate(), Err(CoderError::MalformedTerm(_))),
                "{term:?}"
            );
        }
    }

    #[test]
    fn language_tag_requires_lang_string() {
        let term = Term::Literal(super::Literal {
            lexical: "x".into(),
            datatype: XSD_STRING.into(),
            language: Some("en".into()),
        });
        assert!(matches!(term.validate(), Err(CoderError::MalformedTerm(_))));
    }

    #[test]
    fn display_ntriples() {
        assert_eq!("<http://example.org/a>", Term::iri("http://example.org/a").to_string());
        assert_eq!("_:b1", Term::blank_node("b1").to_string());
        assert_eq!(r#""say \"hi\"\n""#, Term::string("say \"hi\"\n").to_string());
        assert_eq!(r#""chat"@fr"#, Term::lang_string("chat", "FR").to_string());
        assert_eq!(
            r#""1"^^<http://www.w3.org/2001/XMLSchema#integer>"#,
            Term::literal("1", "http://www.w3.org/2001/XMLSchema#integer").to_string()
        );
    }

    #[test]
    fn bytes_are_stable_per_term() -> anyhow::Result<()> {
        let term = Term::lang_string("Grüße", "de");
        let bytes = term.to_bytes()?;
        assert_eq!(bytes, term.clone().to_bytes()?);
        assert_eq!(term, Term::from_bytes(&bytes)?);
        assert_ne!(bytes, Term::string("Grüße").to_bytes()?);
        Ok(())
    }

    #[test]
    fn quad_positions() {
        let s = Term::iri("http://example.org/s");
        let p = Term::iri("http://example.org/p");
        let o = Term::string("o");
        assert!(Quad::new(s.clone(), p.clone(), o.clone()).validate().is_ok());
        assert!(Quad::new(o.clone(), p.clone(), s.clone()).validate().is_err());
        assert!(Quad::new(s.clone(), Term::blank_node("p"), o.clone()).validate().is_err());
        assert!(Quad::new(s, p, o.clone()).in_context(o).validate().is_err());
    }
}
