//! Vocabulary tables with statically reserved term ids.
//!
//! Every table owns the reserved id range `base..base + span`. A term's id is
//! `base + offset`. Tables are append-only: new terms get new offsets, existing
//! offsets and bases never change once released, because they are persisted
//! in triple data.

mod dcterms;
mod foaf;
mod owl;
mod rdf;
mod rdfs;
mod schema;
mod skos;
mod xsd;

pub use dcterms::DCTERMS;
pub use foaf::FOAF;
pub use owl::OWL;
pub use rdf::RDF;
pub use rdfs::RDFS;
pub use schema::SCHEMA;
pub use skos::SKOS;
pub use xsd::XSD;

#[derive(Debug, Clone, Copy)]
pub struct VocabularyTable {
    /// Short name, unique among registered vocabularies
    pub name: &'static str,
    /// Namespace IRI, prepended to every local name
    pub namespace: &'static str,
    /// First reserved id of this vocabulary
    pub base: u64,
    /// Number of reserved ids
    pub span: u64,
    /// `(local name, offset)` pairs
    pub entries: &'static [(&'static str, u32)],
}

impl VocabularyTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tables compiled into the binary, in registration order.
pub const BUILTIN: &[VocabularyTable] = &[RDF, RDFS, XSD, OWL, SKOS, FOAF, DCTERMS, SCHEMA];
