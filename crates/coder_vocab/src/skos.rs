//! Terms of `<http://www.w3.org/2004/02/skos/core#>`.

use crate::VocabularyTable;

pub const SKOS: VocabularyTable = VocabularyTable {
    name: "skos",
    namespace: "http://www.w3.org/2004/02/skos/core#",
    base: 0x600,
    span: 0x100,
    entries: &[
        ("Concept", 0),
        ("ConceptScheme", 1),
        ("Collection", 2),
        ("OrderedCollection", 3),
        ("altLabel", 4),
        ("broadMatch", 5),
        ("broader", 6),
        ("broaderTransitive", 7),
        ("changeNote", 8),
        ("closeMatch", 9),
        ("definition", 10),
        ("editorialNote", 11),
        ("exactMatch", 12),
        ("example", 13),
        ("hasTopConcept", 14),
        ("hiddenLabel", 15),
        ("historyNote", 16),
        ("inScheme", 17),
        ("mappingRelation", 18),
        ("member", 19),
        ("memberList", 20),
        ("narrowMatch", 21),
        ("narrower", 22),
        ("narrowerTransitive", 23),
        ("notation", 24),
        ("note", 25),
        ("prefLabel", 26),
        ("related", 27),
        ("relatedMatch", 28),
        ("scopeNote", 29),
        ("semanticRelation", 30),
        ("topConceptOf", 31),
    ],
};
