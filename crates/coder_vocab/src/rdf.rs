//! Terms of `<http://www.w3.org/1999/02/22-rdf-syntax-ns#>`.

use crate::VocabularyTable;

pub const RDF: VocabularyTable = VocabularyTable {
    name: "rdf",
    namespace: "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    base: 0x100,
    span: 0x100,
    entries: &[
        ("type", 0),
        ("Property", 1),
        ("Statement", 2),
        ("subject", 3),
        ("predicate", 4),
        ("object", 5),
        ("Bag", 6),
        ("Seq", 7),
        ("Alt", 8),
        ("value", 9),
        ("List", 10),
        ("nil", 11),
        ("first", 12),
        ("rest", 13),
        ("XMLLiteral", 14),
        ("HTML", 15),
        ("langString", 16),
        ("PlainLiteral", 17),
        ("JSON", 18),
        ("CompoundLiteral", 19),
        ("language", 20),
        ("direction", 21),
        ("dirLangString", 22),
    ],
};
