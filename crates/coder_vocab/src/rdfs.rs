//! Terms of `<http://www.w3.org/2000/01/rdf-schema#>`.

use crate::VocabularyTable;

pub const RDFS: VocabularyTable = VocabularyTable {
    name: "rdfs",
    namespace: "http://www.w3.org/2000/01/rdf-schema#",
    base: 0x200,
    span: 0x100,
    entries: &[
        ("Resource", 0),
        ("Class", 1),
        ("subClassOf", 2),
        ("subPropertyOf", 3),
        ("comment", 4),
        ("label", 5),
        ("domain", 6),
        ("range", 7),
        ("seeAlso", 8),
        ("isDefinedBy", 9),
        ("Literal", 10),
        ("Container", 11),
        ("ContainerMembershipProperty", 12),
        ("member", 13),
        ("Datatype", 14),
    ],
};
