//! Terms of `<http://www.w3.org/2002/07/owl#>`.

use crate::VocabularyTable;

pub const OWL: VocabularyTable = VocabularyTable {
    name: "owl",
    namespace: "http://www.w3.org/2002/07/owl#",
    base: 0x400,
    span: 0x200,
    entries: &[
        ("AllDifferent", 0),
        ("AllDisjointClasses", 1),
        ("AllDisjointProperties", 2),
        ("Annotation", 3),
        ("AnnotationProperty", 4),
        ("AsymmetricProperty", 5),
        ("Axiom", 6),
        ("Class", 7),
        ("DataRange", 8),
        ("DatatypeProperty", 9),
        ("DeprecatedClass", 10),
        ("DeprecatedProperty", 11),
        ("FunctionalProperty", 12),
        ("InverseFunctionalProperty", 13),
        ("IrreflexiveProperty", 14),
        ("NamedIndividual", 15),
        ("NegativePropertyAssertion", 16),
        ("Nothing", 17),
        ("ObjectProperty", 18),
        ("Ontology", 19),
        ("OntologyProperty", 20),
        ("ReflexiveProperty", 21),
        ("Restriction", 22),
        ("SymmetricProperty", 23),
        ("TransitiveProperty", 24),
        ("Thing", 25),
        ("allValuesFrom", 26),
        ("annotatedProperty", 27),
        ("annotatedSource", 28),
        ("annotatedTarget", 29),
        ("assertionProperty", 30),
        ("backwardCompatibleWith", 31),
        ("bottomDataProperty", 32),
        ("bottomObjectProperty", 33),
        ("cardinality", 34),
        ("complementOf", 35),
        ("datatypeComplementOf", 36),
        ("deprecated", 37),
        ("differentFrom", 38),
        ("disjointUnionOf", 39),
        ("disjointWith", 40),
        ("distinctMembers", 41),
        ("equivalentClass", 42),
        ("equivalentProperty", 43),
        ("hasKey", 44),
        ("hasSelf", 45),
        ("hasValue", 46),
        ("imports", 47),
        ("incompatibleWith", 48),
        ("intersectionOf", 49),
        ("inverseOf", 50),
        ("maxCardinality", 51),
        ("maxQualifiedCardinality", 52),
        ("members", 53),
        ("minCardinality", 54),
        ("minQualifiedCardinality", 55),
        ("onClass", 56),
        ("onDataRange", 57),
        ("onDatatype", 58),
        ("onProperties", 59),
        ("onProperty", 60),
        ("oneOf", 61),
        ("priorVersion", 62),
        ("propertyChainAxiom", 63),
        ("propertyDisjointWith", 64),
        ("qualifiedCardinality", 65),
        ("sameAs", 66),
        ("someValuesFrom", 67),
        ("sourceIndividual", 68),
        ("targetIndividual", 69),
        ("targetValue", 70),
        ("topDataProperty", 71),
        ("topObjectProperty", 72),
        ("unionOf", 73),
        ("versionIRI", 74),
        ("versionInfo", 75),
        ("withRestrictions", 76),
    ],
};
