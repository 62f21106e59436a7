//! Terms of `<http://purl.org/dc/terms/>`.

use crate::VocabularyTable;

pub const DCTERMS: VocabularyTable = VocabularyTable {
    name: "dcterms",
    namespace: "http://purl.org/dc/terms/",
    base: 0x800,
    span: 0x100,
    entries: &[
        ("abstract", 0),
        ("accessRights", 1),
        ("accrualMethod", 2),
        ("accrualPeriodicity", 3),
        ("accrualPolicy", 4),
        ("alternative", 5),
        ("audience", 6),
        ("available", 7),
        ("bibliographicCitation", 8),
        ("conformsTo", 9),
        ("contributor", 10),
        ("coverage", 11),
        ("created", 12),
        ("creator", 13),
        ("date", 14),
        ("dateAccepted", 15),
        ("dateCopyrighted", 16),
        ("dateSubmitted", 17),
        ("description", 18),
        ("educationLevel", 19),
        ("extent", 20),
        ("format", 21),
        ("hasFormat", 22),
        ("hasPart", 23),
        ("hasVersion", 24),
        ("identifier", 25),
        ("instructionalMethod", 26),
        ("isFormatOf", 27),
        ("isPartOf", 28),
        ("isReferencedBy", 29),
        ("isReplacedBy", 30),
        ("isRequiredBy", 31),
        ("isVersionOf", 32),
        ("issued", 33),
        ("language", 34),
        ("license", 35),
        ("mediator", 36),
        ("medium", 37),
        ("modified", 38),
        ("provenance", 39),
        ("publisher", 40),
        ("references", 41),
        ("relation", 42),
        ("replaces", 43),
        ("requires", 44),
        ("rights", 45),
        ("rightsHolder", 46),
        ("source", 47),
        ("spatial", 48),
        ("subject", 49),
        ("tableOfContents", 50),
        ("temporal", 51),
        ("title", 52),
        ("type", 53),
        ("valid", 54),
        ("Agent", 55),
        ("AgentClass", 56),
        ("BibliographicResource", 57),
        ("FileFormat", 58),
        ("Frequency", 59),
        ("Jurisdiction", 60),
        ("LicenseDocument", 61),
        ("LinguisticSystem", 62),
        ("Location", 63),
        ("LocationPeriodOrJurisdiction", 64),
        ("MediaType", 65),
        ("MediaTypeOrExtent", 66),
        ("MethodOfAccrual", 67),
        ("MethodOfInstruction", 68),
        ("PeriodOfTime", 69),
        ("PhysicalMedium", 70),
        ("PhysicalResource", 71),
        ("Policy", 72),
        ("ProvenanceStatement", 73),
        ("RightsStatement", 74),
        ("SizeOrDuration", 75),
        ("Standard", 76),
    ],
};
