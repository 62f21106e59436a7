//! Terms of `<http://www.w3.org/2001/XMLSchema#>`.

use crate::VocabularyTable;

pub const XSD: VocabularyTable = VocabularyTable {
    name: "xsd",
    namespace: "http://www.w3.org/2001/XMLSchema#",
    base: 0x300,
    span: 0x100,
    entries: &[
        ("string", 0),
        ("boolean", 1),
        ("decimal", 2),
        ("integer", 3),
        ("double", 4),
        ("float", 5),
        ("date", 6),
        ("time", 7),
        ("dateTime", 8),
        ("dateTimeStamp", 9),
        ("gYear", 10),
        ("gMonth", 11),
        ("gDay", 12),
        ("gYearMonth", 13),
        ("gMonthDay", 14),
        ("duration", 15),
        ("yearMonthDuration", 16),
        ("dayTimeDuration", 17),
        ("byte", 18),
        ("short", 19),
        ("int", 20),
        ("long", 21),
        ("unsignedByte", 22),
        ("unsignedShort", 23),
        ("unsignedInt", 24),
        ("unsignedLong", 25),
        ("positiveInteger", 26),
        ("nonNegativeInteger", 27),
        ("negativeInteger", 28),
        ("nonPositiveInteger", 29),
        ("hexBinary", 30),
        ("base64Binary", 31),
        ("anyURI", 32),
        ("language", 33),
        ("normalizedString", 34),
        ("token", 35),
        ("NMTOKEN", 36),
        ("Name", 37),
        ("NCName", 38),
        ("QName", 39),
        ("NOTATION", 40),
        ("ENTITY", 41),
        ("ID", 42),
        ("IDREF", 43),
    ],
};
