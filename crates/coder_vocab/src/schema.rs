//! Terms of `<http://schema.org/>`.

use crate::VocabularyTable;

pub const SCHEMA: VocabularyTable = VocabularyTable {
    name: "schema",
    namespace: "http://schema.org/",
    base: 0x10000,
    span: 0x4000,
    entries: &[
        ("Thing", 0),
        ("Action", 1),
        ("CreativeWork", 2),
        ("Event", 3),
        ("Intangible", 4),
        ("MedicalEntity", 5),
        ("Organization", 6),
        ("Person", 7),
        ("Place", 8),
        ("Product", 9),
        ("name", 10),
        ("description", 11),
        ("url", 12),
        ("identifier", 13),
        ("image", 14),
        ("sameAs", 15),
        ("alternateName", 16),
        ("additionalType", 17),
        ("disambiguatingDescription", 18),
        ("mainEntityOfPage", 19),
        ("potentialAction", 20),
        ("subjectOf", 21),
        ("givenName", 22),
        ("familyName", 23),
        ("additionalName", 24),
        ("honorificPrefix", 25),
        ("honorificSuffix", 26),
        ("birthDate", 27),
        ("deathDate", 28),
        ("birthPlace", 29),
        ("deathPlace", 30),
        ("gender", 31),
        ("nationality", 32),
        ("email", 33),
        ("telephone", 34),
        ("faxNumber", 35),
        ("jobTitle", 36),
        ("worksFor", 37),
        ("affiliation", 38),
        ("alumniOf", 39),
        ("knows", 40),
        ("colleague", 41),
        ("spouse", 42),
        ("parent", 43),
        ("children", 44),
        ("sibling", 45),
        ("address", 46),
        ("homeLocation", 47),
        ("workLocation", 48),
        ("memberOf", 49),
        ("legalName", 50),
        ("taxID", 51),
        ("vatID", 52),
        ("duns", 53),
        ("leiCode", 54),
        ("foundingDate", 55),
        ("dissolutionDate", 56),
        ("founder", 57),
        ("founders", 58),
        ("employee", 59),
        ("employees", 60),
        ("numberOfEmployees", 61),
        ("parentOrganization", 62),
        ("subOrganization", 63),
        ("department", 64),
        ("logo", 65),
        ("brand", 66),
        ("contactPoint", 67),
        ("areaServed", 68),
        ("PostalAddress", 69),
        ("streetAddress", 70),
        ("addressLocality", 71),
        ("addressRegion", 72),
        ("addressCountry", 73),
        ("postalCode", 74),
        ("postOfficeBoxNumber", 75),
        ("Country", 76),
        ("State", 77),
        ("City", 78),
        ("AdministrativeArea", 79),
        ("GeoCoordinates", 80),
        ("latitude", 81),
        ("longitude", 82),
        ("geo", 83),
        ("ContactPoint", 84),
        ("contactType", 85),
        ("availableLanguage", 86),
        ("hoursAvailable", 87),
        ("Article", 88),
        ("BlogPosting", 89),
        ("NewsArticle", 90),
        ("Book", 91),
        ("Movie", 92),
        ("MusicRecording", 93),
        ("MusicAlbum", 94),
        ("MusicGroup", 95),
        ("Review", 96),
        ("Rating", 97),
        ("AggregateRating", 98),
        ("WebPage", 99),
        ("WebSite", 100),
        ("Dataset", 101),
        ("DataDownload", 102),
        ("ImageObject", 103),
        ("VideoObject", 104),
        ("AudioObject", 105),
        ("MediaObject", 106),
        ("author", 107),
        ("creator", 108),
        ("contributor", 109),
        ("publisher", 110),
        ("editor", 111),
        ("headline", 112),
        ("articleBody", 113),
        ("text", 114),
        ("abstract", 115),
        ("keywords", 116),
        ("inLanguage", 117),
        ("license", 118),
        ("copyrightHolder", 119),
        ("copyrightYear", 120),
        ("datePublished", 121),
        ("dateCreated", 122),
        ("dateModified", 123),
        ("version", 124),
        ("isPartOf", 125),
        ("hasPart", 126),
        ("about", 127),
        ("mentions", 128),
        ("citation", 129),
        ("genre", 130),
        ("encoding", 131),
        ("encodingFormat", 132),
        ("contentUrl", 133),
        ("contentSize", 134),
        ("duration", 135),
        ("thumbnailUrl", 136),
        ("review", 137),
        ("reviewBody", 138),
        ("reviewRating", 139),
        ("itemReviewed", 140),
        ("ratingValue", 141),
        ("bestRating", 142),
        ("worstRating", 143),
        ("ratingCount", 144),
        ("reviewCount", 145),
        ("aggregateRating", 146),
        ("Offer", 147),
        ("AggregateOffer", 148),
        ("Demand", 149),
        ("PriceSpecification", 150),
        ("offers", 151),
        ("price", 152),
        ("priceCurrency", 153),
        ("priceValidUntil", 154),
        ("availability", 155),
        ("itemCondition", 156),
        ("seller", 157),
        ("sku", 158),
        ("gtin", 159),
        ("gtin13", 160),
        ("mpn", 161),
        ("model", 162),
        ("manufacturer", 163),
        ("category", 164),
        ("color", 165),
        ("weight", 166),
        ("height", 167),
        ("width", 168),
        ("depth", 169),
        ("startDate", 170),
        ("endDate", 171),
        ("location", 172),
        ("organizer", 173),
        ("performer", 174),
        ("attendee", 175),
        ("eventStatus", 176),
        ("eventAttendanceMode", 177),
        ("doorTime", 178),
        ("superEvent", 179),
        ("subEvent", 180),
        ("Boolean", 181),
        ("Date", 182),
        ("DateTime", 183),
        ("Number", 184),
        ("Text", 185),
        ("Time", 186),
        ("URL", 187),
        ("Integer", 188),
        ("Float", 189),
        ("QuantitativeValue", 190),
        ("PropertyValue", 191),
        ("value", 192),
        ("unitCode", 193),
        ("unitText", 194),
        ("minValue", 195),
        ("maxValue", 196),
        ("valueReference", 197),
        ("propertyID", 198),
        ("StructuredValue", 199),
        ("Enumeration", 200),
        ("Role", 201),
        ("OrganizationRole", 202),
        ("roleName", 203),
        ("member", 204),
        ("members", 205),
        ("DefinedTerm", 206),
        ("DefinedTermSet", 207),
        ("termCode", 208),
        ("inDefinedTermSet", 209),
        ("Language", 210),
        ("MonetaryAmount", 211),
        ("currency", 212),
        ("amount", 213),
    ],
};
