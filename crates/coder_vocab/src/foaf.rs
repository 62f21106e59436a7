//! Terms of `<http://xmlns.com/foaf/0.1/>`.

use crate::VocabularyTable;

pub const FOAF: VocabularyTable = VocabularyTable {
    name: "foaf",
    namespace: "http://xmlns.com/foaf/0.1/",
    base: 0x700,
    span: 0x100,
    entries: &[
        ("Agent", 0),
        ("Document", 1),
        ("Group", 2),
        ("Image", 3),
        ("LabelProperty", 4),
        ("OnlineAccount", 5),
        ("OnlineChatAccount", 6),
        ("OnlineEcommerceAccount", 7),
        ("OnlineGamingAccount", 8),
        ("Organization", 9),
        ("Person", 10),
        ("PersonalProfileDocument", 11),
        ("Project", 12),
        ("account", 13),
        ("accountName", 14),
        ("accountServiceHomepage", 15),
        ("age", 16),
        ("aimChatID", 17),
        ("based_near", 18),
        ("birthday", 19),
        ("currentProject", 20),
        ("depiction", 21),
        ("depicts", 22),
        ("dnaChecksum", 23),
        ("familyName", 24),
        ("family_name", 25),
        ("firstName", 26),
        ("focus", 27),
        ("fundedBy", 28),
        ("geekcode", 29),
        ("gender", 30),
        ("givenName", 31),
        ("givenname", 32),
        ("holdsAccount", 33),
        ("homepage", 34),
        ("icqChatID", 35),
        ("img", 36),
        ("interest", 37),
        ("isPrimaryTopicOf", 38),
        ("jabberID", 39),
        ("knows", 40),
        ("lastName", 41),
        ("logo", 42),
        ("made", 43),
        ("maker", 44),
        ("mbox", 45),
        ("mbox_sha1sum", 46),
        ("member", 47),
        ("membershipClass", 48),
        ("msnChatID", 49),
        ("myersBriggs", 50),
        ("name", 51),
        ("nick", 52),
        ("openid", 53),
        ("page", 54),
        ("pastProject", 55),
        ("phone", 56),
        ("plan", 57),
        ("primaryTopic", 58),
        ("publications", 59),
        ("schoolHomepage", 60),
        ("sha1", 61),
        ("skypeID", 62),
        ("status", 63),
        ("surname", 64),
        ("theme", 65),
        ("thumbnail", 66),
        ("tipjar", 67),
        ("title", 68),
        ("topic", 69),
        ("topic_interest", 70),
        ("weblog", 71),
        ("workInfoHomepage", 72),
        ("workplaceHomepage", 73),
        ("yahooChatID", 74),
    ],
};
