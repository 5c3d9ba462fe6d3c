//! Static zone registry: id <-> name pairs and the classic-era zone set
//! used as the default emission filter.

use std::collections::BTreeSet;
use zl_core::ZoneTable;

/// Zone id -> canonical short name. Ids with no entry are treated as
/// unregistered by the resolver and their transitions are dropped.
pub const ZONE_ID_TO_NAME: &[(u32, &str)] = &[
    (1, "qeynos"),
    (2, "qeynos2"),
    (3, "qrg"),
    (4, "qeytoqrg"),
    (5, "highpass"),
    (6, "highkeep"),
    (8, "freportn"),
    (9, "freportw"),
    (10, "freporte"),
    (11, "runnyeye"),
    (12, "qey2hh1"),
    (13, "northkarana"),
    (14, "southkarana"),
    (15, "eastkarana"),
    (16, "beholder"),
    (17, "blackburrow"),
    (18, "paw"),
    (19, "rivervale"),
    (20, "kithicor"),
    (21, "commons"),
    (22, "ecommons"),
    (23, "erudnint"),
    (24, "erudnext"),
    (25, "nektulos"),
    (26, "cshome"),
    (27, "lavastorm"),
    (28, "nektropos"),
    (29, "halas"),
    (30, "everfrost"),
    (31, "soldunga"),
    (32, "soldungb"),
    (33, "misty"),
    (34, "nro"),
    (35, "sro"),
    (36, "befallen"),
    (37, "oasis"),
    (38, "tox"),
    (39, "hole"),
    (40, "neriaka"),
    (41, "neriakb"),
    (42, "neriakc"),
    (43, "neriakd"),
    (44, "najena"),
    (45, "qcat"),
    (46, "innothule"),
    (47, "feerrott"),
    (48, "cazicthule"),
    (49, "oggok"),
    (50, "rathemtn"),
    (51, "lakerathe"),
    (52, "grobb"),
    (53, "aviak"),
    (54, "gfaydark"),
    (55, "akanon"),
    (56, "steamfont"),
    (57, "lfaydark"),
    (58, "crushbone"),
    (59, "mistmoore"),
    (60, "kaladima"),
    (61, "felwithea"),
    (62, "felwitheb"),
    (63, "unrest"),
    (64, "kedge"),
    (65, "guktop"),
    (66, "gukbottom"),
    (67, "kaladimb"),
    (68, "butcher"),
    (69, "oot"),
    (70, "cauldron"),
    (71, "airplane"),
    (72, "fearplane"),
    (73, "permafrost"),
    (74, "kerraridge"),
    (75, "paineel"),
    (76, "hateplane"),
    (77, "arena"),
    (78, "fieldofbone"),
    (79, "warslikswood"),
    (80, "soltemple"),
    (81, "droga"),
    (82, "cabwest"),
    (83, "swampofnohope"),
    (84, "firiona"),
    (85, "lakeofillomen"),
    (86, "dreadlands"),
    (87, "burningwood"),
    (88, "kaesora"),
    (89, "sebilis"),
    (90, "citymist"),
    (91, "skyfire"),
    (92, "frontiermtns"),
    (93, "overthere"),
    (94, "emeraldjungle"),
    (95, "trakanon"),
    (96, "timorous"),
    (97, "kurn"),
    (98, "erudsxing"),
    (100, "stonebrunt"),
    (101, "warrens"),
    (102, "karnor"),
    (103, "chardok"),
    (104, "dalnir"),
    (105, "charasis"),
    (106, "cabeast"),
    (107, "nurga"),
    (108, "veeshan"),
    (109, "veksar"),
    (110, "iceclad"),
    (111, "frozenshadow"),
    (112, "velketor"),
    (113, "kael"),
    (114, "skyshrine"),
    (115, "thurgadina"),
    (116, "eastwastes"),
    (117, "cobaltscar"),
    (118, "greatdivide"),
    (119, "wakening"),
    (120, "westwastes"),
    (121, "crystal"),
    (123, "necropolis"),
    (124, "templeveeshan"),
    (125, "sirens"),
    (126, "mischiefplane"),
    (127, "growthplane"),
    (128, "sleeper"),
    (129, "thurgadinb"),
    (130, "erudsxing2"),
];

/// Classic + Kunark + Velious zones: the default set a generation run emits.
pub const CLASSIC_ZONES: &[&str] = &[
    // Classic
    "qeynos",
    "qeynos2",
    "qrg",
    "qeytoqrg",
    "highpass",
    "highkeep",
    "freportn",
    "freportw",
    "freporte",
    "runnyeye",
    "qey2hh1",
    "northkarana",
    "southkarana",
    "eastkarana",
    "beholder",
    "blackburrow",
    "paw",
    "rivervale",
    "kithicor",
    "commons",
    "ecommons",
    "erudnint",
    "erudnext",
    "nektulos",
    "lavastorm",
    "nektropos",
    "halas",
    "everfrost",
    "soldunga",
    "soldungb",
    "misty",
    "nro",
    "sro",
    "befallen",
    "oasis",
    "tox",
    "hole",
    "neriaka",
    "neriakb",
    "neriakc",
    "najena",
    "qcat",
    "innothule",
    "feerrott",
    "cazicthule",
    "oggok",
    "rathemtn",
    "lakerathe",
    "grobb",
    "aviak",
    "gfaydark",
    "akanon",
    "steamfont",
    "lfaydark",
    "crushbone",
    "mistmoore",
    "kaladima",
    "felwithea",
    "felwitheb",
    "unrest",
    "kedge",
    "guktop",
    "gukbottom",
    "kaladimb",
    "butcher",
    "oot",
    "cauldron",
    "airplane",
    "fearplane",
    "permafrost",
    "kerraridge",
    "paineel",
    "hateplane",
    "arena",
    // Kunark
    "fieldofbone",
    "warslikswood",
    "soltemple",
    "droga",
    "cabwest",
    "swampofnohope",
    "firiona",
    "lakeofillomen",
    "dreadlands",
    "burningwood",
    "kaesora",
    "sebilis",
    "citymist",
    "skyfire",
    "frontiermtns",
    "overthere",
    "emeraldjungle",
    "trakanon",
    "timorous",
    "kurn",
    "erudsxing",
    "stonebrunt",
    "warrens",
    "karnor",
    "chardok",
    "dalnir",
    "charasis",
    "cabeast",
    "nurga",
    "veeshan",
    "veksar",
    // Velious
    "iceclad",
    "frozenshadow",
    "velketor",
    "kael",
    "skyshrine",
    "thurgadina",
    "eastwastes",
    "cobaltscar",
    "greatdivide",
    "wakening",
    "westwastes",
    "crystal",
    "necropolis",
    "templeveeshan",
    "sirens",
    "mischiefplane",
    "growthplane",
    "sleeper",
    "thurgadinb",
    "erudsxing2",
];

/// Build the injected lookup table from the static registry.
pub fn zone_table() -> ZoneTable {
    ZoneTable::from_pairs(ZONE_ID_TO_NAME.iter().copied())
}

/// Default emission filter: the classic-era zone set.
pub fn classic_zones() -> BTreeSet<String> {
    CLASSIC_ZONES.iter().map(|z| z.to_string()).collect()
}
