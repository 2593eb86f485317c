// Lexical replacement dictionaries.
//
// Each entry maps a whole-word pattern to its idiomatic replacement.
// Inflected forms come before their base form so the base rule never sees
// a longer word first. Capitalized variants are separate entries.

pub const VERBS: &[(&str, &str)] = &[
    (r"\bdemonstrated\b", "made coming to show"),
    (r"\bdemonstrates\b", "makes coming to show"),
    (r"\bdemonstrate\b", "make coming to show"),
    (r"\bindicated\b", "gave pointing to"),
    (r"\bindicates\b", "gives pointing to"),
    (r"\bindicate\b", "give pointing to"),
    (r"\brevealed\b", "let showing"),
    (r"\breveals\b", "lets showing"),
    (r"\breveal\b", "let show"),
    (r"\bparticipated\b", "made taking part"),
    (r"\bparticipates\b", "makes taking part"),
    (r"\bparticipate\b", "make taking part"),
    (r"\bperformed\b", "made doing"),
    (r"\bperforms\b", "makes doing"),
    (r"\bperform\b", "make doing"),
    (r"\bconducted\b", "made happening"),
    (r"\bconducts\b", "makes happening"),
    (r"\bconduct\b", "make happening"),
    (r"\bidentified\b", "came to spot"),
    (r"\bidentifies\b", "comes to spot"),
    (r"\bidentify\b", "come to spot"),
    (r"\bobserved\b", "came to see"),
    (r"\bobserves\b", "comes to see"),
    (r"\bobserve\b", "come to see"),
    (r"\bcollected\b", "brought together"),
    (r"\bcollects\b", "brings together"),
    (r"\bcollect\b", "bring together"),
    (r"\banalyzed\b", "made looking at"),
    (r"\banalyzes\b", "makes looking at"),
    (r"\banalyze\b", "make looking at"),
    (r"\bemployed\b", "put to use"),
    (r"\bemploys\b", "puts to use"),
    (r"\bemploy\b", "put to use"),
    (r"\bimplemented\b", "made putting into practice"),
    (r"\bimplements\b", "makes putting into practice"),
    (r"\bimplement\b", "make putting into practice"),
    (r"\bfacilitated\b", "gave help to"),
    (r"\bfacilitates\b", "gives help to"),
    (r"\bfacilitate\b", "give help to"),
    (r"\butilized\b", "made use of"),
    (r"\butilizes\b", "makes use of"),
    (r"\butilize\b", "make use of"),
    (r"\bcomprised\b", "came together as"),
    (r"\bcomprises\b", "comes together as"),
    (r"\bcomprise\b", "come together as"),
    (r"\bobtained\b", "came to get"),
    (r"\bobtains\b", "comes to get"),
    (r"\bobtain\b", "come to get"),
    (r"\bestablished\b", "made setting up"),
    (r"\bestablishes\b", "makes setting up"),
    (r"\bestablish\b", "make setting up"),
    (r"\benhanced\b", "made coming better"),
    (r"\benhances\b", "makes coming better"),
    (r"\benhance\b", "make coming better"),
    (r"\bensured\b", "made being sure"),
    (r"\bensures\b", "makes being sure"),
    (r"\bensure\b", "make being sure"),
];

pub const ADJECTIVES: &[(&str, &str)] = &[
    (r"\bsignificant\b", "carrying meaning"),
    (r"\bsubstantial\b", "carrying lots of"),
    (r"\bconsiderable\b", "worth taking note of"),
    (r"\badequate\b", "good enough"),
    (r"\binsufficient\b", "not hitting enough"),
    (r"\boptimal\b", "best you can get"),
    (r"\bcrucial\b", "you absolutely need"),
    (r"\bvital\b", "you need it bad"),
    (r"\bessential\b", "you got to have it"),
    (r"\bfundamental\b", "sitting at base"),
    (r"\bcomprehensive\b", "covering everything"),
    (r"\bprevalent\b", "showing up a lot"),
    (r"\bpredominant\b", "taking top spot"),
    (r"\bsubsequent\b", "that comes after"),
    (r"\bprior\b", "that came before"),
    (r"\binitial\b", "at the start"),
    (r"\bfinal\b", "at the end"),
    (r"\boverall\b", "when you look at everything"),
];

pub const CONJUNCTIONS: &[(&str, &str)] = &[
    (r"\bhowever\b", "but when you think about it"),
    (r"\bHowever\b", "But when you think about it"),
    (r"\btherefore\b", "so because of that"),
    (r"\bTherefore\b", "So because of that"),
    (r"\bmoreover\b", "and also on top"),
    (r"\bMoreover\b", "And also on top"),
    (r"\bfurthermore\b", "and keeping going"),
    (r"\bFurthermore\b", "And keeping going"),
    (r"\bnevertheless\b", "even with that though"),
    (r"\bNevertheless\b", "Even with that though"),
    (r"\bconsequently\b", "so what happens is"),
    (r"\bConsequently\b", "So what happens is"),
    (r"\baccordingly\b", "so matching that"),
    (r"\bAccordingly\b", "So matching that"),
];

pub const ADVERBS: &[(&str, &str)] = &[
    (r"\bsignificantly\b", "in way that matters big"),
    (r"\bparticularly\b", "in special kind of way"),
    (r"\bnotably\b", "in way worth noting"),
    (r"\bprimarily\b", "most of time mainly"),
    (r"\bsubstantially\b", "in amount that is big"),
    (r"\bcurrently\b", "at time that is now"),
    (r"\bpreviously\b", "in time that came before"),
    (r"\bsubsequently\b", "in time that followed"),
    (r"\bultimately\b", "when you get to the end"),
    (r"\binitially\b", "when things kicked off"),
    (r"\brecently\b", "not long back"),
];
