//! Built-in blocklists
//!
//! Categories exist for maintenance only; matching flattens them into one set.

/// Sexual and explicit terms
pub const SEXUAL: &[&str] = &[
    "PORN", "PORNOGRAPHY", "SEX", "SEXUAL", "BDSM", "FETISH", "EROTIC", "HENTAI", "PENIS",
    "VAGINA", "CLITORIS", "ERECTION", "EJACULATE", "ORGASM", "ANUS", "ANAL", "RECTUM", "SPERM",
    "SEMEN", "TESTICLE", "SCROTUM", "PUBIC", "MASTURBATE", "MASTURBATION", "FELLATIO",
    "CUNNILINGUS", "BLOWJOB", "HANDJOB", "DEEPTHROAT", "THREESOME", "ORGY", "DILDO", "VIBRATOR",
    "CONDOM", "TITTY", "TITS", "NIPPLE", "BREAST", "BOOB", "CLIT", "CUM", "COCK", "DICK", "PUSSY",
    "SLUT", "WHORE", "HOOKER", "STRIPPER", "ESCORT", "GAY", "LESBIAN", "QUEER", "HOMO", "TRANS",
    "TRANSSEXUAL", "SADISM", "MASOCHISM",
];

/// Violence and gore
pub const VIOLENT: &[&str] = &[
    "KILL", "KILLER", "MURDER", "MURDERER", "SUICIDE", "GENOCIDE", "HOMICIDE", "SLAUGHTER",
    "BLOOD", "BLOODY", "GORE", "CORPSE", "DEATH", "DEAD", "STAB", "SHOOT", "BOMB", "TERRORIST",
    "JIHAD", "BEHEAD", "TORTURE", "RAPE", "RAPIST", "MOLEST", "PEDOPHILE", "INCEST", "EXECUTE",
    "HANGING",
];

pub const WEAPON: &[&str] = &[
    "GUN", "KNIFE", "RIFLE", "PISTOL", "SNIPER", "GRENADE", "FIREARM", "WEAPON",
];

/// Drugs, alcohol and tobacco
pub const DRUG: &[&str] = &[
    "COCAINE", "HEROIN", "METH", "METHAMPHETAMINE", "ECSTASY", "MDMA", "LSD", "ACID",
    "MARIJUANA", "CANNABIS", "WEED", "KUSH", "POT", "JOINT", "BONG", "CRACK", "CRACKHEAD", "COKE",
    "NEEDLE", "SYRINGE", "DRUG", "NARCOTIC", "ALCOHOL", "LIQUOR", "WHISKEY", "VODKA", "TOBACCO",
    "CIGARETTE", "VAPE", "VAPING", "OPIUM", "FENTANYL", "PILL", "STEROID",
];

/// Hate speech and slurs
pub const SLUR: &[&str] = &[
    "NIGGER", "NIGGA", "FAGGOT", "RETARD", "DYKE", "KIKE", "SPIC", "CHINK", "GOOK", "COON", "WOG",
    "REDNECK", "NAZI", "HITLER", "SWASTIKA", "WHITEPOWER", "ARYAN",
];

pub const GAMBLING: &[&str] = &[
    "CASINO", "GAMBLE", "BETTING", "POKER", "SLOTS", "JACKPOT", "BOOKIE", "LOTTERY",
];

/// Generic swearing
pub const SWEAR: &[&str] = &[
    "FUCK", "SHIT", "BITCH", "ASS", "ASSHOLE", "ARSE", "ARSEHOLE", "BASTARD", "DAMN", "HELL",
    "PISS", "WANKER", "TOSSER", "BOLLOCKS", "BUGGER", "CRAP",
];

/// Every category, for building the flat set
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("sexual", SEXUAL),
    ("violent", VIOLENT),
    ("weapon", WEAPON),
    ("drug", DRUG),
    ("slur", SLUR),
    ("gambling", GAMBLING),
    ("swear", SWEAR),
];

/// Roots blocked anywhere inside the normalized word
pub const HIGH_RISK_ROOTS: &[&str] = &[
    "FUCK", "SHIT", "CUNT", "NIGGER", "FAGGOT", "COCK", "PUSSY", "PORN", "PEDO", "RAPE",
];

/// Legitimate words that contain a high-risk root.
///
/// Only the root rule is waived; an exact lexicon hit still blocks.
pub const ROOT_EXCEPTIONS: &[&str] = &[
    "COCKPIT", "COCKPITS", "COCKATOO", "COCKATOOS", "COCKROACH", "COCKROACHES", "PEACOCK",
    "PEACOCKS", "SCRAPE", "SCRAPED", "SCRAPER", "SCRAPES", "GRAPE", "GRAPES", "DRAPE", "DRAPED",
    "DRAPES", "TRAPEZE", "ENCYCLOPEDIA", "PEDOMETER",
];
