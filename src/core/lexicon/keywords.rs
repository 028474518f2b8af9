//! Keyword tables used to read glosses and dictionary tags

/// Markers of an abbreviation in a gloss, English or Chinese
pub const ABBREVIATION_KEYWORDS: &[&str] = &[
    "abbr.",
    "abbreviation",
    "acronym",
    "initialism",
    "short for",
    "缩写",
    "简称",
    "首字母",
];

/// Markers of a personal name in a gloss
pub const NAME_KEYWORDS: &[&str] = &[
    "given name",
    "surname",
    "person's name",
    "personal name",
    "人名",
    "姓氏",
    "男子名",
    "女子名",
];

/// Part-of-speech markers that make a name-like gloss acceptable
pub const GENERAL_POS_MARKERS: &[&str] = &[
    "v.",
    "vt.",
    "vi.",
    "adj.",
    "adv.",
    "prep.",
    "conj.",
    "pron.",
    "verb",
    "adjective",
    "adverb",
    "preposition",
    "conjunction",
    "pronoun",
];

/// Two-letter words accepted by the length gate
pub const TWO_LETTER_WORDS: &[&str] = &[
    "AH", "AM", "AN", "AS", "AT", "AW", "AX", "BE", "BY", "DO", "EH", "GO", "HA", "HE", "HI", "HM",
    "HO", "ID", "IF", "IN", "IS", "IT", "LO", "MA", "ME", "MY", "NO", "OF", "OH", "OK", "ON", "OR",
    "OW", "OX", "PA", "SO", "TO", "UH", "UM", "UP", "US", "WE", "YA", "YE", "YO", "PC", "TV",
];

/// Acronyms that became ordinary words
pub const ACRONYM_WORDS: &[&str] = &["LASER", "RADAR", "SCUBA", "SONAR"];

/// Single letters that are words
pub const SINGLE_LETTER_WORDS: &[&str] = &["A", "I"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|k| text.contains(k))
}

pub fn mentions_abbreviation(text: &str) -> bool {
    contains_any(text, ABBREVIATION_KEYWORDS)
}

pub fn mentions_personal_name(text: &str) -> bool {
    contains_any(text, NAME_KEYWORDS)
}

pub fn mentions_general_pos(text: &str) -> bool {
    contains_any(text, GENERAL_POS_MARKERS)
}

pub fn is_two_letter_word(word: &str) -> bool {
    TWO_LETTER_WORDS.contains(&word)
}

/// Exempt from the abbreviation ban
pub fn is_whitelisted_abbreviation(word: &str) -> bool {
    is_two_letter_word(word) || ACRONYM_WORDS.contains(&word)
}

pub fn is_single_letter_word(word: &str) -> bool {
    SINGLE_LETTER_WORDS.contains(&word)
}
