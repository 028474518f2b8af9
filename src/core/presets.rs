//! Source word presets
//!
//! Pulls long, common words from the lexeme service so the setup screen
//! can offer fresh source words.

use crate::core::providers::{Lexeme, LexemeLookup, LexemeQuery};
use crate::core::safety::ProfanityLexicon;
use futures::future::join;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Starting letters that give long, common words
pub const PRESET_ALPHABET: &str = "BCDEFGHIJKLMNOPRSTUVW";

/// Offered when the lexeme service cannot be reached
pub const DEFAULT_PRESETS: &[&str] = &[
    "PROGRAMMING",
    "ARCHITECTURE",
    "DEVELOPER",
    "COMMUNICATION",
    "DICTIONARY",
    "REVOLUTION",
    "UNDERSTANDING",
    "PERSPECTIVE",
    "INTELLIGENCE",
    "TRANSPARENT",
];

const PER_LETTER_MAX: usize = 50;
const MIN_LEN: usize = 8;
const MAX_LEN: usize = 12;
const TOP_POOL: usize = 40;
const PRESET_COUNT: usize = 10;

pub struct PresetGenerator {
    lexemes: Arc<dyn LexemeLookup>,
    profanity: Arc<ProfanityLexicon>,
    rng: Mutex<StdRng>,
}

impl PresetGenerator {
    pub fn new(lexemes: Arc<dyn LexemeLookup>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            lexemes,
            profanity: ProfanityLexicon::shared(),
            rng: Mutex::new(rng),
        }
    }

    pub fn with_profanity(mut self, profanity: Arc<ProfanityLexicon>) -> Self {
        self.profanity = profanity;
        self
    }

    /// Up to ten fresh source words. Empty when nothing usable came back.
    pub async fn fetch_new_presets(&self) -> Vec<String> {
        let (first, second) = self.pick_letters();
        debug!(first = %first, second = %second, "Fetching presets");

        let (a, b) = join(self.fetch_for_letter(first), self.fetch_for_letter(second)).await;

        let mut seen = HashSet::new();
        let mut candidates: Vec<(String, f64)> = a
            .into_iter()
            .chain(b)
            .map(|l| (l.word.trim().to_uppercase(), l.frequency()))
            .filter(|(word, _)| self.is_preset(word))
            .filter(|(word, _)| seen.insert(word.clone()))
            .collect();

        candidates.sort_by(|x, y| y.1.total_cmp(&x.1));
        candidates.truncate(TOP_POOL);

        let mut words: Vec<String> = candidates.into_iter().map(|(w, _)| w).collect();
        words.shuffle(&mut *self.rng.lock());
        words.truncate(PRESET_COUNT);
        words
    }

    fn pick_letters(&self) -> (char, char) {
        let letters: Vec<char> = PRESET_ALPHABET.chars().collect();
        let mut rng = self.rng.lock();
        let first = rng.gen_range(0..letters.len());
        let mut second = rng.gen_range(0..letters.len() - 1);
        if second >= first {
            second += 1;
        }
        (letters[first], letters[second])
    }

    async fn fetch_for_letter(&self, letter: char) -> Vec<Lexeme> {
        let pattern = format!("{}???????*", letter.to_ascii_lowercase());
        match self.lexemes.words(&LexemeQuery::pattern(pattern, PER_LETTER_MAX)).await {
            Ok(found) => found,
            Err(e) => {
                warn!(letter = %letter, error = %e, "Preset fetch failed");
                Vec::new()
            }
        }
    }

    fn is_preset(&self, word: &str) -> bool {
        (MIN_LEN..=MAX_LEN).contains(&word.len())
            && word.chars().all(|c| c.is_ascii_uppercase())
            && !self.profanity.is_profane(word)
    }
}

/// The built-in presets as owned words
pub fn default_presets() -> Vec<String> {
    DEFAULT_PRESETS.iter().map(|w| w.to_string()).collect()
}
