//! Turn-based game loop over one source word

use super::types::{AcceptedGuess, GuessRejection, HistoryEntry, PlayerId};
use crate::config::GameConfig;
use crate::core::hint::HintEngine;
use crate::core::matcher::can_construct;
use crate::core::validation::LexicalResolver;
use crate::utils::error::{DuelError, Result};
use std::collections::HashSet;
use tracing::{debug, info};

/// One match. Guesses are processed one at a time.
#[derive(Debug, Clone)]
pub struct GameSession {
    source: String,
    scores: Vec<u32>,
    active: Vec<bool>,
    current: PlayerId,
    history: Vec<HistoryEntry>,
    used: HashSet<String>,
    winner: Option<PlayerId>,
}

impl GameSession {
    /// Validate the source word and seat `players` players with zero points.
    pub async fn start(
        source: &str,
        players: usize,
        resolver: &LexicalResolver,
        config: &GameConfig,
    ) -> Result<Self> {
        if players < 2 {
            return Err(DuelError::validation(format!(
                "A game needs at least 2 players, got {players}"
            )));
        }

        let source = source.trim().to_uppercase();
        if source.chars().count() < config.min_source_len {
            return Err(DuelError::invalid_source_word(format!(
                "Word must be at least {} letters long",
                config.min_source_len
            )));
        }
        if !source.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DuelError::invalid_source_word(format!(
                "\"{source}\" must contain letters only"
            )));
        }

        let result = resolver.check_word_definition(&source).await;
        if !result.is_valid() {
            return Err(DuelError::invalid_source_word(format!(
                "\"{source}\" was rejected: {}",
                result.error_kind()
            )));
        }

        info!(source = %source, players, "Game started");
        Ok(Self::seated(source, players))
    }

    fn seated(source: String, players: usize) -> Self {
        Self {
            source,
            scores: vec![0; players],
            active: vec![true; players],
            current: 0,
            history: Vec::new(),
            used: HashSet::new(),
            winner: None,
        }
    }

    /// Check a guess for the current player and score it when accepted.
    ///
    /// Checks run cheapest first: empty, reuse, own word, letters, then the
    /// validation pipeline.
    pub async fn submit_guess(
        &mut self,
        word: &str,
        resolver: &LexicalResolver,
    ) -> std::result::Result<AcceptedGuess, GuessRejection> {
        if self.is_over() {
            return Err(GuessRejection::GameOver);
        }

        let word = word.trim().to_uppercase();
        if word.is_empty() {
            return Err(GuessRejection::Empty);
        }
        if self.used.contains(&word) {
            return Err(GuessRejection::AlreadyUsed(word));
        }
        if word == self.source {
            return Err(GuessRejection::OwnWord(word));
        }
        if !can_construct(&word, &self.source) {
            return Err(GuessRejection::CannotConstruct(word));
        }

        let result = resolver.check_word_definition(&word).await;
        if !result.is_valid() {
            debug!(word = %word, kind = ?result.error_kind(), "Guess rejected");
            return Err(GuessRejection::Invalid {
                word,
                kind: result.error_kind(),
            });
        }

        let player = self.current;
        let points = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);
        self.scores[player] = self.scores[player].saturating_add(points);
        self.history.push(HistoryEntry {
            word: word.clone(),
            player,
            gloss: result.gloss().to_string(),
            points,
        });
        self.used.insert(word.clone());
        self.current = self.next_active(player);

        debug!(word = %word, player, points, "Guess accepted");
        Ok(AcceptedGuess {
            word,
            player,
            points,
            gloss: result.gloss().to_string(),
            next_player: self.current,
        })
    }

    /// The current player leaves. Returns the winner once one player remains.
    pub fn surrender(&mut self) -> Result<Option<PlayerId>> {
        if self.is_over() {
            return Err(DuelError::game_over("The game is already over"));
        }

        let player = self.current;
        self.active[player] = false;
        info!(player, "Player surrendered");

        let remaining: Vec<PlayerId> = self.remaining_players().collect();
        if let [last] = remaining.as_slice() {
            self.winner = Some(*last);
            self.current = *last;
            info!(winner = *last, "Game over");
        } else {
            self.current = self.next_active(player);
        }

        Ok(self.winner)
    }

    /// A hint for the current position
    pub async fn request_hint(&self, engine: &HintEngine) -> Result<Option<String>> {
        if self.is_over() {
            return Err(DuelError::game_over("The game is already over"));
        }
        Ok(engine.find_valid_hint(&self.source, &self.used).await)
    }

    fn next_active(&self, from: PlayerId) -> PlayerId {
        let n = self.active.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&p| self.active[p])
            .unwrap_or(from)
    }

    fn remaining_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(p, active)| active.then_some(p))
    }

    pub fn source_word(&self) -> &str {
        &self.source
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn player_count(&self) -> usize {
        self.scores.len()
    }

    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active.get(player).copied().unwrap_or(false)
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
