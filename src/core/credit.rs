//! Credit score providers
//!
//! In-process implementations of [`CreditScoreProvider`]: a constant score
//! and a lookup table with a sentinel default for unknown clients.

use crate::core::traits::CreditScoreProvider;
use crate::types::ClientId;
use std::collections::HashMap;

/// Score reported for clients missing from a [`ScoreTable`]
///
/// Low enough that the gate rejects the withdrawal.
pub const UNKNOWN_CLIENT_SCORE: i32 = 0;

/// Reports the same score for every client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScore(pub i32);

impl CreditScoreProvider for FixedScore {
    fn credit_score(&self, _client_id: &str) -> i32 {
        self.0
    }
}

/// Scores looked up by client ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    scores: HashMap<ClientId, i32>,
    default_score: i32,
}

impl ScoreTable {
    /// Empty table that reports [`UNKNOWN_CLIENT_SCORE`] for everyone
    pub fn new() -> Self {
        Self::with_default(UNKNOWN_CLIENT_SCORE)
    }

    /// Empty table with a custom score for unknown clients
    pub fn with_default(default_score: i32) -> Self {
        ScoreTable {
            scores: HashMap::new(),
            default_score,
        }
    }

    /// Set (or replace) a client's score
    pub fn insert(&mut self, client_id: impl Into<ClientId>, score: i32) {
        self.scores.insert(client_id.into(), score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn default_score(&self) -> i32 {
        self.default_score
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<ClientId>> FromIterator<(K, i32)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        let mut table = ScoreTable::new();
        for (client_id, score) in iter {
            table.insert(client_id, score);
        }
        table
    }
}

impl CreditScoreProvider for ScoreTable {
    fn credit_score(&self, client_id: &str) -> i32 {
        self.scores
            .get(client_id)
            .copied()
            .unwrap_or(self.default_score)
    }
}
