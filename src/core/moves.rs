//! Moves, turn-count normalization, and the compacted move history.
//!
//! A `Move` is a face plus a signed quarter-turn count. Every count folds
//! into the canonical set {-1, 0, 1, 2}:
//!
//! ```
//! use rust_cube::core::normalize_count;
//!
//! assert_eq!(normalize_count(3), -1);
//! assert_eq!(normalize_count(-3), 1);
//! assert_eq!(normalize_count(-2), 2);
//! assert_eq!(normalize_count(8), 0);
//! ```
//!
//! Moves print and parse in the usual notation: `F` (clockwise quarter),
//! `F'` (counter-clockwise quarter), `F2` (half turn).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::face::Face;

/// Fold any quarter-turn count into {-1, 0, 1, 2}.
///
/// Reduces modulo 4 (keeping the sign of `count`), then maps 3 → -1,
/// -3 → 1 and -2 → 2.
#[must_use]
pub const fn normalize_count(count: i32) -> i32 {
    match count % 4 {
        3 => -1,
        -3 => 1,
        -2 => 2,
        other => other,
    }
}

/// A single face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The face being turned.
    pub face: Face,
    /// Signed quarter turns: -1 counter-clockwise, 1 clockwise, 2 half turn.
    pub count: i32,
}

impl Move {
    /// Create a move with its count normalized.
    #[must_use]
    pub const fn new(face: Face, count: i32) -> Self {
        Self {
            face,
            count: normalize_count(count),
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, -normalize_count(self.count))
    }

    /// Check if this move leaves the cube unchanged.
    #[must_use]
    pub const fn is_identity(self) -> bool {
        self.count == 0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.count {
            -1 => write!(f, "{}'", self.face),
            2 => write!(f, "{}2", self.face),
            0 => write!(f, "{}0", self.face),
            _ => write!(f, "{}", self.face),
        }
    }
}

/// Errors from parsing move notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move token")]
    Empty,
    #[error("unknown face letter '{0}'")]
    UnknownFace(char),
    #[error("invalid turn suffix '{suffix}' in move '{token}'")]
    InvalidSuffix { token: String, suffix: String },
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let letter = chars.next().ok_or(NotationError::Empty)?;
        let face = Face::from_char(letter).ok_or(NotationError::UnknownFace(letter))?;

        let suffix = chars.as_str();
        let count = match suffix {
            "" => 1,
            "'" => -1,
            "2" | "2'" => 2,
            _ => {
                return Err(NotationError::InvalidSuffix {
                    token: token.to_string(),
                    suffix: suffix.to_string(),
                })
            }
        };

        Ok(Move::new(face, count))
    }
}

/// Parse a whitespace-separated move sequence such as `"R U R' U'"`.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, NotationError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Append-only move list that merges consecutive turns of the same face.
///
/// Pushing a move onto a history whose last entry turns the same face adds
/// the counts together and re-normalizes. A net count of zero removes the
/// entry, so self-cancelling moves never show up:
///
/// ```
/// use rust_cube::core::{Face, Move, MoveHistory};
///
/// let mut history = MoveHistory::new();
/// history.push(Move::new(Face::Front, 1));
/// history.push(Move::new(Face::Front, 1));
/// history.push(Move::new(Face::Front, 1));
/// assert_eq!(history.as_slice(), &[Move::new(Face::Front, -1)]);
///
/// history.push(Move::new(Face::Front, 1));
/// assert!(history.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Move>", into = "Vec<Move>")]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move, merging it into the last entry when the faces match.
    pub fn push(&mut self, mv: Move) {
        // Fields are public, so the count may not be folded yet.
        let mv = Move::new(mv.face, mv.count);
        if mv.is_identity() {
            return;
        }

        match self.moves.last_mut() {
            Some(last) if last.face == mv.face => {
                last.count = normalize_count(last.count + mv.count);
                if last.count == 0 {
                    self.moves.pop();
                }
            }
            _ => self.moves.push(mv),
        }
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The recorded moves, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate over the recorded moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Moves that undo the history, newest first.
    ///
    /// Applying these in order walks the cube back to the state it had
    /// before the first recorded move.
    pub fn unwind(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().rev().map(|mv| mv.inverse())
    }

    /// Consume the history and return the moves.
    #[must_use]
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl std::fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}

impl From<Vec<Move>> for MoveHistory {
    /// Replays `moves` through [`MoveHistory::push`], so the result is compacted.
    fn from(moves: Vec<Move>) -> Self {
        let mut history = Self::new();
        for mv in moves {
            history.push(mv);
        }
        history
    }
}

impl From<MoveHistory> for Vec<Move> {
    fn from(history: MoveHistory) -> Self {
        history.moves
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
