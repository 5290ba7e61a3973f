//! Parse and write moves in UCI notation.
//!
//! # Examples
//!
//! ```
//! use shatranj::{uci::Uci, Position};
//!
//! let uci: Uci = "g1f3".parse()?;
//!
//! let pos = Position::default();
//! let legals = pos.legal_moves();
//! let m = uci.to_move(&pos, &legals)?;
//! assert_eq!(m.to_string(), "Ng1-f3");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{
    m::{Move, MoveList},
    position::Position,
    role::Role,
    square::Square,
};

/// A move in UCI notation: origin and target square, and the promotion role
/// in lowercase, if any. Castling is encoded as the king's two-square hop,
/// e.g. `e1g1`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Uci {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

/// Error when parsing an invalid UCI string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseUciError;

impl fmt::Display for ParseUciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid uci")
    }
}

impl Error for ParseUciError {}

/// Error when a well-formed UCI move cannot be played.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IllegalUciError {
    /// The origin square is not occupied by the side to move.
    ForeignPiece,
    /// The move is not among the legal moves.
    Illegal,
}

impl fmt::Display for IllegalUciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            IllegalUciError::ForeignPiece => {
                "origin square is not occupied by the side to move"
            }
            IllegalUciError::Illegal => "move is not legal in this position",
        })
    }
}

impl Error for IllegalUciError {}

impl FromStr for Uci {
    type Err = ParseUciError;

    fn from_str(s: &str) -> Result<Uci, ParseUciError> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(ParseUciError);
        }
        let from = s[0..2].parse().map_err(|_| ParseUciError)?;
        let to = s[2..4].parse().map_err(|_| ParseUciError)?;
        let promotion = match s.as_bytes().get(4) {
            Some(&ch) => Some(Role::from_char(char::from(ch)).ok_or(ParseUciError)?),
            None => None,
        };
        Ok(Uci {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Uci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.char())?;
        }
        Ok(())
    }
}

impl From<&Move> for Uci {
    fn from(m: &Move) -> Uci {
        Uci {
            from: m.from(),
            to: m.to(),
            promotion: m.promotion(),
        }
    }
}

impl From<Move> for Uci {
    fn from(m: Move) -> Uci {
        Uci::from(&m)
    }
}

impl Uci {
    /// Finds the matching [`Move`] among the legal moves of `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalUciError`] distinguishing an origin square that does
    /// not hold a piece of the side to move from a move that is merely
    /// illegal.
    pub fn to_move(&self, pos: &Position, legals: &MoveList) -> Result<Move, IllegalUciError> {
        if pos.board().color_at(self.from) != Some(pos.turn()) {
            return Err(IllegalUciError::ForeignPiece);
        }
        legals
            .iter()
            .find(|m| Uci::from(*m) == *self)
            .copied()
            .ok_or(IllegalUciError::Illegal)
    }
}
