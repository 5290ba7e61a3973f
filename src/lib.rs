//! A library for chess rules and legal move generation on a mailbox board.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use shatranj::Position;
//!
//! let pos = Position::default();
//! let legals = pos.legal_moves();
//! assert_eq!(legals.len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! use shatranj::{Move, Position, Role, Square};
//!
//! let mut pos = Position::default();
//!
//! // 1. e4
//! pos.play(&Move::Normal {
//!     role: Role::Pawn,
//!     from: Square::E2,
//!     to: Square::E4,
//!     capture: None,
//!     promotion: None,
//! })?;
//! # Ok::<_, shatranj::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! # use shatranj::Position;
//! # let pos = Position::default();
//! assert!(!pos.is_checkmate());
//! assert!(!pos.is_stalemate());
//! ```
//!
//! Also parses moves in plain coordinate notation, see [`uci`].

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

mod board;
mod color;
mod m;
mod perft;
mod position;
mod role;
mod square;
mod threats;
mod types;

pub mod geometry;
pub mod uci;

pub use board::Board;
pub use color::{ByColor, Color};
pub use m::{Move, MoveList};
pub use perft::perft;
pub use position::{PlayError, Position, PositionError};
pub use role::Role;
pub use square::{ParseSquareError, Square};
pub use threats::{Constraint, ThreatMap};
pub use types::{CastlingRights, CastlingSide, Piece};
