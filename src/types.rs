use bitflags::bitflags;

use crate::{color::Color, role::Role, square::Square};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Gets the English letter, uppercase for white pieces.
    pub fn char(self) -> char {
        self.color
            .fold(self.role.upper_char(), self.role.char())
    }

    /// Gets the piece from its English letter, with case encoding the color.
    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| role.of(Color::from_white(ch.is_ascii_uppercase())))
    }
}

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    /// Home corner of the participating rook.
    pub fn rook_home(self, color: Color) -> Square {
        match self {
            CastlingSide::KingSide => color.fold(Square::H1, Square::H8),
            CastlingSide::QueenSide => color.fold(Square::A1, Square::A8),
        }
    }

    /// Where the king ends up.
    pub fn king_to(self, color: Color) -> Square {
        match self {
            CastlingSide::KingSide => color.fold(Square::G1, Square::G8),
            CastlingSide::QueenSide => color.fold(Square::C1, Square::C8),
        }
    }

    /// Where the rook ends up. This is also the square the king passes
    /// through.
    pub fn rook_to(self, color: Color) -> Square {
        match self {
            CastlingSide::KingSide => color.fold(Square::F1, Square::F8),
            CastlingSide::QueenSide => color.fold(Square::D1, Square::D8),
        }
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

bitflags! {
    /// The four independent castling rights.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct CastlingRights: u8 {
        const WHITE_KING_SIDE = 0b0001;
        const WHITE_QUEEN_SIDE = 0b0010;
        const BLACK_KING_SIDE = 0b0100;
        const BLACK_QUEEN_SIDE = 0b1000;
    }
}

impl CastlingRights {
    /// The single right of the given color and side.
    pub fn single(color: Color, side: CastlingSide) -> CastlingRights {
        match side {
            CastlingSide::KingSide => color.fold(
                CastlingRights::WHITE_KING_SIDE,
                CastlingRights::BLACK_KING_SIDE,
            ),
            CastlingSide::QueenSide => color.fold(
                CastlingRights::WHITE_QUEEN_SIDE,
                CastlingRights::BLACK_QUEEN_SIDE,
            ),
        }
    }

    /// Both rights of the given color.
    pub fn both(color: Color) -> CastlingRights {
        CastlingRights::single(color, CastlingSide::KingSide)
            | CastlingRights::single(color, CastlingSide::QueenSide)
    }
}
