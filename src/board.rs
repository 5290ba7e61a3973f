use std::fmt;

use crate::{
    color::Color,
    geometry::{self, Direction},
    role::Role,
    square::Square,
    types::Piece,
};

/// Piece positions on a board: 64 cells indexed by [`Square`].
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// An empty board.
    pub fn empty() -> Board {
        Board { cells: [None; 64] }
    }

    /// Gets the piece at the given square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Gets the piece type at the given square.
    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    /// Gets the color of the piece at the given square.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    /// Puts a piece on the given square, replacing any existing piece.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = Some(piece);
    }

    /// Removes and returns the piece at the given square.
    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Finds the king of the given color.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        (0..64)
            .map(Square::new)
            .find(|&sq| self.piece_at(sq) == Some(Role::King.of(color)))
    }

    /// Tests if `sq` is reachable by any piece of color `by`.
    ///
    /// This is a reverse scan from `sq`, independent of the threat map. It
    /// backs en passant legality (where the capture is simulated on a board
    /// copy) and setup validation.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        for (df, dr) in geometry::KNIGHT_DELTAS {
            if let Some(from) = Square::from_coords(sq.file() + df, sq.rank() + dr) {
                if self.piece_at(from) == Some(Role::Knight.of(by)) {
                    return true;
                }
            }
        }

        // A pawn of `by` attacks sq from one rank behind, seen from `by`.
        let pawn_dirs = by.fold(
            [Direction::SouthEast, Direction::SouthWest],
            [Direction::NorthEast, Direction::NorthWest],
        );
        for dir in pawn_dirs {
            if let Some(from) = geometry::step(sq, dir) {
                if self.piece_at(from) == Some(Role::Pawn.of(by)) {
                    return true;
                }
            }
        }

        for dir in Direction::ALL {
            let mut steps = 0;
            for from in geometry::ray(sq, dir) {
                steps += 1;
                let Some(piece) = self.piece_at(from) else {
                    continue;
                };
                if piece.color == by {
                    let reaches = match piece.role {
                        Role::Queen => true,
                        Role::Rook => !dir.is_diagonal(),
                        Role::Bishop => dir.is_diagonal(),
                        Role::King => steps == 1,
                        _ => false,
                    };
                    if reaches {
                        return true;
                    }
                }
                break;
            }
        }

        false
    }
}

impl Default for Board {
    /// The standard starting arrangement.
    fn default() -> Board {
        const BACK_RANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];
        let mut board = Board::empty();
        for file in 0..8 {
            board.set_piece_at(Square::new(file), BACK_RANK[file as usize].of(Color::White));
            board.set_piece_at(Square::new(8 + file), Color::White.pawn());
            board.set_piece_at(Square::new(48 + file), Color::Black.pawn());
            board.set_piece_at(
                Square::new(56 + file),
                BACK_RANK[file as usize].of(Color::Black),
            );
        }
        board
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = Square::new(rank * 8 + file);
                let ch = self.piece_at(sq).map_or('.', Piece::char);
                write!(f, "{ch}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
