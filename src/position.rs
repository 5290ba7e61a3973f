use std::{error::Error, fmt};

use crate::{
    board::Board,
    color::{ByColor, Color},
    geometry::{self, Direction},
    m::{Move, MoveList},
    role::Role,
    square::Square,
    threats::{Constraint, ThreatMap},
    types::{CastlingRights, CastlingSide},
};

const PROMOTIONS: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

/// A playable position with turn, castling rights and en passant square.
///
/// # Examples
///
/// ```
/// use shatranj::{Position, Square};
///
/// let pos = Position::default();
/// assert_eq!(pos.legal_moves().len(), 20);
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Position {
    board: Board,
    turn: Color,
    castles: CastlingRights,
    ep_square: Option<Square>,
    kings: ByColor<Square>,
}

/// Error when setting up an unplayable [`Position`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PositionError {
    /// The given side has no king.
    MissingKing { color: Color },
    /// The given side has more than one king.
    TooManyKings { color: Color },
    /// A pawn stands on the first or eighth rank.
    PawnsOnBackrank,
    /// The en passant square does not match a plausible double pawn push.
    InvalidEnPassant,
    /// The side not to move is in check.
    OppositeCheck,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PositionError::MissingKing { color } => write!(f, "missing {color} king"),
            PositionError::TooManyKings { color } => write!(f, "too many {color} kings"),
            PositionError::PawnsOnBackrank => f.write_str("pawns on backrank"),
            PositionError::InvalidEnPassant => f.write_str("invalid en passant square"),
            PositionError::OppositeCheck => f.write_str("opposite check"),
        }
    }
}

impl Error for PositionError {}

/// Error when trying to play an illegal move.
#[derive(Clone, Debug)]
pub struct PlayError {
    pub m: Move,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move in this position: {}", self.m)
    }
}

impl Error for PlayError {}

impl Default for Position {
    /// The standard starting position.
    fn default() -> Position {
        Position {
            board: Board::default(),
            turn: Color::White,
            castles: CastlingRights::all(),
            ep_square: None,
            kings: ByColor {
                white: Square::E1,
                black: Square::E8,
            },
        }
    }
}

impl Position {
    /// Sets up a position from parts, validating that it is playable.
    ///
    /// Castling rights without the matching king or rook on its home square
    /// are silently discarded.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] if either side does not have exactly one
    /// king, pawns stand on a backrank, the en passant square is implausible,
    /// or the side not to move is in check.
    pub fn from_setup(
        board: Board,
        turn: Color,
        castles: CastlingRights,
        ep_square: Option<Square>,
    ) -> Result<Position, PositionError> {
        let mut kings = ByColor {
            white: None,
            black: None,
        };
        for index in 0..64 {
            let sq = Square::new(index);
            let Some(piece) = board.piece_at(sq) else {
                continue;
            };
            match piece.role {
                Role::King => {
                    let slot = kings.by_color_mut(piece.color);
                    if slot.is_some() {
                        return Err(PositionError::TooManyKings { color: piece.color });
                    }
                    *slot = Some(sq);
                }
                Role::Pawn if sq.rank() == 0 || sq.rank() == 7 => {
                    return Err(PositionError::PawnsOnBackrank);
                }
                _ => {}
            }
        }
        let kings = ByColor {
            white: kings
                .white
                .ok_or(PositionError::MissingKing { color: Color::White })?,
            black: kings
                .black
                .ok_or(PositionError::MissingKing { color: Color::Black })?,
        };

        let mut castles = castles;
        for color in Color::ALL {
            if *kings.by_color(color) != color.fold(Square::E1, Square::E8) {
                castles -= CastlingRights::both(color);
                continue;
            }
            for side in CastlingSide::ALL {
                if board.piece_at(side.rook_home(color)) != Some(color.rook()) {
                    castles -= CastlingRights::single(color, side);
                }
            }
        }

        if let Some(ep) = ep_square {
            let them = !turn;
            let pawn_rank = turn.fold(4, 3);
            let origin_rank = turn.fold(6, 1);
            if ep.rank() != turn.fold(5, 2)
                || board.piece_at(ep).is_some()
                || Square::from_coords(ep.file(), origin_rank)
                    .is_some_and(|sq| board.piece_at(sq).is_some())
                || Square::from_coords(ep.file(), pawn_rank)
                    .ok_or(PositionError::InvalidEnPassant)
                    .map(|sq| board.piece_at(sq))?
                    != Some(them.pawn())
            {
                return Err(PositionError::InvalidEnPassant);
            }
        }

        if board.is_attacked(kings.into_color(!turn), turn) {
            return Err(PositionError::OppositeCheck);
        }

        Ok(Position {
            board,
            turn,
            castles,
            ep_square,
            kings,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castles
    }

    /// The square a double pawn push just skipped, if the last move was one.
    #[inline]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    fn our_king(&self) -> Square {
        *self.kings.by_color(self.turn)
    }

    /// Computes the threats of the opponent against the side to move.
    pub fn threats(&self) -> ThreatMap {
        ThreatMap::compute(&self.board, self.turn, self.our_king())
    }

    /// Tests if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.is_attacked(self.our_king(), !self.turn)
    }

    /// Tests for checkmate.
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.legal_moves().is_empty()
    }

    /// Tests for stalemate.
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.legal_moves().is_empty()
    }

    /// Generates all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let threats = self.threats();

        for index in 0..64 {
            let from = Square::new(index);
            let Some(piece) = self.board.piece_at(from) else {
                continue;
            };
            if piece.color != self.turn {
                continue;
            }
            match piece.role {
                Role::Pawn => self.gen_pawn(&mut moves, &threats, from),
                Role::Knight => self.gen_knight(&mut moves, &threats, from),
                Role::Bishop => self.gen_slider(&mut moves, &threats, from, &Direction::DIAGONAL),
                Role::Rook => self.gen_slider(&mut moves, &threats, from, &Direction::STRAIGHT),
                Role::Queen => self.gen_slider(&mut moves, &threats, from, &Direction::ALL),
                Role::King => self.gen_king(&mut moves, &threats, from),
            }
        }

        moves
    }

    /// Legality filter shared by all non-king moves: a pinned piece may only
    /// move along its pin ray, and while in check the destination must
    /// resolve the check (double check leaves only king moves).
    fn admissible(&self, threats: &ThreatMap, from: Square, to: Square) -> bool {
        if let Constraint::PinnedAt(pinner) = threats.constraint_at(from) {
            if !geometry::on_ray(self.our_king(), pinner, to) {
                return false;
            }
        }
        match threats.checkers() {
            0 => true,
            1 => threats.constraint_at(to) == Constraint::Resolving,
            _ => false,
        }
    }

    fn push_normal(
        &self,
        moves: &mut MoveList,
        threats: &ThreatMap,
        role: Role,
        from: Square,
        to: Square,
    ) {
        if self.admissible(threats, from, to) {
            moves.push(Move::Normal {
                role,
                from,
                capture: self.board.role_at(to),
                to,
                promotion: None,
            });
        }
    }

    fn gen_slider(
        &self,
        moves: &mut MoveList,
        threats: &ThreatMap,
        from: Square,
        dirs: &[Direction],
    ) {
        let role = match self.board.role_at(from) {
            Some(role) => role,
            None => return,
        };
        for &dir in dirs {
            for to in geometry::ray(from, dir) {
                match self.board.color_at(to) {
                    Some(color) if color == self.turn => break,
                    Some(_) => {
                        self.push_normal(moves, threats, role, from, to);
                        break;
                    }
                    None => self.push_normal(moves, threats, role, from, to),
                }
            }
        }
    }

    fn gen_knight(&self, moves: &mut MoveList, threats: &ThreatMap, from: Square) {
        for (df, dr) in geometry::KNIGHT_DELTAS {
            if let Some(to) = Square::from_coords(from.file() + df, from.rank() + dr) {
                if self.board.color_at(to) != Some(self.turn) {
                    self.push_normal(moves, threats, Role::Knight, from, to);
                }
            }
        }
    }

    fn gen_pawn(&self, moves: &mut MoveList, threats: &ThreatMap, from: Square) {
        let forward = self.turn.fold(Direction::North, Direction::South);

        if let Some(to) = geometry::step(from, forward) {
            if self.board.piece_at(to).is_none() {
                self.push_pawn(moves, threats, from, to, None);
                if from.rank() == self.turn.fold(1, 6) {
                    if let Some(to2) = geometry::step(to, forward) {
                        if self.board.piece_at(to2).is_none() {
                            self.push_normal(moves, threats, Role::Pawn, from, to2);
                        }
                    }
                }
            }
        }

        let captures = self.turn.fold(
            [Direction::NorthEast, Direction::NorthWest],
            [Direction::SouthEast, Direction::SouthWest],
        );
        for dir in captures {
            let Some(to) = geometry::step(from, dir) else {
                continue;
            };
            match self.board.piece_at(to) {
                Some(piece) if piece.color != self.turn => {
                    self.push_pawn(moves, threats, from, to, Some(piece.role));
                }
                Some(_) => {}
                None => {
                    if Some(to) == self.ep_square {
                        self.push_en_passant(moves, from, to);
                    }
                }
            }
        }
    }

    fn push_pawn(
        &self,
        moves: &mut MoveList,
        threats: &ThreatMap,
        from: Square,
        to: Square,
        capture: Option<Role>,
    ) {
        if !self.admissible(threats, from, to) {
            return;
        }
        if to.rank() == self.turn.fold(7, 0) {
            for role in PROMOTIONS {
                moves.push(Move::Normal {
                    role: Role::Pawn,
                    from,
                    capture,
                    to,
                    promotion: Some(role),
                });
            }
        } else {
            moves.push(Move::Normal {
                role: Role::Pawn,
                from,
                capture,
                to,
                promotion: None,
            });
        }
    }

    /// En passant removes two pieces from the capturing pawn's surroundings
    /// at once, so no constraint lookup is safe here. Play the capture on a
    /// scratch board and verify the king directly.
    fn push_en_passant(&self, moves: &mut MoveList, from: Square, to: Square) {
        let Some(captured) = Square::from_coords(to.file(), from.rank()) else {
            return;
        };
        let mut board = self.board.clone();
        board.remove_piece_at(from);
        board.remove_piece_at(captured);
        board.set_piece_at(to, self.turn.pawn());
        if !board.is_attacked(self.our_king(), !self.turn) {
            moves.push(Move::EnPassant { from, to });
        }
    }

    fn gen_king(&self, moves: &mut MoveList, threats: &ThreatMap, from: Square) {
        for dir in Direction::ALL {
            let Some(to) = geometry::step(from, dir) else {
                continue;
            };
            if self.board.color_at(to) == Some(self.turn) || threats.is_attacked(to) {
                continue;
            }
            moves.push(Move::Normal {
                role: Role::King,
                from,
                capture: self.board.role_at(to),
                to,
                promotion: None,
            });
        }

        if threats.in_check() {
            return;
        }

        'sides: for side in CastlingSide::ALL {
            if !self
                .castles
                .contains(CastlingRights::single(self.turn, side))
            {
                continue;
            }
            let rook = side.rook_home(self.turn);
            if self.board.piece_at(rook) != Some(self.turn.rook()) {
                continue;
            }
            let dir = match side {
                CastlingSide::KingSide => Direction::East,
                CastlingSide::QueenSide => Direction::West,
            };
            for sq in geometry::ray(from, dir) {
                if sq == rook {
                    break;
                }
                if self.board.piece_at(sq).is_some() {
                    continue 'sides;
                }
            }
            // The king's path must be safe; the rook's may pass through
            // anything.
            if threats.is_attacked(side.rook_to(self.turn))
                || threats.is_attacked(side.king_to(self.turn))
            {
                continue;
            }
            moves.push(Move::Castle { king: from, rook });
        }
    }

    /// Plays a move without checking legality. The caller is responsible for
    /// only passing moves from [`Position::legal_moves`].
    pub fn play_unchecked(&mut self, m: &Move) {
        let us = self.turn;

        match *m {
            Move::Normal {
                role,
                from,
                to,
                promotion,
                ..
            } => {
                self.discard_castling_square(from);
                self.discard_castling_square(to);

                self.ep_square = if role == Role::Pawn && (from.rank() - to.rank()).abs() == 2 {
                    Square::from_coords(from.file(), (from.rank() + to.rank()) / 2)
                } else {
                    None
                };

                self.board.remove_piece_at(from);
                self.board
                    .set_piece_at(to, promotion.unwrap_or(role).of(us));

                if role == Role::King {
                    *self.kings.by_color_mut(us) = to;
                }
            }
            Move::EnPassant { from, to } => {
                if let Some(captured) = Square::from_coords(to.file(), from.rank()) {
                    self.board.remove_piece_at(captured);
                }
                self.board.remove_piece_at(from);
                self.board.set_piece_at(to, us.pawn());
                self.ep_square = None;
            }
            Move::Castle { king, rook } => {
                let side = if rook > king {
                    CastlingSide::KingSide
                } else {
                    CastlingSide::QueenSide
                };
                self.board.remove_piece_at(king);
                self.board.remove_piece_at(rook);
                self.board
                    .set_piece_at(side.king_to(us), us.king());
                self.board.set_piece_at(side.rook_to(us), us.rook());
                self.castles -= CastlingRights::both(us);
                *self.kings.by_color_mut(us) = side.king_to(us);
                self.ep_square = None;
            }
        }

        self.turn = !us;
    }

    /// Validates the move against [`Position::legal_moves`] and plays it.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the move is not legal, leaving the position
    /// unchanged.
    pub fn play(&mut self, m: &Move) -> Result<(), PlayError> {
        if self.legal_moves().contains(m) {
            self.play_unchecked(m);
            Ok(())
        } else {
            Err(PlayError { m: *m })
        }
    }

    /// Castling rights evaporate when the king or a rook leaves its home
    /// square, and also when an enemy piece captures a rook at home.
    fn discard_castling_square(&mut self, sq: Square) {
        if sq == Square::E1 {
            self.castles -= CastlingRights::both(Color::White);
        } else if sq == Square::H1 {
            self.castles -= CastlingRights::WHITE_KING_SIDE;
        } else if sq == Square::A1 {
            self.castles -= CastlingRights::WHITE_QUEEN_SIDE;
        } else if sq == Square::E8 {
            self.castles -= CastlingRights::both(Color::Black);
        } else if sq == Square::H8 {
            self.castles -= CastlingRights::BLACK_KING_SIDE;
        } else if sq == Square::A8 {
            self.castles -= CastlingRights::BLACK_QUEEN_SIDE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uci::Uci;

    fn setup(
        pieces: &[(Square, crate::types::Piece)],
        turn: Color,
        castles: CastlingRights,
        ep_square: Option<Square>,
    ) -> Position {
        let mut board = Board::empty();
        for &(sq, piece) in pieces {
            board.set_piece_at(sq, piece);
        }
        Position::from_setup(board, turn, castles, ep_square).unwrap()
    }

    fn play_uci(pos: &mut Position, s: &str) {
        let uci: Uci = s.parse().unwrap();
        let legals = pos.legal_moves();
        let m = uci.to_move(pos, &legals).unwrap();
        pos.play_unchecked(&m);
    }

    #[test]
    fn test_starting_moves() {
        let pos = Position::default();
        let moves = pos.legal_moves();
        assert_eq!(moves.len(), 20);
        assert!(!pos.is_check());
        assert!(!pos.is_checkmate());
        assert!(!pos.is_stalemate());
    }

    #[test]
    fn test_pinned_rook_stays_on_ray() {
        let pos = setup(
            &[
                (Square::E1, Color::White.king()),
                (Square::E4, Color::White.rook()),
                (Square::E8, Color::Black.rook()),
                (Square::H8, Color::Black.king()),
            ],
            Color::White,
            CastlingRights::empty(),
            None,
        );
        let rook_targets: Vec<Square> = pos
            .legal_moves()
            .iter()
            .filter(|m| m.role() == Role::Rook)
            .map(Move::to)
            .collect();
        assert_eq!(
            rook_targets,
            vec![
                Square::E5,
                Square::E6,
                Square::E7,
                Square::E8,
                Square::E3,
                Square::E2,
            ]
        );
    }

    #[test]
    fn test_castling_through_attack_denied() {
        // Black rook on f8 covers f1, the square the white king passes
        // through when castling short.
        let pos = setup(
            &[
                (Square::E1, Color::White.king()),
                (Square::A1, Color::White.rook()),
                (Square::H1, Color::White.rook()),
                (Square::F8, Color::Black.rook()),
                (Square::G8, Color::Black.king()),
            ],
            Color::White,
            CastlingRights::both(Color::White),
            None,
        );
        let moves = pos.legal_moves();
        assert!(!moves.contains(&Move::Castle {
            king: Square::E1,
            rook: Square::H1,
        }));
        assert!(moves.contains(&Move::Castle {
            king: Square::E1,
            rook: Square::A1,
        }));
    }

    #[test]
    fn test_castling_long_ignores_attacked_b_file() {
        // b1 may be attacked, the king never steps on it.
        let pos = setup(
            &[
                (Square::E1, Color::White.king()),
                (Square::A1, Color::White.rook()),
                (Square::B8, Color::Black.rook()),
                (Square::H8, Color::Black.king()),
            ],
            Color::White,
            CastlingRights::WHITE_QUEEN_SIDE,
            None,
        );
        assert!(pos.legal_moves().contains(&Move::Castle {
            king: Square::E1,
            rook: Square::A1,
        }));
    }

    #[test]
    fn test_promotion_choices() {
        let pos = setup(
            &[
                (Square::B7, Color::White.pawn()),
                (Square::H1, Color::White.king()),
                (Square::A8, Color::Black.rook()),
                (Square::H8, Color::Black.king()),
            ],
            Color::White,
            CastlingRights::empty(),
            None,
        );
        let moves = pos.legal_moves();
        // Push to b8 and capture on a8, with four roles each.
        assert_eq!(moves.iter().filter(|m| m.is_promotion()).count(), 8);
        assert!(moves.contains(&Move::Normal {
            role: Role::Pawn,
            from: Square::B7,
            capture: Some(Role::Rook),
            to: Square::A8,
            promotion: Some(Role::Knight),
        }));
    }

    #[test]
    fn test_en_passant_offer_expires() {
        let mut pos = Position::default();
        play_uci(&mut pos, "e2e4");
        play_uci(&mut pos, "a7a6");
        play_uci(&mut pos, "e4e5");
        play_uci(&mut pos, "d7d5");
        assert_eq!(pos.ep_square(), Some(Square::D6));
        assert!(pos.legal_moves().contains(&Move::EnPassant {
            from: Square::E5,
            to: Square::D6,
        }));

        play_uci(&mut pos, "b1c3");
        play_uci(&mut pos, "a6a5");
        assert_eq!(pos.ep_square(), None);
        assert!(!pos.legal_moves().iter().any(Move::is_en_passant));
    }

    #[test]
    fn test_rook_move_revokes_right() {
        let mut pos = Position::default();
        play_uci(&mut pos, "h2h4");
        play_uci(&mut pos, "h7h5");
        play_uci(&mut pos, "h1h3");
        assert_eq!(
            pos.castling_rights(),
            CastlingRights::all() - CastlingRights::WHITE_KING_SIDE
        );
    }

    #[test]
    fn test_rook_capture_revokes_right() {
        let mut pos = setup(
            &[
                (Square::B2, Color::White.bishop()),
                (Square::E1, Color::White.king()),
                (Square::E8, Color::Black.king()),
                (Square::A8, Color::Black.rook()),
                (Square::H8, Color::Black.rook()),
            ],
            Color::White,
            CastlingRights::both(Color::Black),
            None,
        );
        play_uci(&mut pos, "b2h8");
        assert_eq!(pos.castling_rights(), CastlingRights::BLACK_QUEEN_SIDE);
    }

    #[test]
    fn test_fools_mate() {
        let mut pos = Position::default();
        for s in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            play_uci(&mut pos, s);
        }
        assert!(pos.is_check());
        assert!(pos.is_checkmate());
        assert!(!pos.is_stalemate());
        assert!(pos.legal_moves().is_empty());
    }

    #[test]
    fn test_stalemate() {
        let pos = setup(
            &[
                (Square::A8, Color::Black.king()),
                (Square::B6, Color::White.queen()),
                (Square::C7, Color::White.king()),
            ],
            Color::Black,
            CastlingRights::empty(),
            None,
        );
        assert!(pos.is_stalemate());
        assert!(!pos.is_checkmate());
    }

    #[test]
    fn test_en_passant_would_expose_king() {
        // Removing both pawns from the fifth rank uncovers the rook on a5.
        let mut pos = setup(
            &[
                (Square::H5, Color::White.king()),
                (Square::F5, Color::White.pawn()),
                (Square::A5, Color::Black.rook()),
                (Square::E7, Color::Black.pawn()),
                (Square::A8, Color::Black.king()),
            ],
            Color::Black,
            CastlingRights::empty(),
            None,
        );
        play_uci(&mut pos, "e7e5");
        assert_eq!(pos.ep_square(), Some(Square::E6));
        assert!(!pos.legal_moves().iter().any(Move::is_en_passant));
    }

    #[test]
    fn test_play_rejects_illegal() {
        let mut pos = Position::default();
        let m = Move::Normal {
            role: Role::Pawn,
            from: Square::E2,
            capture: None,
            to: Square::E5,
            promotion: None,
        };
        let before = pos.clone();
        assert!(pos.play(&m).is_err());
        assert_eq!(pos, before);

        let ok = Move::Normal {
            role: Role::Pawn,
            from: Square::E2,
            capture: None,
            to: Square::E4,
            promotion: None,
        };
        assert!(pos.play(&ok).is_ok());
        assert_eq!(pos.turn(), Color::Black);
        assert_ne!(pos, before);
    }

    #[test]
    fn test_from_setup_errors() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        assert_eq!(
            Position::from_setup(board.clone(), Color::White, CastlingRights::empty(), None),
            Err(PositionError::MissingKing { color: Color::Black })
        );

        board.set_piece_at(Square::E8, Color::Black.king());
        board.set_piece_at(Square::A3, Color::Black.king());
        assert_eq!(
            Position::from_setup(board, Color::White, CastlingRights::empty(), None),
            Err(PositionError::TooManyKings { color: Color::Black })
        );

        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E8, Color::Black.king());
        board.set_piece_at(Square::A1, Color::White.pawn());
        assert_eq!(
            Position::from_setup(board, Color::White, CastlingRights::empty(), None),
            Err(PositionError::PawnsOnBackrank)
        );

        // A rook off the black king's file and rank is harmless, one on the
        // open e-file gives check to the side that already moved.
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E8, Color::Black.king());
        board.set_piece_at(Square::H5, Color::White.rook());
        assert!(
            Position::from_setup(board.clone(), Color::White, CastlingRights::empty(), None)
                .is_ok()
        );
        board.remove_piece_at(Square::H5);
        board.set_piece_at(Square::E4, Color::White.rook());
        assert_eq!(
            Position::from_setup(board, Color::White, CastlingRights::empty(), None),
            Err(PositionError::OppositeCheck)
        );
    }

    #[test]
    fn test_from_setup_discards_displaced_rights() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::H1, Color::White.rook());
        board.set_piece_at(Square::G8, Color::Black.king());
        board.set_piece_at(Square::A8, Color::Black.rook());
        let pos =
            Position::from_setup(board, Color::White, CastlingRights::all(), None).unwrap();
        // The black king left home, the white queenside rook is absent.
        assert_eq!(pos.castling_rights(), CastlingRights::WHITE_KING_SIDE);
    }

    #[test]
    fn test_from_setup_validates_ep() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E8, Color::Black.king());
        board.set_piece_at(Square::D5, Color::Black.pawn());
        assert!(Position::from_setup(
            board.clone(),
            Color::White,
            CastlingRights::empty(),
            Some(Square::D6),
        )
        .is_ok());
        assert_eq!(
            Position::from_setup(
                board,
                Color::White,
                CastlingRights::empty(),
                Some(Square::E6),
            ),
            Err(PositionError::InvalidEnPassant)
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut pos = Position::default();
        let snapshot = pos.clone();
        play_uci(&mut pos, "g1f3");
        assert_ne!(pos, snapshot);
        assert_eq!(snapshot.legal_moves().len(), 20);
    }
}
