//! Threat map computed against the side to move.
//!
//! One pass over the opposing pieces yields everything legality filtering
//! needs: the set of attacked squares (with sliders seen through the king,
//! so the king cannot retreat along a checking ray), the number of checking
//! pieces, and for every square either no constraint, "moving here resolves
//! the current check", or "the piece standing here is pinned".

use crate::{
    board::Board,
    color::Color,
    geometry::{self, Direction},
    role::Role,
    square::Square,
};

/// What the threat map knows about a square.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Constraint {
    /// No constraint.
    #[default]
    None,
    /// While in check, moving a piece here resolves it, either by capturing
    /// the single checker or by interposing on its ray.
    Resolving,
    /// The piece standing here is pinned by the enemy slider on the given
    /// square and may only move along that ray.
    PinnedAt(Square),
}

/// Attack and constraint information for one side, valid for the current
/// board only.
#[derive(Clone, Debug)]
pub struct ThreatMap {
    attacked: [bool; 64],
    constraint: [Constraint; 64],
    checkers: u8,
}

enum RayState {
    Clear,
    Blocked(Square),
}

impl ThreatMap {
    /// Scans all pieces of `!us` and records their threats against the side
    /// `us`, whose king stands on `king`.
    pub fn compute(board: &Board, us: Color, king: Square) -> ThreatMap {
        let mut map = ThreatMap {
            attacked: [false; 64],
            constraint: [Constraint::None; 64],
            checkers: 0,
        };
        let them = !us;

        for index in 0..64 {
            let from = Square::new(index);
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            if piece.color != them {
                continue;
            }

            match piece.role {
                Role::King => {
                    for dir in Direction::ALL {
                        if let Some(to) = geometry::step(from, dir) {
                            map.attacked[to.index()] = true;
                        }
                    }
                }
                Role::Knight => {
                    for (df, dr) in geometry::KNIGHT_DELTAS {
                        if let Some(to) =
                            Square::from_coords(from.file() + df, from.rank() + dr)
                        {
                            map.attacked[to.index()] = true;
                            if to == king {
                                map.checkers += 1;
                                map.constraint[from.index()] = Constraint::Resolving;
                            }
                        }
                    }
                }
                Role::Pawn => {
                    let dirs = them.fold(
                        [Direction::NorthEast, Direction::NorthWest],
                        [Direction::SouthEast, Direction::SouthWest],
                    );
                    for dir in dirs {
                        if let Some(to) = geometry::step(from, dir) {
                            map.attacked[to.index()] = true;
                            if to == king {
                                map.checkers += 1;
                                map.constraint[from.index()] = Constraint::Resolving;
                            }
                        }
                    }
                }
                Role::Rook => map.scan_slider(board, us, king, from, &Direction::STRAIGHT),
                Role::Bishop => map.scan_slider(board, us, king, from, &Direction::DIAGONAL),
                Role::Queen => map.scan_slider(board, us, king, from, &Direction::ALL),
            }
        }

        map
    }

    fn scan_slider(
        &mut self,
        board: &Board,
        us: Color,
        king: Square,
        from: Square,
        dirs: &[Direction],
    ) {
        for &dir in dirs {
            self.scan_ray(board, us, king, from, dir);
        }
    }

    fn scan_ray(&mut self, board: &Board, us: Color, king: Square, from: Square, dir: Direction) {
        let mut state = RayState::Clear;
        for to in geometry::ray(from, dir) {
            match state {
                RayState::Clear => {
                    self.attacked[to.index()] = true;
                    if to == king {
                        // Check along this ray. The checker's square and the
                        // squares between it and the king resolve the check;
                        // the squares beyond the king stay attacked so the
                        // king cannot step away along the ray.
                        self.checkers += 1;
                        self.constraint[from.index()] = Constraint::Resolving;
                        for between in geometry::ray(from, dir) {
                            if between == king {
                                break;
                            }
                            self.constraint[between.index()] = Constraint::Resolving;
                        }
                        for behind in geometry::ray(king, dir) {
                            self.attacked[behind.index()] = true;
                            if board.piece_at(behind).is_some() {
                                break;
                            }
                        }
                        return;
                    }
                    match board.color_at(to) {
                        None => {}
                        Some(color) if color == us => state = RayState::Blocked(to),
                        Some(_) => return,
                    }
                }
                RayState::Blocked(blocker) => {
                    if to == king {
                        self.constraint[blocker.index()] = Constraint::PinnedAt(from);
                        return;
                    }
                    if board.piece_at(to).is_some() {
                        return;
                    }
                }
            }
        }
    }

    /// Tests if the enemy attacks `sq`. Squares shielded from a slider only
    /// by our own king still count as attacked.
    #[inline]
    pub fn is_attacked(&self, sq: Square) -> bool {
        self.attacked[sq.index()]
    }

    /// Gets the constraint recorded for `sq`.
    #[inline]
    pub fn constraint_at(&self, sq: Square) -> Constraint {
        self.constraint[sq.index()]
    }

    /// Number of pieces giving check.
    #[inline]
    pub fn checkers(&self) -> u8 {
        self.checkers
    }

    /// Tests if the king of the scanned side is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.checkers > 0
    }
}
