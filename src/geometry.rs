//! Precomputed board geometry.
//!
//! The tables here are `const`-evaluated before any position exists:
//! distances from every square to the board edge in each compass direction,
//! and the knight move deltas. All of move generation walks the board
//! through these tables instead of doing ad-hoc coordinate arithmetic.

use crate::square::Square;

/// The eight compass directions, clockwise starting from up the board
/// (white's point of view).
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, in clockwise order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The rook directions.
    pub const STRAIGHT: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// The square index offset of a single step.
    pub const fn offset(self) -> i8 {
        match self {
            Direction::North => 8,
            Direction::NorthEast => 9,
            Direction::East => 1,
            Direction::SouthEast => -7,
            Direction::South => -8,
            Direction::SouthWest => -9,
            Direction::West => -1,
            Direction::NorthWest => 7,
        }
    }

    /// Tests if this is a bishop direction.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast
                | Direction::SouthEast
                | Direction::SouthWest
                | Direction::NorthWest
        )
    }
}

/// The `(file, rank)` deltas of the eight knight moves.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

const fn edge_table() -> [[u8; 8]; 64] {
    let mut table = [[0; 8]; 64];
    let mut rank = 0;
    while rank < 8 {
        let mut file = 0;
        while file < 8 {
            let r = rank as u8;
            let f = file as u8;
            table[rank * 8 + file] = [
                7 - r,
                min(7 - r, 7 - f),
                7 - f,
                min(7 - f, r),
                r,
                min(r, f),
                f,
                min(f, 7 - r),
            ];
            file += 1;
        }
        rank += 1;
    }
    table
}

static EDGE_DISTANCE: [[u8; 8]; 64] = edge_table();

/// Number of squares between `sq` and the board edge in direction `dir`.
#[inline]
pub fn edge_distance(sq: Square, dir: Direction) -> u8 {
    EDGE_DISTANCE[sq.index()][dir as usize]
}

/// A single step from `sq`, or `None` at the board edge.
#[inline]
pub fn step(sq: Square, dir: Direction) -> Option<Square> {
    if edge_distance(sq, dir) > 0 {
        Some(Square::new((sq.index() as i8 + dir.offset()) as u8))
    } else {
        None
    }
}

/// Iterates the squares from `sq` (exclusive) to the board edge in
/// direction `dir`.
pub fn ray(sq: Square, dir: Direction) -> impl Iterator<Item = Square> {
    let start = sq.index() as i8;
    let offset = dir.offset();
    (1..=edge_distance(sq, dir) as i8).map(move |n| Square::new((start + offset * n) as u8))
}

/// Direction of travel from `a` to `b`, if they share a rank, file or
/// diagonal.
pub fn direction_between(a: Square, b: Square) -> Option<Direction> {
    let df = b.file() - a.file();
    let dr = b.rank() - a.rank();
    Some(match (df.signum(), dr.signum()) {
        (0, 1) => Direction::North,
        (0, -1) => Direction::South,
        (1, 0) => Direction::East,
        (-1, 0) => Direction::West,
        (1, 1) if df == dr => Direction::NorthEast,
        (-1, -1) if df == dr => Direction::SouthWest,
        (1, -1) if df == -dr => Direction::SouthEast,
        (-1, 1) if df == -dr => Direction::NorthWest,
        _ => return None,
    })
}

/// Whether `probe` lies on the straight line from `a` to `b`, strictly
/// after `a` and no further than `b`.
pub fn on_ray(a: Square, b: Square, probe: Square) -> bool {
    let Some(dir) = direction_between(a, b) else {
        return false;
    };
    for sq in ray(a, dir) {
        if sq == probe {
            return true;
        }
        if sq == b {
            return false;
        }
    }
    false
}
