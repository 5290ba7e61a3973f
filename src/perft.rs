use crate::position::Position;

/// Counts legal move paths of a given length.
///
/// Paths are not deduplicated, so transpositions are counted once for every
/// move order reaching them. Useful to validate move generation against
/// known results.
///
/// # Examples
///
/// ```
/// use shatranj::{perft, Position};
///
/// let pos = Position::default();
/// assert_eq!(perft(&pos, 1), 20);
/// assert_eq!(perft(&pos, 2), 400);
/// assert_eq!(perft(&pos, 3), 8902);
/// ```
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = pos.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .map(|m| {
                    let mut child = pos.clone();
                    child.play_unchecked(m);
                    perft(&child, depth - 1)
                })
                .sum()
        }
    }
}
