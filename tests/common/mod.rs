use shatranj::{Board, CastlingRights, Color, Piece, Position, Square};

/// Builds a position from an ASCII grid of eight whitespace-separated rows,
/// eighth rank first, with `.` for empty squares and English piece letters
/// otherwise.
pub fn position(
    grid: &str,
    turn: Color,
    castles: CastlingRights,
    ep_square: Option<Square>,
) -> Position {
    let mut board = Board::empty();
    for (row, line) in grid.trim().lines().enumerate() {
        let rank = 7 - row as i8;
        for (file, ch) in line.split_whitespace().enumerate() {
            let ch = ch.chars().next().unwrap();
            if ch == '.' {
                continue;
            }
            let piece = Piece::from_char(ch).unwrap();
            board.set_piece_at(Square::from_coords(file as i8, rank).unwrap(), piece);
        }
    }
    Position::from_setup(board, turn, castles, ep_square).unwrap()
}
