//! Origin-anchored run detection along the four line directions.

use super::board::{Board, Cell, Position};
use super::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left-right
    Horizontal,
    /// Top-bottom
    Vertical,
    /// Top-left to bottom-right, `\`
    Diagonal,
    /// Bottom-left to top-right, `/`
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// (row, col) step in the positive sense of the line.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }
}

/// Number of consecutive `owner` cells stepping away from `origin` by
/// `(dr, dc)`, excluding the origin itself.
fn ray(board: &Board, origin: Position, owner: PlayerId, (dr, dc): (isize, isize)) -> usize {
    let mut count = 0;
    let mut r = origin.row as isize + dr;
    let mut c = origin.col as isize + dc;
    while board.get_signed(r, c) == Some(Cell::Owner(owner)) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Length of the maximal `owner` run through `origin` along `dir`.
///
/// Returns 0 when the origin is off the grid or not owned by `owner`.
pub fn run_length(board: &Board, origin: Position, owner: PlayerId, dir: Direction) -> usize {
    if board.get(origin) != Some(Cell::Owner(owner)) {
        return 0;
    }
    let (dr, dc) = dir.delta();
    1 + ray(board, origin, owner, (dr, dc)) + ray(board, origin, owner, (-dr, -dc))
}

/// Check whether the piece at `origin` completes a run of `win_length`.
pub fn detects_win(board: &Board, origin: Position, owner: PlayerId, win_length: usize) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| run_length(board, origin, owner, dir) >= win_length)
}

/// Cells of the first winning run through `origin`, ordered along the line.
pub fn winning_line(
    board: &Board,
    origin: Position,
    owner: PlayerId,
    win_length: usize,
) -> Option<Vec<Position>> {
    let dir = Direction::ALL
        .into_iter()
        .find(|&dir| run_length(board, origin, owner, dir) >= win_length)?;

    let (dr, dc) = dir.delta();
    let back = ray(board, origin, owner, (-dr, -dc)) as isize;
    let len = run_length(board, origin, owner, dir) as isize;
    let start_r = origin.row as isize - back * dr;
    let start_c = origin.col as isize - back * dc;

    Some(
        (0..len)
            .map(|i| Position::new((start_r + i * dr) as usize, (start_c + i * dc) as usize))
            .collect(),
    )
}
