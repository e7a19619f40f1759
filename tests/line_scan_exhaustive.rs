//! Checks the origin-anchored scan against a brute-force window search.

use ml_connect_n::game::line_scan::{detects_win, winning_line};
use ml_connect_n::game::{Board, Cell, PlayerId, Position};

const DELTAS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// True iff some length-`k` window of `owner` cells passes through `origin`.
fn brute_force(board: &Board, origin: Position, owner: PlayerId, k: usize) -> bool {
    if board.get(origin) != Some(Cell::Owner(owner)) {
        return false;
    }
    for r in 0..board.rows() as isize {
        for c in 0..board.cols() as isize {
            for (dr, dc) in DELTAS {
                let window: Vec<(isize, isize)> =
                    (0..k as isize).map(|i| (r + i * dr, c + i * dc)).collect();
                let all_owned = window.iter().all(|&(wr, wc)| {
                    wr >= 0
                        && wc >= 0
                        && board.get(Position::new(wr as usize, wc as usize))
                            == Some(Cell::Owner(owner))
                });
                let covers_origin = window
                    .iter()
                    .any(|&(wr, wc)| wr == origin.row as isize && wc == origin.col as isize);
                if all_owned && covers_origin {
                    return true;
                }
            }
        }
    }
    false
}

fn board_from_code(mut code: u32, rows: usize, cols: usize) -> Board {
    let mut board = Board::empty(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            match code % 3 {
                1 => board.place(Position::new(row, col), PlayerId::First).unwrap(),
                2 => board.place(Position::new(row, col), PlayerId::Second).unwrap(),
                _ => {}
            }
            code /= 3;
        }
    }
    board
}

#[test]
fn every_three_by_three_board_matches_brute_force() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code, 3, 3);
        for (origin, _) in board.iter() {
            for owner in PlayerId::ALL {
                for k in 1..=3 {
                    assert_eq!(
                        detects_win(&board, origin, owner, k),
                        brute_force(&board, origin, owner, k),
                        "board code {code}, origin {origin}, owner {owner}, k {k}\n{board}"
                    );
                }
            }
        }
    }
}

#[test]
fn winning_line_is_a_contiguous_owned_run() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code, 3, 3);
        for (origin, cell) in board.iter() {
            let Some(owner) = cell.owner() else { continue };
            match winning_line(&board, origin, owner, 3) {
                Some(line) => {
                    assert!(line.len() >= 3);
                    assert!(line.contains(&origin));
                    assert!(line
                        .iter()
                        .all(|&pos| board.get(pos) == Some(Cell::Owner(owner))));
                }
                None => assert!(!detects_win(&board, origin, owner, 3)),
            }
        }
    }
}

#[test]
fn two_by_four_strip_matches_brute_force() {
    for code in 0..3u32.pow(8) {
        let board = board_from_code(code, 2, 4);
        for (origin, cell) in board.iter() {
            let Some(owner) = cell.owner() else { continue };
            for k in 2..=4 {
                assert_eq!(
                    detects_win(&board, origin, owner, k),
                    brute_force(&board, origin, owner, k)
                );
            }
        }
    }
}

#[test]
fn connect_four_edge_truncation() {
    // Anti-diagonal from the bottom-left corner that runs off the top edge
    let mut board = Board::empty(6, 7);
    for i in 0..4 {
        board.place(Position::new(5 - i, i), PlayerId::First).unwrap();
    }
    assert!(detects_win(&board, Position::new(5, 0), PlayerId::First, 4));
    assert!(detects_win(&board, Position::new(2, 3), PlayerId::First, 4));
    assert!(!detects_win(&board, Position::new(2, 3), PlayerId::First, 5));

    // Three in the rightmost column, touching the top edge
    let mut board = Board::empty(6, 7);
    for row in 0..3 {
        board.place(Position::new(row, 6), PlayerId::Second).unwrap();
    }
    assert!(!detects_win(&board, Position::new(0, 6), PlayerId::Second, 4));
    board.place(Position::new(3, 6), PlayerId::Second).unwrap();
    assert!(detects_win(&board, Position::new(0, 6), PlayerId::Second, 4));
}
