//! Tests for win detection against every possible board.

use strictly_tictactoe::{Board, Cell, Player, Position, WINNING_LINES, detect_winner};

/// Decodes `n` (0..3^9) as a board, one base-3 digit per cell.
fn board_from_code(mut n: u32) -> Board {
    let mut cells = [Cell::Empty; 9];
    for cell in &mut cells {
        *cell = match n % 3 {
            0 => Cell::Empty,
            1 => Cell::Occupied(Player::X),
            _ => Cell::Occupied(Player::O),
        };
        n /= 3;
    }
    Board::from_cells(cells)
}

/// Straightforward reference: the first uniform, non-empty line.
fn first_line(board: &Board) -> Option<(Player, [usize; 3])> {
    WINNING_LINES.iter().find_map(|line| {
        let cells = line.map(|pos| board.get(pos));
        match cells[0] {
            Cell::Occupied(p) if cells.iter().all(|c| *c == cells[0]) => {
                Some((p, line.map(Position::to_index)))
            }
            _ => None,
        }
    })
}

#[test]
fn test_detect_winner_matches_reference_on_all_boards() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let got = detect_winner(&board).map(|w| (w.player(), w.indices()));
        assert_eq!(got, first_line(&board), "board:\n{}", board.display());
    }
}

#[test]
fn test_line_table_order() {
    let indices: Vec<[usize; 3]> = WINNING_LINES
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_every_line_wins_for_both_players() {
    for line in WINNING_LINES {
        for player in [Player::X, Player::O] {
            let board = line
                .iter()
                .fold(Board::new(), |b, pos| b.with_mark(*pos, player));
            let win = detect_winner(&board).expect("line is complete");
            assert_eq!(win.player(), player);
            assert_eq!(win.line(), line);
        }
    }
}

#[test]
fn test_full_board_detection() {
    assert!(!Board::new().is_full());
    assert!(board_from_code(3u32.pow(9) - 1).is_full());
}
