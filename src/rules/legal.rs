//! Legal-move enumeration and the terminal test.

use crate::core::{Board, Coord, Direction, GameState, Move};

/// Every playable move: the source is occupied and the destination is an
/// empty in-bounds cell.
///
/// Row-major by source, then [`Direction::PRIORITY`]. Empty once the game is
/// over. Exactly the moves for which `apply_move` does not report `blocked`.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if state.game_over {
        return Vec::new();
    }
    state
        .board
        .tiles()
        .flat_map(|(from, _)| Direction::PRIORITY.into_iter().map(move |dir| Move::new(from, dir)))
        .filter(|mv| state.board.is_vacant(mv.target()))
        .collect()
}

/// Whether `mv` would be accepted by the engine on `board`.
#[must_use]
pub fn is_playable(board: &Board, mv: Move) -> bool {
    board.get(mv.from).is_some() && board.is_vacant(mv.target())
}

/// No tile can slide and no adjacent pair can merge.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    !board.has_open_slide() && !board.has_adjacent_pair()
}

/// Whether any tile at all could move from `from`.
#[must_use]
pub fn can_move_from(board: &Board, from: Coord) -> bool {
    board.get(from).is_some() && from.neighbors().any(|n| board.is_vacant(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tile, TileId};

    fn checkerboard() -> Board {
        Board::from_tiles(Coord::all().zip(1u32..).map(|(at, id)| {
            let value = if (at.row + at.col) % 2 == 0 { 1 } else { 2 };
            (at, Tile::new(TileId(id), value))
        }))
    }

    #[test]
    fn test_legal_moves_order() {
        let state = GameState::from_tiles(
            1,
            [
                (Coord::new(3, 2), Tile::new(TileId(2), 2)),
                (Coord::new(1, 4), Tile::new(TileId(1), 1)),
            ],
        );

        let moves = legal_moves(&state);

        assert_eq!(
            moves,
            vec![
                Move::at(1, 4, Direction::Up),
                Move::at(1, 4, Direction::Left),
                Move::at(1, 4, Direction::Down),
                Move::at(3, 2, Direction::Up),
                Move::at(3, 2, Direction::Left),
                Move::at(3, 2, Direction::Right),
                Move::at(3, 2, Direction::Down),
            ]
        );
    }

    #[test]
    fn test_no_moves_when_over() {
        let mut state = GameState::from_tiles(1, [(Coord::new(0, 0), Tile::new(TileId(1), 1))]);
        state.game_over = true;

        assert!(legal_moves(&state).is_empty());
    }

    #[test]
    fn test_corner_tile_blocked_by_neighbours() {
        let board = Board::from_tiles([
            (Coord::new(0, 0), Tile::new(TileId(1), 1)),
            (Coord::new(0, 1), Tile::new(TileId(2), 2)),
            (Coord::new(1, 0), Tile::new(TileId(3), 3)),
        ]);

        assert!(!can_move_from(&board, Coord::new(0, 0)));
        assert!(can_move_from(&board, Coord::new(0, 1)));
        assert!(!is_playable(&board, Move::at(0, 0, Direction::Up)));
        assert!(!is_playable(&board, Move::at(2, 2, Direction::Up)));
        assert!(is_playable(&board, Move::at(0, 1, Direction::Right)));
    }

    #[test]
    fn test_checkerboard_is_terminal() {
        assert!(is_terminal(&checkerboard()));
    }

    #[test]
    fn test_full_board_with_pair_is_not_terminal() {
        let mut board = checkerboard();
        if let Some(tile) = board.get_mut(Coord::new(0, 0)) {
            tile.value = 2;
        }

        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_empty_cell_is_not_terminal() {
        let mut board = checkerboard();
        board.take(Coord::new(4, 4));

        assert!(!is_terminal(&board));
    }
}
