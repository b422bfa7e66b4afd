//! The 5x5 tile grid.
//!
//! `Board` is a fixed-size array of optional tiles. `Tile` is `Copy`, so
//! cloning a board is a plain deep copy: a move resolves on its own clone
//! and the caller's board is never touched.
//!
//! All iteration is row-major. Accessors take [`Coord`] and treat
//! off-board coordinates as "no tile here".

use serde::{Deserialize, Serialize};

use super::coord::{Coord, BOARD_SIZE};
use super::tile::{Tile, TileId};

/// The tile grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Tile>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from `(coord, tile)` placements.
    ///
    /// Off-board placements are ignored. Later placements overwrite
    /// earlier ones at the same cell.
    #[must_use]
    pub fn from_tiles(placements: impl IntoIterator<Item = (Coord, Tile)>) -> Self {
        let mut board = Self::new();
        for (coord, tile) in placements {
            board.place(coord, tile);
        }
        board
    }

    /// The tile at `coord`, if any.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        let (r, c) = coord.index()?;
        self.cells[r][c].as_ref()
    }

    /// Mutable access to the tile at `coord`, if any.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        let (r, c) = coord.index()?;
        self.cells[r][c].as_mut()
    }

    /// Is `coord` on the board and unoccupied?
    #[must_use]
    pub fn is_vacant(&self, coord: Coord) -> bool {
        match coord.index() {
            Some((r, c)) => self.cells[r][c].is_none(),
            None => false,
        }
    }

    /// Put a tile at `coord`, returning whatever was there.
    ///
    /// Off-board coordinates are ignored and return `None`.
    pub fn place(&mut self, coord: Coord, tile: Tile) -> Option<Tile> {
        let (r, c) = coord.index()?;
        self.cells[r][c].replace(tile)
    }

    /// Remove and return the tile at `coord`.
    pub fn take(&mut self, coord: Coord) -> Option<Tile> {
        let (r, c) = coord.index()?;
        self.cells[r][c].take()
    }

    /// Iterate over occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        Coord::all().filter_map(move |coord| self.get(coord).map(|tile| (coord, tile)))
    }

    /// Iterate mutably over every tile, in row-major order.
    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.cells.iter_mut().flatten().flatten()
    }

    /// Unoccupied cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::all().filter(|&coord| self.is_vacant(coord)).collect()
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Is every cell occupied?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tile_count() == BOARD_SIZE * BOARD_SIZE
    }

    /// Where is the tile with this id?
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<Coord> {
        self.tiles().find(|(_, tile)| tile.id == id).map(|(coord, _)| coord)
    }

    /// Does any tile have an empty neighbour to slide into?
    #[must_use]
    pub fn has_open_slide(&self) -> bool {
        self.tiles()
            .any(|(coord, _)| coord.neighbors().any(|n| self.is_vacant(n)))
    }

    /// Are any two orthogonally adjacent tiles equal in value?
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        self.tiles().any(|(coord, tile)| {
            [Coord::new(coord.row, coord.col + 1), Coord::new(coord.row + 1, coord.col)]
                .into_iter()
                .filter_map(|n| self.get(n))
                .any(|other| other.value == tile.value)
        })
    }

    /// Tile values as a grid, with 0 for empty cells.
    #[must_use]
    pub fn values(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (coord, tile) in self.tiles() {
            out[coord.row as usize][coord.col as usize] = tile.value;
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(tile) if tile.strain > 0 => format!("{}^{}", tile.value, tile.strain),
                    Some(tile) => format!("{}  ", tile.value),
                    None => ".  ".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
