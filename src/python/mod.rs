//! Python bindings for the numberclart engine.
//!
//! # Quick Start
//!
//! ```python
//! import numberclart as nc
//!
//! game = nc.Game(seed=42)
//! move = game.legal_moves()[0]
//! events = game.apply_move(move.row, move.col, move.dir)
//! print(game.board_values())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// numberclart: a deterministic tile-merging puzzle engine.
#[pymodule]
fn numberclart(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMove>()?;
    m.add_class::<PyGame>()?;
    m.add("BOARD_SIZE", crate::core::BOARD_SIZE)?;
    Ok(())
}
