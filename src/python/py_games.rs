//! Game session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{Move, RulesConfig, BOARD_SIZE};
use crate::game::{Game, GameBuilder};

use super::py_core::{parse_direction, PyMove};

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Python wrapper for a game session.
#[pyclass(name = "Game")]
pub struct PyGame {
    inner: Game,
}

#[pymethods]
impl PyGame {
    /// Start a game with the standard rules.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - max_value: Highest value a merge may produce before fracturing
    #[new]
    #[pyo3(signature = (seed = 1, max_value = 5))]
    fn new(seed: u32, max_value: u8) -> PyResult<Self> {
        let inner = GameBuilder::new()
            .seed(seed)
            .rules(RulesConfig::default().with_max_value(max_value))
            .build()
            .map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Play a move. Returns the turn's events as a JSON array.
    fn apply_move(&mut self, row: i32, col: i32, dir: &str) -> PyResult<String> {
        let mv = Move::at(row, col, parse_direction(dir)?);
        let events = self.inner.play(mv);
        serde_json::to_string(&events).map_err(value_error)
    }

    /// Playable moves, row-major then up, left, right, down.
    fn legal_moves(&self) -> Vec<PyMove> {
        self.inner.legal_moves().into_iter().map(PyMove).collect()
    }

    /// Tile values as a 5x5 uint8 array, 0 for empty cells.
    fn board_values<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let flat: Vec<u8> = self.inner.state().board.values().iter().flatten().copied().collect();
        PyArray1::from_vec_bound(py, flat)
            .reshape([BOARD_SIZE, BOARD_SIZE])
            .map_err(value_error)
    }

    /// Accepted moves so far, as a JSON array of turn records.
    fn history_json(&self) -> PyResult<String> {
        serde_json::to_string(self.inner.history()).map_err(value_error)
    }

    /// Compact binary snapshot of the current state.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        self.inner.state().to_bytes().map_err(value_error)
    }

    #[getter]
    fn turn_count(&self) -> u32 {
        self.inner.turn_count()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.inner.is_over()
    }

    #[getter]
    fn seed(&self) -> u32 {
        self.inner.seed()
    }

    fn __repr__(&self) -> String {
        format!("Game(seed={}, turn={})", self.inner.seed(), self.inner.turn_count())
    }

    fn __str__(&self) -> String {
        self.inner.state().board.to_string()
    }
}
