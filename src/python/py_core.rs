//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Direction, Move};

pub(crate) fn parse_direction(dir: &str) -> PyResult<Direction> {
    dir.parse::<Direction>()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

/// Python wrapper for Move.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Create a move from a cell and a direction token.
    #[new]
    fn new(row: i32, col: i32, dir: &str) -> PyResult<Self> {
        Ok(Self(Move::at(row, col, parse_direction(dir)?)))
    }

    #[getter]
    fn row(&self) -> i32 {
        self.0.from.row
    }

    #[getter]
    fn col(&self) -> i32 {
        self.0.from.col
    }

    #[getter]
    fn dir(&self) -> &'static str {
        self.0.dir.as_str()
    }

    fn __repr__(&self) -> String {
        format!("Move({}, {}, '{}')", self.0.from.row, self.0.from.col, self.0.dir)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
