//! Coordinate assignment operators.
//!
//! An operator receives the final layers (membership and order already fixed) plus a size
//! accessor, writes an `x` onto every entity and returns the total width the drawing needs.

use crate::config::CoordConfig;
use crate::error::{Error, Result};
use crate::model::{Horizable, Layer, Size};
use serde::Serialize;

pub mod center;

pub use center::Center;

pub trait CoordOperator {
    /// Assigns `x` to every entity of every layer and returns the drawing width.
    ///
    /// Layer membership and order are left untouched; only `x` is written. On error the
    /// coordinates of entities visited so far are unspecified.
    fn assign<N, F>(&self, layers: &mut [Layer<N>], size_of: F) -> Result<f64>
    where
        N: Horizable,
        F: Fn(&N) -> Size;
}

/// Creates a center assignment operator.
pub fn center() -> Center {
    Center::new()
}

/// Coordinates computed without touching the entities, indexed in parallel with the layers they
/// were computed from.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Coordinates {
    pub width: f64,
    pub xs: Vec<Vec<f64>>,
}

impl Coordinates {
    pub fn get(&self, layer: usize, index: usize) -> Option<f64> {
        self.xs.get(layer)?.get(index).copied()
    }

    pub fn layer(&self, layer: usize) -> Option<&[f64]> {
        self.xs.get(layer).map(Vec::as_slice)
    }
}

/// Operators that can be selected at runtime (see [`from_config`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coord {
    Center(Center),
}

impl Coord {
    pub fn name(&self) -> &'static str {
        match self {
            Coord::Center(_) => Center::NAME,
        }
    }

    pub fn coordinates<N, F>(&self, layers: &[Layer<N>], size_of: F) -> Result<Coordinates>
    where
        F: Fn(&N) -> Size,
    {
        match self {
            Coord::Center(op) => op.coordinates(layers, size_of),
        }
    }
}

impl Default for Coord {
    fn default() -> Self {
        Coord::Center(Center::new())
    }
}

impl CoordOperator for Coord {
    fn assign<N, F>(&self, layers: &mut [Layer<N>], size_of: F) -> Result<f64>
    where
        N: Horizable,
        F: Fn(&N) -> Size,
    {
        match self {
            Coord::Center(op) => op.assign(layers, size_of),
        }
    }
}

/// Builds the operator named by `config`. Names are matched case-insensitively.
pub fn from_config(config: &CoordConfig) -> Result<Coord> {
    let name = config.operator.trim();
    if name.eq_ignore_ascii_case(Center::NAME) {
        return Center::from_options(&config.options).map(Coord::Center);
    }
    Err(Error::UnknownOperator {
        name: name.to_string(),
    })
}
