//! Layer entity types and geometry primitives.
//!
//! The coordinate operators only need two things from an entity: a size (supplied externally by
//! a size accessor) and a writable horizontal coordinate. [`Horizable`] captures the latter so
//! callers can lay out their own node types directly; [`LayerNode`] is a ready-made entity for
//! callers that do not have one.

use serde::{Deserialize, Serialize};

/// An ordered row of entities drawn at the same vertical rank, left to right.
pub type Layer<N> = Vec<N>;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

impl From<[f64; 2]> for Size {
    fn from([width, height]: [f64; 2]) -> Self {
        Self { width, height }
    }
}

/// Anything with a horizontal coordinate slot that a coordinate operator may write.
pub trait Horizable {
    /// The current coordinate, or `None` if nothing has been assigned yet.
    fn x(&self) -> Option<f64>;

    fn set_x(&mut self, x: f64);
}

/// Routing placeholder inserted so an edge spanning several layers can be drawn one layer at a
/// time. `E` identifies the routed edge (typically a `(source, target)` pair).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DummyNode<E = ()> {
    pub edge: E,
    pub x: Option<f64>,
}

impl<E> DummyNode<E> {
    pub fn new(edge: E) -> Self {
        Self { edge, x: None }
    }
}

impl<E> Horizable for DummyNode<E> {
    fn x(&self) -> Option<f64> {
        self.x
    }

    fn set_x(&mut self, x: f64) {
        self.x = Some(x);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayerNode<T, E = ()> {
    Real { data: T, x: Option<f64> },
    Dummy(DummyNode<E>),
}

impl<T, E> LayerNode<T, E> {
    pub fn real(data: T) -> Self {
        Self::Real { data, x: None }
    }

    pub fn dummy(edge: E) -> Self {
        Self::Dummy(DummyNode::new(edge))
    }

    pub fn is_dummy(&self) -> bool {
        matches!(self, Self::Dummy(_))
    }

    /// User data of a real node; `None` for placeholders.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Real { data, .. } => Some(data),
            Self::Dummy(_) => None,
        }
    }
}

impl<T, E> Horizable for LayerNode<T, E> {
    fn x(&self) -> Option<f64> {
        match self {
            Self::Real { x, .. } => *x,
            Self::Dummy(d) => d.x,
        }
    }

    fn set_x(&mut self, x: f64) {
        match self {
            Self::Real { x: slot, .. } => *slot = Some(x),
            Self::Dummy(d) => d.set_x(x),
        }
    }
}
