#![forbid(unsafe_code)]

//! Horizontal coordinate assignment for layered (Sugiyama-style) graph drawings.
//!
//! Upstream stages decide which nodes belong to which layer, order them within each layer and
//! insert routing placeholders for long edges. This crate takes those layers as given and assigns
//! every entity an `x` coordinate. Vertical coordinates and edge routing are out of scope.
//!
//! ```
//! use narwhal::{CoordOperator, Layer, LayerNode, Size};
//!
//! let mut layers: Vec<Layer<LayerNode<f64>>> = vec![
//!     vec![LayerNode::real(10.0), LayerNode::real(10.0)],
//!     vec![LayerNode::real(30.0)],
//! ];
//! let width = narwhal::coord::center()
//!     .assign(&mut layers, |n| Size::new(n.data().copied().unwrap_or(0.0), 1.0))
//!     .unwrap();
//! assert_eq!(width, 30.0);
//! ```

pub mod config;
pub mod coord;
pub mod error;
pub mod model;
pub mod size;

pub use config::CoordConfig;
pub use coord::{Center, Coord, CoordOperator, Coordinates};
pub use error::{Error, Result};
pub use model::{DummyNode, Horizable, Layer, LayerNode, Size};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
