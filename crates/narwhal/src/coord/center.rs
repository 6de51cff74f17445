//! Center coordinate assignment.
//!
//! Packs every layer left to right with no gaps, then shifts each layer so it is centered within
//! the widest one. Layouts are generally poor (edges are ignored entirely) but it runs in a single
//! linear pass over the entities.

use super::{CoordOperator, Coordinates};
use crate::error::{Error, Result};
use crate::model::{Horizable, Layer, Size};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Center;

impl Center {
    pub const NAME: &'static str = "center";

    pub const fn new() -> Self {
        Center
    }

    /// Runtime construction from a configuration table. Center has nothing to configure, so any
    /// option at all is rejected.
    pub fn from_options(options: &Map<String, Value>) -> Result<Self> {
        if options.is_empty() {
            return Ok(Center);
        }
        let keys: Vec<&str> = options.keys().map(String::as_str).collect();
        Err(Error::Configuration {
            operator: Self::NAME,
            message: format!(
                "got options [{}], but center takes no options",
                keys.join(", ")
            ),
        })
    }

    /// Same placement as [`CoordOperator::assign`], returned as a coordinate table instead of
    /// being written onto the entities.
    pub fn coordinates<N, F>(&self, layers: &[Layer<N>], size_of: F) -> Result<Coordinates>
    where
        F: Fn(&N) -> Size,
    {
        let mut xs: Vec<Vec<f64>> = Vec::with_capacity(layers.len());
        let mut widths: Vec<f64> = Vec::with_capacity(layers.len());
        for layer in layers {
            let mut row: Vec<f64> = Vec::with_capacity(layer.len());
            let mut cursor: f64 = 0.0;
            for node in layer {
                let width = size_of(node).width;
                row.push(cursor + width / 2.0);
                cursor += width;
            }
            xs.push(row);
            widths.push(cursor);
        }

        let max_width = max_width(&widths)?;
        for (row, width) in xs.iter_mut().zip(&widths) {
            let offset = (max_width - width) / 2.0;
            for x in row.iter_mut() {
                *x += offset;
            }
        }

        Ok(Coordinates {
            width: max_width,
            xs,
        })
    }
}

impl CoordOperator for Center {
    fn assign<N, F>(&self, layers: &mut [Layer<N>], size_of: F) -> Result<f64>
    where
        N: Horizable,
        F: Fn(&N) -> Size,
    {
        let widths: Vec<f64> = layers
            .iter_mut()
            .map(|layer| {
                let mut cursor: f64 = 0.0;
                for node in layer.iter_mut() {
                    let width = size_of(&*node).width;
                    node.set_x(cursor + width / 2.0);
                    cursor += width;
                }
                cursor
            })
            .collect();

        let max_width = max_width(&widths)?;

        let mut entities = 0usize;
        for (i, (layer, width)) in layers.iter_mut().zip(&widths).enumerate() {
            let offset = (max_width - width) / 2.0;
            tracing::trace!(layer = i, packed = *width, offset, "center layer");
            for node in layer.iter_mut() {
                let x = node.x().expect("x is assigned by the packing pass");
                node.set_x(x + offset);
            }
            entities += layer.len();
        }

        tracing::debug!(
            layers = layers.len(),
            entities,
            width = max_width,
            "assigned centered coordinates"
        );
        Ok(max_width)
    }
}

fn max_width(widths: &[f64]) -> Result<f64> {
    let max_width = widths.iter().copied().fold(0.0_f64, f64::max);
    if max_width > 0.0 {
        Ok(max_width)
    } else {
        Err(Error::DegenerateWidth)
    }
}
