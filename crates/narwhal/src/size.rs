//! Node size accessors.
//!
//! Coordinate operators never measure anything themselves; they ask a caller-supplied accessor
//! for each entity's `(width, height)`. These helpers cover the common cases.

use crate::model::{LayerNode, Size};

/// Real nodes are `1 x 1`, routing placeholders take no room.
pub fn default_node_size<T, E>(node: &LayerNode<T, E>) -> Size {
    if node.is_dummy() {
        Size::ZERO
    } else {
        Size::new(1.0, 1.0)
    }
}

/// Every entity gets the same size, placeholders included.
pub fn constant<N>(size: impl Into<Size>) -> impl Fn(&N) -> Size + Copy {
    let size = size.into();
    move |_| size
}

/// Sizes real nodes from their data; placeholders are `0 x 0`.
pub fn by_data<T, E, F>(f: F) -> impl Fn(&LayerNode<T, E>) -> Size
where
    F: Fn(&T) -> Size,
{
    move |node| node.data().map(&f).unwrap_or(Size::ZERO)
}
