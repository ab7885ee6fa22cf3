//! Graph containers and the capability interface consumed by the matchers.
//!
//! The isomorphism crate never touches a concrete container: it only needs
//! node iteration, neighbour lookup, edge multiplicities and attribute maps,
//! all of which are described by [`GraphView`]. [`AttrGraph`] is the
//! in-tree implementation, covering simple and multi graphs in both
//! orientations.

mod attr_graph;
mod error;
pub mod generators;
mod view;

pub use crate::attr_graph::{AttrGraph, GraphKind};
pub use crate::error::{GraphError, Result};
pub use crate::view::{Attributes, GraphView};
