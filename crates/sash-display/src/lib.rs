//! Multi-display window placement.
//!
//! The window host enumerates displays once at startup and hands the
//! snapshot to [`DisplayMap`]; placement is then a pure computation:
//! a preference picks one display, and a symbolic/percentage spec is
//! resolved into absolute pixel geometry on it.

pub mod descriptor;
pub mod geometry;
pub mod selector;
pub mod window;

pub use descriptor::{DisplayDescriptor, DisplayMap};
pub use geometry::{resolve_geometry, PlacementSpec, SpecValue};
pub use selector::{select_display, DisplayTarget};
pub use window::{WindowOps, WindowRegistry};
