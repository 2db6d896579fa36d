//! Planar geometry primitives for overlay analysis of GIS vector layers.
//!
//! The central type is [`Polygon`]: a growable, implicitly closed polygon with
//! an even-odd interior, a lazily cached bounding rectangle, point and
//! rectangle containment predicates, and lazy boundary path enumeration. The
//! supporting types ([`Rect`], [`Segment`], [`Orientation`]) are exposed so
//! that callers can run the same predicates over their own point types through
//! the [`CartesianPoint2d`] trait.
//!
//! All types in this crate are plain in-memory values with no interior
//! synchronization. A [`Polygon`] caches its bounding rectangle in a
//! [`Cell`](std::cell::Cell) and is deliberately not `Sync`; distinct
//! instances can be used from distinct threads freely.

pub mod error;

mod crossings;
mod orient;
mod path;
mod point;
mod polygon;
mod rect;
mod segment;

pub use orient::Orientation;
pub use path::{PathIterator, PathSegment};
pub use point::{CartesianPoint2d, CartesianPoint2dFloat, Point2, Point2d};
pub use polygon::Polygon;
pub use rect::Rect;
pub use segment::Segment;
