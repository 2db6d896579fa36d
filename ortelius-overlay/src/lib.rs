//! Pairwise polygon intersection reporting for GIS vector layers.
//!
//! The entry point is [`IntersectionCalculator`]: it is built over a set of
//! *base* polygons borrowed from the caller, and each call to
//! [`IntersectionCalculator::check_polygon`] or
//! [`IntersectionCalculator::check_polygons`] compares candidates against the
//! base set, accumulating hits into one [`IntersectionReport`] per base
//! polygon. Passing the base list itself switches to a symmetric
//! half-the-pairs comparison.
//!
//! The underlying pairwise test, [`interiors_overlap`], answers whether two
//! polygon interiors share a region of non-zero area; boundaries that merely
//! touch do not count.

mod calculator;
mod overlap;
mod report;

pub use calculator::IntersectionCalculator;
pub use overlap::interiors_overlap;
pub use report::IntersectionReport;
