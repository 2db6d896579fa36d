use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::point::CartesianPoint2d;

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    ///
    /// Triplets whose cross product is not comparable to zero (NaN
    /// coordinates) are reported as collinear.
    pub fn triplet<Num: num_traits::Num + PartialOrd>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        let cross = (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y());
        match cross.partial_cmp(&Num::zero()) {
            Some(Ordering::Greater) => Self::Clockwise,
            Some(Ordering::Less) => Self::Counterclockwise,
            _ => Self::Collinear,
        }
    }
}
