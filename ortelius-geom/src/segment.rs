use crate::orient::Orientation;
use crate::point::{CartesianPoint2d, Point2};
use num_traits::{One, Zero};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<'a, P: CartesianPoint2d> Segment<'a, P> {
    /// Returns true if the segment has at least one common point with the
    /// `other` segment. Touching endpoints and collinear overlap count.
    pub fn intersects<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &Segment<Point>,
    ) -> bool {
        fn on_segment<Num: num_traits::Num + PartialOrd>(
            p: &impl CartesianPoint2d<Num = Num>,
            q: &impl CartesianPoint2d<Num = Num>,
            r: &impl CartesianPoint2d<Num = Num>,
        ) -> bool {
            let x_max = if p.x() >= r.x() { p.x() } else { r.x() };
            let x_min = if p.x() <= r.x() { p.x() } else { r.x() };
            let y_max = if p.y() >= r.y() { p.y() } else { r.y() };
            let y_min = if p.y() <= r.y() { p.y() } else { r.y() };

            q.x() <= x_max && q.x() >= x_min && q.y() <= y_max && q.y() >= y_min
        }

        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        if o1 == Orientation::Collinear && on_segment(self.0, other.0, self.1) {
            return true;
        }
        if o2 == Orientation::Collinear && on_segment(self.0, other.1, self.1) {
            return true;
        }
        if o3 == Orientation::Collinear && on_segment(other.0, self.0, other.1) {
            return true;
        }
        if o4 == Orientation::Collinear && on_segment(other.0, self.1, other.1) {
            return true;
        }

        false
    }

    /// Returns true if the segments cross transversally: each segment strictly
    /// straddles the line of the other. Touching endpoints and collinear
    /// contact do not count.
    ///
    /// A proper crossing between two polygon boundaries implies their
    /// interiors overlap in a region of non-zero area, which is what the
    /// overlay predicates are after.
    pub fn crosses_properly<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &Segment<Point>,
    ) -> bool {
        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        o1 != Orientation::Collinear
            && o2 != Orientation::Collinear
            && o3 != Orientation::Collinear
            && o4 != Orientation::Collinear
            && o1 != o2
            && o3 != o4
    }

    /// Returns true if `point` lies exactly on the segment, endpoints
    /// included.
    pub fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        let d = self.1.sub(self.0);
        let v = point.sub(self.0);

        let cross = d.x * v.y - d.y * v.x;
        if cross != P::Num::zero() {
            return false;
        }

        let dot = d.x * v.x + d.y * v.y;
        dot >= P::Num::zero() && dot <= d.x * d.x + d.y * d.y
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point2<P::Num> {
        let two = P::Num::one() + P::Num::one();
        Point2::new(
            (self.0.x() + self.1.x()) / two,
            (self.0.y() + self.1.y()) / two,
        )
    }
}
