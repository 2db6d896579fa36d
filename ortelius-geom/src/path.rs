use nalgebra::{Matrix3, Scalar};

use crate::point::Point2;

/// One step of a polygon boundary path.
///
/// A non-empty polygon enumerates as a `MoveTo` for the first vertex, a
/// `LineTo` for every following vertex, and a final `Close` connecting back to
/// the first vertex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment<Num: Scalar = f64> {
    /// Start of the boundary path.
    MoveTo(Point2<Num>),
    /// Straight boundary edge to the given vertex.
    LineTo(Point2<Num>),
    /// Closing edge back to the first vertex.
    Close,
}

/// Lazy iterator over a polygon boundary, optionally transformed by an affine
/// matrix.
///
/// The iterator borrows the polygon's vertices and is consumed by iteration;
/// request a new one from the polygon to walk the boundary again.
#[derive(Debug)]
pub struct PathIterator<'a, Num: Scalar = f64> {
    points: &'a [Point2<Num>],
    transform: Option<Matrix3<Num>>,
    position: usize,
}

impl<'a, Num: Scalar> PathIterator<'a, Num> {
    pub(crate) fn new(points: &'a [Point2<Num>], transform: Option<Matrix3<Num>>) -> Self {
        Self {
            points,
            transform,
            position: 0,
        }
    }
}

impl<Num> Iterator for PathIterator<'_, Num>
where
    Num: Scalar + Copy + num_traits::Num,
{
    type Item = PathSegment<Num>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.points.is_empty() || self.position > self.points.len() {
            return None;
        }

        let segment = if self.position == 0 {
            PathSegment::MoveTo(self.emit(0))
        } else if self.position < self.points.len() {
            PathSegment::LineTo(self.emit(self.position))
        } else {
            PathSegment::Close
        };
        self.position += 1;

        Some(segment)
    }
}

impl<Num> PathIterator<'_, Num>
where
    Num: Scalar + Copy + num_traits::Num,
{
    fn emit(&self, index: usize) -> Point2<Num> {
        let p = self.points[index];
        match &self.transform {
            Some(m) => Point2::new(
                m[(0, 0)] * p.x + m[(0, 1)] * p.y + m[(0, 2)],
                m[(1, 0)] * p.x + m[(1, 1)] * p.y + m[(1, 2)],
            ),
            None => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point2d;

    #[test]
    fn empty_path() {
        let mut path = PathIterator::<f64>::new(&[], None);

        assert_eq!(path.next(), None);
    }

    #[test]
    fn path_order() {
        let points = [
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(1.0, 1.0),
        ];
        let segments: Vec<_> = PathIterator::new(&points, None).collect();

        assert_eq!(
            segments,
            vec![
                PathSegment::MoveTo(points[0]),
                PathSegment::LineTo(points[1]),
                PathSegment::LineTo(points[2]),
                PathSegment::Close,
            ]
        );
    }

    #[test]
    fn transformed_path() {
        let points = [Point2d::new(1.0, 2.0)];
        // Translation by (10, 20).
        let transform = Matrix3::new(1.0, 0.0, 10.0, 0.0, 1.0, 20.0, 0.0, 0.0, 1.0);
        let segments: Vec<_> = PathIterator::new(&points, Some(transform)).collect();

        assert_eq!(
            segments,
            vec![
                PathSegment::MoveTo(Point2d::new(11.0, 22.0)),
                PathSegment::Close
            ]
        );
    }
}
