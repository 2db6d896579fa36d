use std::cell::Cell;

use nalgebra::{Affine2, RealField, Scalar};
use num_traits::{Bounded, Float, FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::crossings::Crossings;
use crate::error::OrteliusGeomError;
use crate::path::PathIterator;
use crate::point::{CartesianPoint2d, Point2};
use crate::rect::Rect;
use crate::segment::Segment;

/// Initial and minimal vertex buffer capacity.
const MIN_CAPACITY: usize = 4;

/// A growable polygon in 2-dimensional cartesian coordinates.
///
/// The polygon is implicitly closed: the last vertex connects back to the
/// first one for all boundary and interior tests. The interior follows the
/// even-odd rule, so self-overlapping boundaries produce holes.
///
/// The vertex buffer grows geometrically (to a power of two at least twice
/// the vertex count) and is retained across [`Polygon::reset`] calls, so a
/// single instance can be refilled repeatedly without reallocating. The
/// bounding rectangle is computed lazily on first access and kept up to date
/// incrementally as vertices are appended.
///
/// The bounds cache lives in a [`Cell`], which makes this type `!Sync`; use
/// one instance per thread.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Polygon<Num = f64>
where
    Num: Scalar + Copy,
{
    points: Vec<Point2<Num>>,
    #[serde(skip)]
    bounds: Cell<Option<Rect<Num>>>,
}

impl<Num: Scalar + Copy> Clone for Polygon<Num> {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            bounds: self.bounds.clone(),
        }
    }
}

impl<Num: Scalar + Copy> PartialEq for Polygon<Num> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<Num: Scalar + Copy> From<Vec<Point2<Num>>> for Polygon<Num> {
    fn from(points: Vec<Point2<Num>>) -> Self {
        Self {
            points,
            bounds: Cell::new(None),
        }
    }
}

impl<Num> Polygon<Num>
where
    Num: Float + Bounded + Scalar + FromPrimitive,
{
    /// Creates an empty polygon with the minimal buffer capacity.
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(MIN_CAPACITY),
            bounds: Cell::new(None),
        }
    }

    /// Creates a polygon from the first `count` coordinate pairs of the given
    /// buffers. The coordinates are copied; the caller's buffers are not
    /// retained.
    pub fn from_coords(xs: &[Num], ys: &[Num], count: usize) -> Result<Self, OrteliusGeomError> {
        if count > xs.len() || count > ys.len() {
            return Err(OrteliusGeomError::CountOutOfBounds {
                count,
                available: xs.len().min(ys.len()),
            });
        }

        let points = xs
            .iter()
            .zip(ys)
            .take(count)
            .map(|(x, y)| Point2::new(*x, *y))
            .collect();
        Ok(Self {
            points,
            bounds: Cell::new(None),
        })
    }

    /// Creates a polygon from the first `count` points of the given slice.
    /// The points are copied.
    pub fn from_points(points: &[Point2<Num>], count: usize) -> Result<Self, OrteliusGeomError> {
        if count > points.len() {
            return Err(OrteliusGeomError::CountOutOfBounds {
                count,
                available: points.len(),
            });
        }

        Ok(Self {
            points: points[..count].to_vec(),
            bounds: Cell::new(None),
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current vertex buffer capacity. May exceed [`Polygon::vertex_count`].
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    /// Iterates over the vertices in insertion order.
    pub fn iter_points(&self) -> impl Iterator<Item = &Point2<Num>> {
        self.points.iter()
    }

    /// Iterates over the boundary edges, including the closing edge from the
    /// last vertex back to the first.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Point2<Num>>> {
        let closing = if self.points.len() > 1 {
            self.points
                .last()
                .zip(self.points.first())
                .map(|(last, first)| Segment(last, first))
        } else {
            None
        };

        self.points
            .windows(2)
            .map(|pair| Segment(&pair[0], &pair[1]))
            .chain(closing)
    }

    /// Appends a vertex.
    ///
    /// When the buffer is full it grows to the next power of two that is at
    /// least twice the vertex count. A cached bounding rectangle is extended
    /// to include the new vertex.
    pub fn push(&mut self, point: Point2<Num>) {
        if self.points.len() == self.points.capacity() {
            let grown = (self.points.len() * 2).next_power_of_two().max(MIN_CAPACITY);
            self.points.reserve_exact(grown - self.points.len());
        }
        self.points.push(point);

        if let Some(cached) = self.bounds.get() {
            self.bounds.set(Some(cached.merge(Rect::from_point(&point))));
        }
    }

    /// Appends a vertex given by its coordinates.
    pub fn push_xy(&mut self, x: Num, y: Num) {
        self.push(Point2::new(x, y));
    }

    /// Removes all vertices and clears the cached bounding rectangle. The
    /// vertex buffer is retained for reuse.
    pub fn reset(&mut self) {
        self.points.clear();
        self.bounds.set(None);
    }

    /// Bounding rectangle of the vertices, computed lazily and cached until
    /// the next mutation. A polygon without vertices has a degenerate zero
    /// rectangle.
    pub fn bounding_rect(&self) -> Rect<Num> {
        if let Some(cached) = self.bounds.get() {
            return cached;
        }

        let zero = Num::zero();
        let computed = Rect::from_points(self.points.iter())
            .unwrap_or_else(|| Rect::new(zero, zero, zero, zero));
        self.bounds.set(Some(computed));
        computed
    }

    /// Returns true if the point is inside the polygon under the even-odd
    /// rule.
    ///
    /// Polygons with fewer than three vertices contain nothing. The test
    /// counts scanline crossings with half-open edge y-spans, so a point on
    /// the boundary may fall on either side depending on the local edge
    /// orientation.
    pub fn contains_point<P: CartesianPoint2d<Num = Num>>(&self, point: &P) -> bool {
        let n = self.points.len();
        if n <= 2 || !self.bounding_rect().contains(point) {
            return false;
        }

        let x = point.x();
        let y = point.y();
        let mut hits = 0u32;

        let mut last_x = self.points[n - 1].x;
        let mut last_y = self.points[n - 1].y;
        for cur in &self.points {
            let cur_x = cur.x;
            let cur_y = cur.y;
            let prev_x = last_x;
            let prev_y = last_y;
            last_x = cur_x;
            last_y = cur_y;

            if cur_y == prev_y {
                continue;
            }

            let left_x;
            if cur_x < prev_x {
                if x >= prev_x {
                    continue;
                }
                left_x = cur_x;
            } else {
                if x >= cur_x {
                    continue;
                }
                left_x = prev_x;
            }

            let test1;
            let test2;
            if cur_y < prev_y {
                if y < cur_y || y >= prev_y {
                    continue;
                }
                if x < left_x {
                    hits += 1;
                    continue;
                }
                test1 = x - cur_x;
                test2 = y - cur_y;
            } else {
                if y < prev_y || y >= cur_y {
                    continue;
                }
                if x < left_x {
                    hits += 1;
                    continue;
                }
                test1 = x - prev_x;
                test2 = y - prev_y;
            }

            if test1 < test2 / (prev_y - cur_y) * (prev_x - cur_x) {
                hits += 1;
            }
        }

        hits % 2 == 1
    }

    /// Returns true if the polygon boundary or interior overlaps the
    /// rectangle. Rectangles of non-positive extent intersect nothing.
    pub fn intersects_rect(&self, rect: &Rect<Num>) -> bool {
        if self.points.is_empty()
            || !(rect.width() > Num::zero())
            || !(rect.height() > Num::zero())
        {
            return false;
        }
        if !self.bounding_rect().intersects(rect) {
            return false;
        }

        match self.crossings(rect) {
            None => true,
            Some(crossings) => !crossings.is_empty(),
        }
    }

    /// Returns true if the rectangle lies entirely inside the polygon
    /// interior. Rectangles of non-positive extent are contained by nothing.
    pub fn contains_rect(&self, rect: &Rect<Num>) -> bool {
        if self.points.is_empty()
            || !(rect.width() > Num::zero())
            || !(rect.height() > Num::zero())
        {
            return false;
        }
        if !self.bounding_rect().contains_rect(rect) {
            return false;
        }

        match self.crossings(rect) {
            None => false,
            Some(crossings) => crossings.covers(rect.y_min(), rect.y_max()),
        }
    }

    /// Feeds every boundary edge to a fresh accumulator. `None` means the
    /// boundary passes through the rectangle.
    fn crossings(&self, rect: &Rect<Num>) -> Option<Crossings<Num>> {
        let mut crossings = Crossings::new(rect);
        let mut prev = self.points[self.points.len() - 1];
        for cur in &self.points {
            if crossings.accumulate_line(prev.x, prev.y, cur.x, cur.y) {
                return None;
            }
            prev = *cur;
        }

        Some(crossings)
    }

    /// Lazily enumerates the boundary path: a move to the first vertex, a
    /// line to each following vertex, and a closing step. An empty polygon
    /// produces an empty path.
    pub fn iter_path(&self) -> PathIterator<'_, Num> {
        PathIterator::new(&self.points, None)
    }

    /// Same as [`Polygon::iter_path`] with every emitted point transformed by
    /// the given affine transform.
    pub fn iter_path_transformed(&self, transform: &Affine2<Num>) -> PathIterator<'_, Num>
    where
        Num: RealField,
    {
        PathIterator::new(&self.points, Some(transform.to_homogeneous()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;
    use crate::point::Point2d;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn concave_polygon() -> Polygon {
        // U-shape: interior is the two vertical arms and the bottom bar; the
        // notch between the arms is exterior.
        Polygon::from_coords(
            &[0.0, 6.0, 6.0, 4.0, 4.0, 2.0, 2.0, 0.0],
            &[0.0, 0.0, 6.0, 6.0, 2.0, 2.0, 6.0, 6.0],
            8,
        )
        .expect("valid vertex count")
    }

    /// Classic even-odd ray casting, used as an independent reference for the
    /// scanline implementation.
    fn reference_contains(polygon: &Polygon, x: f64, y: f64) -> bool {
        let points: Vec<_> = polygon.iter_points().copied().collect();
        let n = points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (points[i].x, points[i].y);
            let (xj, yj) = (points[j].x, points[j].y);
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    #[test]
    fn from_coords_validates_count() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [1.0, 2.0];

        assert_matches!(
            Polygon::from_coords(&xs, &ys, 3),
            Err(OrteliusGeomError::CountOutOfBounds {
                count: 3,
                available: 2
            })
        );
        assert!(Polygon::from_coords(&xs, &ys, 2).is_ok());
    }

    #[test]
    fn from_points_copies_prefix() {
        let points = [
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(9.0, 9.0),
        ];
        let polygon = Polygon::from_points(&points, 3).expect("valid vertex count");

        assert_eq!(polygon.vertex_count(), 3);
        assert_eq!(
            polygon.iter_points().copied().collect::<Vec<_>>(),
            &points[..3]
        );
    }

    #[test]
    fn buffer_grows_to_powers_of_two() {
        let mut polygon = Polygon::new();
        assert_eq!(polygon.capacity(), 4);

        for i in 0..5 {
            polygon.push_xy(i as f64, 0.0);
        }
        assert_eq!(polygon.capacity(), 8);

        for i in 5..9 {
            polygon.push_xy(i as f64, 0.0);
        }
        assert_eq!(polygon.capacity(), 16);
    }

    #[test]
    fn contains_point_matches_reference() {
        let polygon = concave_polygon();

        // Sample off-boundary grid points across the bounding box.
        for ix in 0..=24 {
            for iy in 0..=24 {
                let x = ix as f64 * 0.25 + 0.05;
                let y = iy as f64 * 0.25 + 0.05;
                assert_eq!(
                    polygon.contains_point(&Point2d::new(x, y)),
                    reference_contains(&polygon, x, y),
                    "disagreement at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn contains_point_basics() {
        let polygon = concave_polygon();

        assert!(polygon.contains_point(&Point2d::new(1.0, 3.0)));
        assert!(polygon.contains_point(&Point2d::new(5.0, 3.0)));
        assert!(polygon.contains_point(&Point2d::new(3.0, 1.0)));
        // The notch is outside.
        assert!(!polygon.contains_point(&Point2d::new(3.0, 3.0)));
        assert!(!polygon.contains_point(&Point2d::new(7.0, 3.0)));
    }

    #[test]
    fn degenerate_polygons_contain_nothing() {
        let empty = Polygon::new();
        assert!(!empty.contains_point(&Point2d::new(0.0, 0.0)));

        let two = Polygon::from_coords(&[0.0, 2.0], &[0.0, 2.0], 2).expect("valid vertex count");
        assert!(!two.contains_point(&Point2d::new(1.0, 1.0)));
    }

    #[test]
    fn bounding_rect_is_cached_and_extended() {
        let mut polygon = Polygon::new();
        polygon.push_xy(1.0, 1.0);
        polygon.push_xy(4.0, 1.0);

        let bounds = polygon.bounding_rect();
        assert_eq!(bounds, polygon.bounding_rect());
        assert_eq!(bounds, Rect::new(1.0, 1.0, 4.0, 1.0));

        // Appending extends the cached rectangle; the result must match a
        // recompute from scratch.
        polygon.push_xy(2.0, 3.0);
        let extended = polygon.bounding_rect();
        let recomputed =
            Polygon::from_coords(&[1.0, 4.0, 2.0], &[1.0, 1.0, 3.0], 3).expect("valid vertex count");
        assert_eq!(extended, recomputed.bounding_rect());
    }

    #[test]
    fn empty_polygon_has_zero_bounds() {
        let polygon = Polygon::new();

        assert_eq!(polygon.bounding_rect(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn reset_reproduces_fresh_polygon() {
        let mut polygon = concave_polygon();
        let samples = [
            Point2d::new(1.0, 3.0),
            Point2d::new(3.0, 3.0),
            Point2d::new(3.0, 1.0),
        ];
        let before: Vec<_> = samples.iter().map(|p| polygon.contains_point(p)).collect();

        let points: Vec<_> = polygon.iter_points().copied().collect();
        polygon.reset();
        assert_eq!(polygon.vertex_count(), 0);
        assert_eq!(polygon.bounding_rect(), Rect::new(0.0, 0.0, 0.0, 0.0));

        for p in points {
            polygon.push(p);
        }
        let after: Vec<_> = samples.iter().map(|p| polygon.contains_point(p)).collect();

        assert_eq!(before, after);
    }

    #[test]
    fn rect_predicates() {
        let polygon = concave_polygon();

        // Fully inside the left arm.
        let inside = Rect::new(0.5, 3.0, 1.5, 5.0);
        assert!(polygon.intersects_rect(&inside));
        assert!(polygon.contains_rect(&inside));

        // Inside the bounding box but within the notch.
        let notch = Rect::new(2.5, 3.0, 3.5, 5.0);
        assert!(!polygon.intersects_rect(&notch));
        assert!(!polygon.contains_rect(&notch));

        // Straddling the left boundary.
        let straddling = Rect::new(-1.0, 1.0, 1.0, 2.0);
        assert!(polygon.intersects_rect(&straddling));
        assert!(!polygon.contains_rect(&straddling));

        // Spanning the notch: intersects both arms but is not contained.
        let spanning = Rect::new(1.0, 3.0, 5.0, 5.0);
        assert!(polygon.intersects_rect(&spanning));
        assert!(!polygon.contains_rect(&spanning));

        // Disjoint from the bounding box.
        let outside = Rect::new(7.0, 0.0, 8.0, 1.0);
        assert!(!polygon.intersects_rect(&outside));
        assert!(!polygon.contains_rect(&outside));

        // Degenerate rectangles intersect nothing.
        let degenerate = Rect::new(1.0, 3.0, 1.0, 5.0);
        assert!(!polygon.intersects_rect(&degenerate));
        assert!(!polygon.contains_rect(&degenerate));
    }

    #[test]
    fn path_round_trip() {
        let polygon = Polygon::from_coords(&[1.0, 4.0, 2.0], &[1.0, 1.0, 3.0], 3)
            .expect("valid vertex count");
        let segments: Vec<_> = polygon.iter_path().collect();

        assert_eq!(
            segments,
            vec![
                PathSegment::MoveTo(Point2d::new(1.0, 1.0)),
                PathSegment::LineTo(Point2d::new(4.0, 1.0)),
                PathSegment::LineTo(Point2d::new(2.0, 3.0)),
                PathSegment::Close,
            ]
        );

        let empty = Polygon::<f64>::new();
        assert_eq!(empty.iter_path().count(), 0);
    }

    #[test]
    fn transformed_path() {
        let polygon =
            Polygon::from_coords(&[1.0, 2.0], &[1.0, 1.0], 2).expect("valid vertex count");
        let transform = Affine2::identity() * nalgebra::Translation2::new(10.0, 0.0);
        let segments: Vec<_> = polygon.iter_path_transformed(&transform).collect();

        assert_eq!(
            segments,
            vec![
                PathSegment::MoveTo(Point2d::new(11.0, 1.0)),
                PathSegment::LineTo(Point2d::new(12.0, 1.0)),
                PathSegment::Close,
            ]
        );
    }

    #[test]
    fn rotated_path() {
        let polygon =
            Polygon::from_coords(&[1.0, 2.0], &[0.0, 0.0], 2).expect("valid vertex count");
        let rotation = nalgebra::Rotation2::new(std::f64::consts::FRAC_PI_2);
        let transform: Affine2<f64> = nalgebra::convert(rotation);
        let segments: Vec<_> = polygon.iter_path_transformed(&transform).collect();

        let PathSegment::MoveTo(first) = segments[0] else {
            panic!("path must start with a move");
        };
        assert_abs_diff_eq!(first.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(first.y, 1.0, epsilon = 1e-12);

        let PathSegment::LineTo(second) = segments[1] else {
            panic!("second path step must be a line");
        };
        assert_abs_diff_eq!(second.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(second.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn segments_include_closing_edge() {
        let polygon = Polygon::from_coords(&[0.0, 2.0, 1.0], &[0.0, 0.0, 2.0], 3)
            .expect("valid vertex count");
        let segments: Vec<_> = polygon.iter_segments().collect();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].0, &Point2d::new(1.0, 2.0));
        assert_eq!(segments[2].1, &Point2d::new(0.0, 0.0));
    }
}
