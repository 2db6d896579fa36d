use nalgebra::Scalar;
use ortelius_geom::Polygon;

/// Accumulated intersection results for one base polygon.
///
/// The report borrows the base polygon it belongs to and the polygons found
/// to intersect it; it never owns any geometry. A polygon is never recorded
/// as intersecting itself, where "itself" means the same instance — two
/// equal-valued polygons are distinct intersectors. Duplicate entries are
/// kept: recording the same intersector twice lists it twice.
#[derive(Debug, Clone)]
pub struct IntersectionReport<'a, Num = f64>
where
    Num: Scalar + Copy,
{
    polygon: &'a Polygon<Num>,
    intersecting: Vec<&'a Polygon<Num>>,
}

impl<'a, Num: Scalar + Copy> IntersectionReport<'a, Num> {
    /// Creates an empty report for the given base polygon.
    pub fn new(polygon: &'a Polygon<Num>) -> Self {
        Self {
            polygon,
            intersecting: Vec::new(),
        }
    }

    /// The base polygon this report belongs to.
    pub fn base_polygon(&self) -> &'a Polygon<Num> {
        self.polygon
    }

    /// The polygons recorded as intersecting the base polygon, in recording
    /// order.
    pub fn intersecting_polygons(&self) -> &[&'a Polygon<Num>] {
        &self.intersecting
    }

    /// Returns true if at least one intersector has been recorded.
    pub fn has_intersections(&self) -> bool {
        !self.intersecting.is_empty()
    }

    /// Records a polygon as intersecting the base polygon. Recording the base
    /// polygon itself is ignored.
    pub fn add_intersecting_polygon(&mut self, polygon: &'a Polygon<Num>) {
        if !std::ptr::eq(polygon, self.polygon) {
            self.intersecting.push(polygon);
        }
    }
}
