use nalgebra::Scalar;
use num_traits::{Bounded, Float, FromPrimitive};
use ortelius_geom::{CartesianPoint2d, Polygon};

/// Returns true if the interiors of the two polygons share a region of
/// non-zero area.
///
/// Boundaries that only touch (a shared edge, a single contact point) do not
/// make the polygons overlap: the shared region must have positive area. Both
/// polygons are interpreted under the even-odd rule, so concave and
/// self-overlapping boundaries are handled.
///
/// Polygons with fewer than three vertices have no interior and overlap
/// nothing.
pub fn interiors_overlap<Num>(a: &Polygon<Num>, b: &Polygon<Num>) -> bool
where
    Num: Float + Bounded + Scalar + FromPrimitive,
{
    if a.vertex_count() < 3 || b.vertex_count() < 3 {
        return false;
    }
    if !a.bounding_rect().intersects(&b.bounding_rect()) {
        return false;
    }

    // A transversal boundary crossing means each boundary passes into the
    // other polygon's interior.
    for edge_a in a.iter_segments() {
        for edge_b in b.iter_segments() {
            if edge_a.crosses_properly(&edge_b) {
                return true;
            }
        }
    }

    // No transversal crossings: either one polygon sits inside the other, or
    // the contact is limited to boundary points of zero area.
    has_interior_sample_inside(a, b) || has_interior_sample_inside(b, a)
}

/// Checks whether some representative point of `inner` (a vertex or an edge
/// midpoint) lies strictly inside `outer`.
///
/// Edge midpoints cover the case where every vertex of `inner` lies exactly
/// on the boundary of `outer`, as with a diamond inscribed into a rectangle.
fn has_interior_sample_inside<Num>(inner: &Polygon<Num>, outer: &Polygon<Num>) -> bool
where
    Num: Float + Bounded + Scalar + FromPrimitive,
{
    if inner.iter_points().any(|p| strictly_inside(outer, p)) {
        return true;
    }

    inner
        .iter_segments()
        .any(|edge| strictly_inside(outer, &edge.midpoint()))
}

/// Even-odd interior test excluding the boundary.
fn strictly_inside<Num, P>(polygon: &Polygon<Num>, point: &P) -> bool
where
    Num: Float + Bounded + Scalar + FromPrimitive,
    P: CartesianPoint2d<Num = Num>,
{
    polygon.contains_point(point) && !polygon.iter_segments().any(|edge| edge.contains_point(point))
}
