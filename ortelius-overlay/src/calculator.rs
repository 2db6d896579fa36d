use log::debug;
use nalgebra::Scalar;
use num_traits::{Bounded, Float, FromPrimitive};
use ortelius_geom::Polygon;

use crate::overlap::interiors_overlap;
use crate::report::IntersectionReport;

/// Runs pairwise intersection checks between a set of base polygons and
/// candidate polygons, accumulating results into one report per base polygon.
///
/// The calculator borrows every polygon it works with; the caller keeps
/// ownership of the geometry. `reports()[i]` always belongs to the `i`-th
/// base polygon, including after [`IntersectionCalculator::reset`].
///
/// Check passes accumulate: running the same pass twice records every hit
/// twice. Use [`IntersectionCalculator::reset`] to start over with the same
/// base set.
#[derive(Debug)]
pub struct IntersectionCalculator<'a, Num = f64>
where
    Num: Scalar + Copy,
{
    base: Vec<&'a Polygon<Num>>,
    reports: Vec<IntersectionReport<'a, Num>>,
}

impl<'a, Num> IntersectionCalculator<'a, Num>
where
    Num: Float + Bounded + Scalar + FromPrimitive,
{
    /// Creates a calculator over a single base polygon.
    pub fn from_polygon(polygon: &'a Polygon<Num>) -> Self {
        Self::new([polygon])
    }

    /// Creates a calculator over a list of base polygons.
    pub fn new(polygons: impl IntoIterator<Item = &'a Polygon<Num>>) -> Self {
        let base: Vec<_> = polygons.into_iter().collect();
        let reports = base.iter().map(|p| IntersectionReport::new(*p)).collect();
        Self { base, reports }
    }

    /// The base polygons, in construction order.
    pub fn base_polygons(&self) -> &[&'a Polygon<Num>] {
        &self.base
    }

    /// The accumulated reports, index-aligned with
    /// [`IntersectionCalculator::base_polygons`].
    pub fn reports(&self) -> &[IntersectionReport<'a, Num>] {
        &self.reports
    }

    /// Discards all accumulated results and rebuilds empty reports for the
    /// unchanged base set.
    pub fn reset(&mut self) {
        self.reports = self.base.iter().map(|p| IntersectionReport::new(*p)).collect();
    }

    /// Checks one candidate polygon against every base polygon, recording
    /// intersections into the base polygons' reports. The candidate is never
    /// compared against itself if it is part of the base set.
    pub fn check_polygon(&mut self, candidate: &'a Polygon<Num>) {
        for (base, report) in self.base.iter().zip(self.reports.iter_mut()) {
            if std::ptr::eq(*base, candidate) {
                continue;
            }
            if interiors_overlap(base, candidate) {
                report.add_intersecting_polygon(candidate);
            }
        }
    }

    /// Checks a list of candidate polygons against the base set.
    ///
    /// When the candidate list is the base list itself (same instances in the
    /// same order), each unordered pair is compared once and hits are
    /// recorded symmetrically in both reports. Otherwise every candidate is
    /// compared against every base polygon and hits are recorded in the base
    /// polygons' reports only.
    pub fn check_polygons(&mut self, candidates: &[&'a Polygon<Num>]) {
        if candidates.is_empty() {
            return;
        }

        let mut pairs = 0usize;
        let mut hits = 0usize;

        if self.is_base_list(candidates) {
            for i in 0..self.base.len() {
                for j in (i + 1)..self.base.len() {
                    if std::ptr::eq(self.base[i], self.base[j]) {
                        continue;
                    }
                    pairs += 1;
                    if interiors_overlap(self.base[i], self.base[j]) {
                        hits += 1;
                        self.reports[i].add_intersecting_polygon(self.base[j]);
                        self.reports[j].add_intersecting_polygon(self.base[i]);
                    }
                }
            }
        } else {
            for (base, report) in self.base.iter().zip(self.reports.iter_mut()) {
                for &candidate in candidates {
                    if std::ptr::eq(*base, candidate) {
                        continue;
                    }
                    pairs += 1;
                    if interiors_overlap(base, candidate) {
                        hits += 1;
                        report.add_intersecting_polygon(candidate);
                    }
                }
            }
        }

        debug!("compared {pairs} polygon pairs, recorded {hits} intersections");
    }

    /// Returns true if the candidate list is the base list: the same polygon
    /// instances in the same order.
    fn is_base_list(&self, candidates: &[&'a Polygon<Num>]) -> bool {
        self.base.len() == candidates.len()
            && self
                .base
                .iter()
                .zip(candidates)
                .all(|(base, candidate)| std::ptr::eq(*base, *candidate))
    }
}
