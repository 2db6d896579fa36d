use std::cmp::Ordering;

use num_traits::Float;

use crate::rect::Rect;

/// Even-odd crossing accumulator for rectangle queries against a polygon
/// boundary.
///
/// The boundary is fed in edge by edge through [`Crossings::accumulate_line`].
/// An edge that enters the open x-range of the query rectangle within its
/// y-span makes the accumulation fail fast (the boundary crosses the
/// rectangle). Edges passing entirely to the left of the rectangle record the
/// y-interval they span; the recorded intervals combine under the even-odd
/// rule, so after a full pass the parity of coverage at any y tells whether
/// that horizontal slice of the rectangle is interior to the polygon.
#[derive(Debug)]
pub(crate) struct Crossings<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
    spans: Vec<(N, N)>,
}

impl<N: Float> Crossings<N> {
    pub(crate) fn new(rect: &Rect<N>) -> Self {
        Self {
            x_min: rect.x_min(),
            y_min: rect.y_min(),
            x_max: rect.x_max(),
            y_max: rect.y_max(),
            spans: Vec::new(),
        }
    }

    /// Accumulates one boundary edge. Returns true if the edge passes through
    /// the rectangle, in which case the accumulation is no longer meaningful.
    pub(crate) fn accumulate_line(&mut self, x0: N, y0: N, x1: N, y1: N) -> bool {
        if y0 <= y1 {
            self.accumulate_upward(x0, y0, x1, y1)
        } else {
            self.accumulate_upward(x1, y1, x0, y0)
        }
    }

    /// Same as [`Crossings::accumulate_line`] for an edge already oriented
    /// with non-decreasing y.
    fn accumulate_upward(&mut self, x0: N, y0: N, x1: N, y1: N) -> bool {
        if y0 >= self.y_max || y1 <= self.y_min {
            return false;
        }
        if x0 >= self.x_max && x1 >= self.x_max {
            return false;
        }
        if y0 == y1 {
            // Horizontal edge inside the y-span: it crosses the rectangle iff
            // it reaches past the left boundary.
            return x0 >= self.x_min || x1 >= self.x_min;
        }

        // Clip the edge to the rectangle's y-span.
        let dx = x1 - x0;
        let dy = y1 - y0;
        let (x_start, y_start) = if y0 < self.y_min {
            (x0 + (self.y_min - y0) * dx / dy, self.y_min)
        } else {
            (x0, y0)
        };
        let (x_end, y_end) = if self.y_max < y1 {
            (x0 + (self.y_max - y0) * dx / dy, self.y_max)
        } else {
            (x1, y1)
        };

        if x_start >= self.x_max && x_end >= self.x_max {
            return false;
        }
        if x_start > self.x_min || x_end > self.x_min {
            return true;
        }

        self.record(y_start, y_end);
        false
    }

    fn record(&mut self, y_start: N, y_end: N) {
        if y_start < y_end {
            self.spans.push((y_start, y_end));
        }
    }

    /// Returns true if no y-interval of positive length has odd coverage
    /// parity, i.e. no horizontal slice of the rectangle is inside the
    /// polygon.
    pub(crate) fn is_empty(&self) -> bool {
        let mut cuts: Vec<N> = Vec::with_capacity(self.spans.len() * 2);
        for (start, end) in &self.spans {
            cuts.push(*start);
            cuts.push(*end);
        }
        sort_partial(&mut cuts);

        !cuts
            .windows(2)
            .any(|pair| pair[0] < pair[1] && self.odd_parity_at(midpoint(pair[0], pair[1])))
    }

    /// Returns true if every y in `[y_start, y_end]` has odd coverage parity,
    /// i.e. the whole vertical extent of the query is inside the polygon.
    pub(crate) fn covers(&self, y_start: N, y_end: N) -> bool {
        let mut cuts = vec![y_start, y_end];
        for (start, end) in &self.spans {
            if y_start < *start && *start < y_end {
                cuts.push(*start);
            }
            if y_start < *end && *end < y_end {
                cuts.push(*end);
            }
        }
        sort_partial(&mut cuts);

        cuts.windows(2)
            .all(|pair| pair[0] >= pair[1] || self.odd_parity_at(midpoint(pair[0], pair[1])))
    }

    fn odd_parity_at(&self, y: N) -> bool {
        self.spans
            .iter()
            .filter(|(start, end)| *start < y && y < *end)
            .count()
            % 2
            == 1
    }
}

fn midpoint<N: Float>(a: N, b: N) -> N {
    (a + b) / (N::one() + N::one())
}

fn sort_partial<N: Float>(values: &mut [N]) {
    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}
