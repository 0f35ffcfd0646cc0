//! The input boundary: anything that can be sampled at a proportion of its
//! length.

use crate::error::EpicycleError;

/// A 2-D point, stored as `[x, y]`.
pub type Point2 = [f64; 2];

/// A parametric curve that can be evaluated at a proportion `t ∈ [0, 1)`.
///
/// This is the single capability the approximator needs from its input. The
/// samples are treated as closed-curve data, so `point_from_proportion(0.0)`
/// and the limit towards `1.0` should meet for a clean approximation, but
/// nothing enforces that.
pub trait SamplePath {
    fn point_from_proportion(&self, t: f64) -> Result<Point2, EpicycleError>;
}

/// Plain closures are infallible paths.
impl<F> SamplePath for F
where
    F: Fn(f64) -> Point2,
{
    fn point_from_proportion(&self, t: f64) -> Result<Point2, EpicycleError> {
        Ok(self(t))
    }
}

/// A piecewise-linear path parameterized by arc length, so equal steps in `t`
/// cover equal distances along the outline regardless of vertex spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
    /// Cumulative arc length up to each vertex. For closed polylines this has
    /// one extra entry for the segment wrapping back to the first vertex.
    cumulative: Vec<f64>,
    total_length: f64,
    closed: bool,
}

impl Polyline {
    /// An open polyline through `points`. Out-of-range `t` clamps to the ends.
    pub fn open(points: Vec<Point2>) -> Result<Self, EpicycleError> {
        Self::new(points, false)
    }

    /// A closed polyline: the last vertex connects back to the first, and `t`
    /// wraps modulo 1.
    pub fn closed(points: Vec<Point2>) -> Result<Self, EpicycleError> {
        Self::new(points, true)
    }

    fn new(points: Vec<Point2>, closed: bool) -> Result<Self, EpicycleError> {
        if points.len() < 2 {
            return Err(EpicycleError::IncompatibleInput(
                "a polyline needs at least two points",
            ));
        }

        let mut cumulative = Vec::with_capacity(points.len() + 1);
        cumulative.push(0.0);
        let mut total = 0.0;
        for pair in points.windows(2) {
            total += distance(pair[0], pair[1]);
            cumulative.push(total);
        }
        if closed {
            total += distance(points[points.len() - 1], points[0]);
            cumulative.push(total);
        }

        if total <= f64::EPSILON {
            return Err(EpicycleError::IncompatibleInput(
                "polyline has zero total length",
            ));
        }

        Ok(Self {
            points,
            cumulative,
            total_length: total,
            closed,
        })
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }
}

impl SamplePath for Polyline {
    fn point_from_proportion(&self, t: f64) -> Result<Point2, EpicycleError> {
        let t = if self.closed {
            t.rem_euclid(1.0)
        } else {
            t.clamp(0.0, 1.0)
        };
        let target = t * self.total_length;

        // Last cumulative entry with length <= target, capped so a target at
        // the very end still lands in the final segment.
        let segment = self
            .cumulative
            .partition_point(|&len| len <= target)
            .saturating_sub(1)
            .min(self.cumulative.len() - 2);

        let start = self.points[segment];
        let end = self.points[(segment + 1) % self.points.len()];
        let segment_length = self.cumulative[segment + 1] - self.cumulative[segment];
        if segment_length <= f64::EPSILON {
            // Zero-length segment between coincident vertices.
            return Ok(start);
        }

        let frac = (target - self.cumulative[segment]) / segment_length;
        Ok([
            start[0] + (end[0] - start[0]) * frac,
            start[1] + (end[1] - start[1]) * frac,
        ])
    }
}

#[inline]
fn distance(a: Point2, b: Point2) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_paths_are_infallible() {
        let line = |t: f64| [t, 2.0 * t];

        let point = line.point_from_proportion(0.25).unwrap();
        approx::assert_relative_eq!(point[0], 0.25, epsilon = 1e-12);
        approx::assert_relative_eq!(point[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn open_polyline_interpolates_by_arc_length() {
        // Two segments of unequal length: 3 units then 1 unit.
        let path = Polyline::open(vec![[0.0, 0.0], [3.0, 0.0], [3.0, 1.0]]).unwrap();

        approx::assert_relative_eq!(path.total_length(), 4.0, epsilon = 1e-12);

        // Half the total length is still inside the first segment.
        let mid = path.point_from_proportion(0.5).unwrap();
        approx::assert_relative_eq!(mid[0], 2.0, epsilon = 1e-12);
        approx::assert_relative_eq!(mid[1], 0.0, epsilon = 1e-12);

        // Three quarters is exactly the shared vertex.
        let corner = path.point_from_proportion(0.75).unwrap();
        approx::assert_relative_eq!(corner[0], 3.0, epsilon = 1e-12);
        approx::assert_relative_eq!(corner[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn open_polyline_clamps_out_of_range() {
        let path = Polyline::open(vec![[0.0, 0.0], [1.0, 0.0]]).unwrap();

        let before = path.point_from_proportion(-0.5).unwrap();
        let after = path.point_from_proportion(1.5).unwrap();
        assert_eq!(before, [0.0, 0.0]);
        assert_eq!(after, [1.0, 0.0]);
    }

    #[test]
    fn closed_polyline_wraps() {
        let square = Polyline::closed(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
            .unwrap();

        approx::assert_relative_eq!(square.total_length(), 4.0, epsilon = 1e-12);

        // The closing segment runs from (0, 1) back to (0, 0).
        let closing = square.point_from_proportion(0.875).unwrap();
        approx::assert_relative_eq!(closing[0], 0.0, epsilon = 1e-12);
        approx::assert_relative_eq!(closing[1], 0.5, epsilon = 1e-12);

        // t wraps modulo 1 in both directions.
        let a = square.point_from_proportion(0.25).unwrap();
        let b = square.point_from_proportion(1.25).unwrap();
        let c = square.point_from_proportion(-0.75).unwrap();
        approx::assert_relative_eq!(a[0], b[0], epsilon = 1e-12);
        approx::assert_relative_eq!(a[1], b[1], epsilon = 1e-12);
        approx::assert_relative_eq!(a[0], c[0], epsilon = 1e-12);
        approx::assert_relative_eq!(a[1], c[1], epsilon = 1e-12);
    }

    #[test]
    fn degenerate_polylines_are_rejected() {
        assert_eq!(
            Polyline::open(vec![[1.0, 1.0]]).unwrap_err(),
            EpicycleError::IncompatibleInput("a polyline needs at least two points"),
        );
        assert_eq!(
            Polyline::closed(vec![[1.0, 1.0], [1.0, 1.0]]).unwrap_err(),
            EpicycleError::IncompatibleInput("polyline has zero total length"),
        );
    }

    #[test]
    fn coincident_interior_vertices_do_not_panic() {
        let path =
            Polyline::open(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 0.0], [2.0, 0.0]]).unwrap();

        let mid = path.point_from_proportion(0.5).unwrap();
        approx::assert_relative_eq!(mid[0], 1.0, epsilon = 1e-12);
    }
}
