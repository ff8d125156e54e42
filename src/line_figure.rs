// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Targets made of straight segments.

use alloc::borrow::Cow;

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::{Bounds, Point, Segment, Target};

/// The coordinate range the fixed line families are laid out in.
///
/// These figures do not look at the data at all; callers are expected to
/// have scaled their data into this range.
pub const NORMALIZED_RANGE: (f64, f64) = (0.0, 100.0);

/// Where the parallel lines of [`LineFigure::horizontal_lines`] and
/// [`LineFigure::vertical_lines`] sit within [`NORMALIZED_RANGE`].
pub const LINE_POSITIONS: [f64; 5] = [10.0, 30.0, 50.0, 70.0, 90.0];

/// The outline of the star, as `(x, y)` pairs in a y-down 0–100 space.
const STAR_POINTS: [(f64, f64); 10] = [
    (10.0, 40.0),
    (40.0, 40.0),
    (50.0, 10.0),
    (60.0, 40.0),
    (90.0, 40.0),
    (65.0, 60.0),
    (75.0, 90.0),
    (50.0, 70.0),
    (25.0, 90.0),
    (35.0, 60.0),
];

/// A figure made of line segments.
///
/// The distance to a figure is the distance to its nearest segment, as
/// measured by [`Segment::distance`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineFigure {
    name: Cow<'static, str>,
    segments: SmallVec<[Segment; 5]>,
}

impl LineFigure {
    /// A figure with the given display name and segments.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        segments: impl IntoIterator<Item = Segment>,
    ) -> LineFigure {
        LineFigure {
            name: name.into(),
            segments: segments.into_iter().collect(),
        }
    }

    /// A figure joining consecutive points.
    ///
    /// Fewer than two points give an empty figure.
    pub fn polyline(
        name: impl Into<Cow<'static, str>>,
        points: impl IntoIterator<Item = Point>,
    ) -> LineFigure {
        let mut points = points.into_iter();
        let mut segments = SmallVec::new();
        if let Some(mut prev) = points.next() {
            for pt in points {
                segments.push(Segment::new(prev, pt));
                prev = pt;
            }
        }
        LineFigure {
            name: name.into(),
            segments,
        }
    }

    /// The two diagonals of `bounds`, forming an X.
    pub fn x_lines(bounds: Bounds) -> LineFigure {
        let Bounds { x0, y0, x1, y1 } = bounds;
        LineFigure::new(
            "x",
            [
                Segment::new((x0, y0), (x1, y1)),
                Segment::new((x0, y1), (x1, y0)),
            ],
        )
    }

    /// Horizontal lines spanning [`NORMALIZED_RANGE`] at each of
    /// [`LINE_POSITIONS`].
    pub fn horizontal_lines() -> LineFigure {
        let (lo, hi) = NORMALIZED_RANGE;
        LineFigure::new(
            "h_lines",
            LINE_POSITIONS.map(|y| Segment::new((lo, y), (hi, y))),
        )
    }

    /// Vertical lines spanning [`NORMALIZED_RANGE`] at each of
    /// [`LINE_POSITIONS`].
    pub fn vertical_lines() -> LineFigure {
        let (lo, hi) = NORMALIZED_RANGE;
        LineFigure::new(
            "v_lines",
            LINE_POSITIONS.map(|x| Segment::new((x, lo), (x, hi))),
        )
    }

    /// Two vertical lines near the left and right edges.
    pub fn wide_lines() -> LineFigure {
        LineFigure::new(
            "wide_lines",
            [
                Segment::new((10.0, 0.0), (10.0, 100.0)),
                Segment::new((90.0, 0.0), (90.0, 100.0)),
            ],
        )
    }

    /// Two horizontal lines near the top and bottom edges.
    pub fn high_lines() -> LineFigure {
        LineFigure::new(
            "high_lines",
            [
                Segment::new((0.0, 10.0), (100.0, 10.0)),
                Segment::new((0.0, 90.0), (100.0, 90.0)),
            ],
        )
    }

    /// Five parallel lines rising left to right.
    pub fn slant_up() -> LineFigure {
        LineFigure::new(
            "slant_up",
            [
                Segment::new((0.0, 0.0), (100.0, 100.0)),
                Segment::new((0.0, 30.0), (70.0, 100.0)),
                Segment::new((30.0, 0.0), (100.0, 70.0)),
                Segment::new((50.0, 0.0), (100.0, 50.0)),
                Segment::new((0.0, 50.0), (50.0, 100.0)),
            ],
        )
    }

    /// Five parallel lines falling left to right.
    pub fn slant_down() -> LineFigure {
        LineFigure::new(
            "slant_down",
            [
                Segment::new((0.0, 100.0), (100.0, 0.0)),
                Segment::new((0.0, 70.0), (70.0, 0.0)),
                Segment::new((30.0, 100.0), (100.0, 30.0)),
                Segment::new((0.0, 50.0), (50.0, 0.0)),
                Segment::new((50.0, 100.0), (100.0, 50.0)),
            ],
        )
    }

    /// A closed five-pointed star outline.
    pub fn star() -> LineFigure {
        let mut points: ArrayVec<Point, 11> = STAR_POINTS
            .iter()
            .map(|&(x, y)| Point::new(x * 0.8 + 20.0, 100.0 - y))
            .collect();
        points.push(points[0]);
        LineFigure::polyline("star", points)
    }

    /// A downward-opening parabola peaking at `(50, 90)`, sampled every 3
    /// units along x.
    pub fn down_parab() -> LineFigure {
        LineFigure::polyline(
            "down_parab",
            (0..100).step_by(3).map(|x| {
                let x = f64::from(x);
                let t = (x - 50.0) / 4.0;
                Point::new(x, -(t * t) + 90.0)
            }),
        )
    }

    /// The segments, in construction order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Target for LineFigure {
    /// The distance to the nearest segment, or infinity if there are none.
    fn distance(&self, pt: Point) -> f64 {
        self.segments
            .iter()
            .map(|seg| seg.distance(pt))
            .fold(f64::INFINITY, f64::min)
    }

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEGENERATE_DISTANCE;

    #[test]
    fn x_lines_cross_at_center() {
        let x = LineFigure::x_lines(Bounds::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(x.name(), "x");
        assert_eq!(x.segments().len(), 2);
        assert_eq!(x.distance_xy(50.0, 50.0), 0.0);
        assert_eq!(x.distance_xy(25.0, 25.0), 0.0);
        assert_eq!(x.distance_xy(25.0, 75.0), 0.0);
        let d = x.distance_xy(50.0, 60.0);
        assert!((d - 50.0_f64.sqrt()).abs() < 1e-9, "{d}");
    }

    #[test]
    fn x_lines_follow_bounds() {
        let x = LineFigure::x_lines(Bounds::new(10.0, 20.0, 30.0, 60.0));
        assert_eq!(x.segments()[0], Segment::new((10.0, 20.0), (30.0, 60.0)));
        assert_eq!(x.segments()[1], Segment::new((10.0, 60.0), (30.0, 20.0)));
    }

    #[test]
    fn horizontal() {
        let h = LineFigure::horizontal_lines();
        assert_eq!(h.name(), "h_lines");
        assert_eq!(h.segments().len(), 5);
        for y in LINE_POSITIONS {
            assert_eq!(h.distance_xy(50.0, y), 0.0);
        }
        assert_eq!(h.distance_xy(50.0, 20.0), 10.0);
        assert_eq!(h.distance_xy(50.0, 94.0), 4.0);
    }

    #[test]
    fn vertical() {
        let v = LineFigure::vertical_lines();
        assert_eq!(v.name(), "v_lines");
        for x in LINE_POSITIONS {
            assert_eq!(v.distance_xy(x, 50.0), 0.0);
        }
        assert_eq!(v.distance_xy(41.0, 50.0), 9.0);
        assert_eq!(v.segments()[2], Segment::new((50.0, 0.0), (50.0, 100.0)));
    }

    #[test]
    fn polyline() {
        let p = LineFigure::polyline(
            "zigzag",
            [
                Point::new(0.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(20.0, 0.0),
            ],
        );
        assert_eq!(p.name(), "zigzag");
        assert_eq!(p.segments().len(), 2);
        assert_eq!(p.segments()[1].start, Point::new(10.0, 10.0));
        assert!(LineFigure::polyline("dot", [Point::ZERO]).segments().is_empty());
    }

    #[test]
    fn degenerate_segment_is_ignored_by_min() {
        let f = LineFigure::new(
            "mixed",
            [
                Segment::new((5.0, 5.0), (5.0, 5.0)),
                Segment::new((0.0, 0.0), (0.0, 100.0)),
            ],
        );
        assert_eq!(f.distance_xy(3.0, 50.0), 3.0);
        let only = LineFigure::new("point", [Segment::new((5.0, 5.0), (5.0, 5.0))]);
        assert_eq!(only.distance_xy(5.0, 5.0), DEGENERATE_DISTANCE);
    }

    #[test]
    fn star_is_closed() {
        let s = LineFigure::star();
        assert_eq!(s.segments().len(), 10);
        let first = s.segments()[0];
        let last = s.segments()[9];
        assert_eq!(last.end, first.start);
        assert_eq!(first.start, Point::new(28.0, 60.0));
        for seg in s.segments() {
            assert!(!seg.is_degenerate());
        }
    }

    #[test]
    fn down_parab() {
        let p = LineFigure::down_parab();
        assert_eq!(p.segments().len(), 33);
        assert_eq!(p.segments()[0].start, Point::new(0.0, -66.25));
        assert_eq!(p.segments()[32].end.x, 99.0);
        let mid = p.segments()[16].eval(0.5);
        let d = p.distance(mid);
        assert!(d < 1e-9, "{d}");
    }

    #[test]
    fn supplemental_names() {
        for (f, name) in [
            (LineFigure::wide_lines(), "wide_lines"),
            (LineFigure::high_lines(), "high_lines"),
            (LineFigure::slant_up(), "slant_up"),
            (LineFigure::slant_down(), "slant_down"),
            (LineFigure::star(), "star"),
            (LineFigure::down_parab(), "down_parab"),
        ] {
            assert_eq!(f.name(), name);
        }
    }
}
