// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounds of a dataset.

use core::fmt;

use crate::Point;

/// The per-axis minimum and maximum of a dataset.
///
/// Only the X target reads bounds directly (it joins opposite corners);
/// callers also use them to scale coordinates before querying a target.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// The minimum x coordinate.
    pub x0: f64,
    /// The minimum y coordinate.
    pub y0: f64,
    /// The maximum x coordinate.
    pub x1: f64,
    /// The maximum y coordinate.
    pub y1: f64,
}

impl Bounds {
    /// New bounds from minimum and maximum coordinates.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Bounds {
        Bounds { x0, y0, x1, y1 }
    }

    /// New bounds from two opposite corners.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Bounds {
        let p0 = p0.into();
        let p1 = p1.into();
        Bounds {
            x0: p0.x.min(p1.x),
            y0: p0.y.min(p1.y),
            x1: p0.x.max(p1.x),
            y1: p0.y.max(p1.y),
        }
    }

    /// The smallest bounds enclosing every point, or `None` if there are none.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Bounds> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Bounds::from_points(first, first), Bounds::union_pt))
    }

    /// Extend the bounds to include one point.
    #[inline]
    #[must_use]
    pub fn union_pt(self, pt: Point) -> Bounds {
        Bounds {
            x0: self.x0.min(pt.x),
            y0: self.y0.min(pt.y),
            x1: self.x1.max(pt.x),
            y1: self.y1.max(pt.y),
        }
    }

    /// The corner with both coordinates minimal.
    #[inline]
    pub fn min(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// The corner with both coordinates maximal.
    #[inline]
    pub fn max(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The four corners, counter-clockwise from [`Bounds::min`] in a y-up space.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x0, self.y0),
            Point::new(self.x1, self.y0),
            Point::new(self.x1, self.y1),
            Point::new(self.x0, self.y1),
        ]
    }

    /// The width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }

    /// Whether `pt` lies inside the bounds, edges included.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x0 && pt.x <= self.x1 && pt.y >= self.y0 && pt.y <= self.y1
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: [")?;
        fmt::Display::fmt(&self.x0, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.x1, f)?;
        write!(f, "], y: [")?;
        fmt::Display::fmt(&self.y0, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.y1, f)?;
        write!(f, "]")
    }
}
