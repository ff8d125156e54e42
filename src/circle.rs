// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of the hollow circle target.

use crate::{DataSummary, Point, Target};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The radius of a circle fitted to data.
///
/// This is a fixed value, not derived from the data's spread.
pub const CIRCLE_RADIUS: f64 = 30.0;

/// A hollow circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// A circle of [`CIRCLE_RADIUS`] centred on the mean of `data`.
    pub fn from_data(data: &dyn DataSummary) -> Circle {
        Circle::new(data.mean(), CIRCLE_RADIUS)
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

impl Target for Circle {
    #[inline]
    fn distance(&self, pt: Point) -> f64 {
        (self.center.distance(pt) - self.radius).abs()
    }

    #[inline]
    fn name(&self) -> &str {
        "circle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointCloud;

    #[test]
    fn zero_on_ring() {
        let c = Circle::new((10.0, 20.0), 5.0);
        for pt in [(15.0, 20.0), (10.0, 25.0), (5.0, 20.0), (13.0, 24.0)] {
            assert_eq!(c.distance(pt.into()), 0.0, "{pt:?}");
        }
    }

    #[test]
    fn inside_and_outside() {
        let c = Circle::new((0.0, 0.0), 5.0);
        assert_eq!(c.distance(Point::ZERO), 5.0);
        assert_eq!(c.distance_xy(0.0, 8.0), 3.0);
        assert_eq!(c.distance_xy(-3.0, 0.0), 2.0);
    }

    #[test]
    fn fitted_to_mean() {
        let data = PointCloud::new([Point::new(0.0, 0.0), Point::new(10.0, 40.0)]).unwrap();
        let c = Circle::from_data(&data);
        assert_eq!(c.center, Point::new(5.0, 20.0));
        assert_eq!(c.radius, CIRCLE_RADIUS);
        assert_eq!(c.name(), "circle");
    }
}
