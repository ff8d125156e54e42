// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concentric rings.

use smallvec::SmallVec;

use crate::{Circle, DataSummary, Point, Target};

/// The ring radii of a bullseye fitted to data, innermost first.
pub const BULLSEYE_RADII: [f64; 2] = [18.0, 37.0];

/// A set of concentric hollow circles.
///
/// The distance to a bullseye is the distance to its nearest ring.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bullseye {
    rings: SmallVec<[Circle; 2]>,
}

impl Bullseye {
    /// Rings of the given radii around a common center.
    pub fn new(center: impl Into<Point>, radii: impl IntoIterator<Item = f64>) -> Bullseye {
        let center = center.into();
        Bullseye {
            rings: radii.into_iter().map(|r| Circle::new(center, r)).collect(),
        }
    }

    /// Rings of [`BULLSEYE_RADII`] around the mean of `data`.
    pub fn from_data(data: &dyn DataSummary) -> Bullseye {
        Bullseye::new(data.mean(), BULLSEYE_RADII)
    }

    /// The rings, in construction order.
    #[inline]
    pub fn rings(&self) -> &[Circle] {
        &self.rings
    }
}

impl Target for Bullseye {
    /// The distance to the nearest ring, or infinity if there are no rings.
    fn distance(&self, pt: Point) -> f64 {
        self.rings
            .iter()
            .map(|ring| ring.distance(pt))
            .fold(f64::INFINITY, f64::min)
    }

    #[inline]
    fn name(&self) -> &str {
        "bullseye"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointCloud;

    #[test]
    fn nearest_ring() {
        let b = Bullseye::new((0.0, 0.0), [10.0, 20.0]);
        assert_eq!(b.distance_xy(0.0, 0.0), 10.0);
        assert_eq!(b.distance_xy(12.0, 0.0), 2.0);
        assert_eq!(b.distance_xy(0.0, 16.0), 4.0);
        assert_eq!(b.distance_xy(0.0, -25.0), 5.0);
        assert_eq!(b.distance_xy(20.0, 0.0), 0.0);
        assert_eq!(b.distance_xy(0.0, 10.0), 0.0);
    }

    #[test]
    fn min_of_rings() {
        let b = Bullseye::new((3.0, -4.0), [18.0, 37.0]);
        let [inner, outer] = [b.rings()[0], b.rings()[1]];
        for pt in [(0.0, 0.0), (3.0, 10.0), (50.0, 50.0), (-30.0, 2.5)] {
            let pt = Point::from(pt);
            assert_eq!(
                b.distance(pt),
                inner.distance(pt).min(outer.distance(pt)),
                "{pt:?}"
            );
        }
    }

    #[test]
    fn fitted_to_mean() {
        let data = PointCloud::new([Point::new(10.0, 10.0), Point::new(30.0, 50.0)]).unwrap();
        let b = Bullseye::from_data(&data);
        assert_eq!(b.rings().len(), 2);
        for (ring, radius) in b.rings().iter().zip(BULLSEYE_RADII) {
            assert_eq!(ring.center, Point::new(20.0, 30.0));
            assert_eq!(ring.radius, radius);
        }
        assert_eq!(b.name(), "bullseye");
    }

    #[test]
    fn no_rings() {
        let b = Bullseye::new(Point::ZERO, Vec::new());
        assert_eq!(b.distance(Point::ZERO), f64::INFINITY);
    }
}
