// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for target shapes.

use crate::Point;

/// A shape a point cloud can be morphed towards.
///
/// Implementations are immutable once built: `distance` must return the
/// same value every time it is called with the same point, so it can be
/// evaluated from several threads at once.
pub trait Target {
    /// Distance from `pt` to the outline of this target.
    ///
    /// Non-negative, and zero on the outline itself.
    fn distance(&self, pt: Point) -> f64;

    /// [`Target::distance`] for a point given by its coordinates.
    #[inline]
    fn distance_xy(&self, x: f64, y: f64) -> f64 {
        self.distance(Point::new(x, y))
    }

    /// The display name of this target, stable per variant.
    fn name(&self) -> &str;
}

impl<T: Target + ?Sized> Target for &T {
    #[inline]
    fn distance(&self, pt: Point) -> f64 {
        (**self).distance(pt)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}
