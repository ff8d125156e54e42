// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary statistics of the dataset a target is fitted to.

use alloc::vec::Vec;

use crate::common::quantile_sorted;
use crate::{Bounds, Point};

/// The quantiles data-fitted targets are built from: 5th, 50th and 95th.
pub const QUANTILES: [f64; 3] = [0.05, 0.5, 0.95];

/// The statistics a dataset must expose so targets can be fitted to it.
///
/// Every method reports both axes at once, packed into a [`Point`] (or
/// [`Bounds`] for the extrema).
pub trait DataSummary {
    /// The per-axis mean.
    fn mean(&self) -> Point;

    /// The per-axis minimum and maximum.
    fn bounds(&self) -> Bounds;

    /// The per-axis `q`-th quantile, for `q` in `[0, 1]`.
    fn quantile(&self, q: f64) -> Point;
}

/// An in-memory, non-empty set of points.
///
/// Sorted copies of each axis are kept so quantile queries don't re-sort.
#[derive(Clone, Debug)]
pub struct PointCloud {
    points: Vec<Point>,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PointCloud {
    /// Collect a point cloud.
    ///
    /// Returns `None` if there are no points, as no statistic is defined.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Option<PointCloud> {
        let points: Vec<Point> = points.into_iter().collect();
        if points.is_empty() {
            return None;
        }
        let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        xs.sort_by(f64::total_cmp);
        ys.sort_by(f64::total_cmp);
        Some(PointCloud { points, xs, ys })
    }

    /// The points, in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl DataSummary for PointCloud {
    fn mean(&self) -> Point {
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    fn bounds(&self) -> Bounds {
        // The sorted axes hold the extrema at either end.
        Bounds::new(
            self.xs[0],
            self.ys[0],
            self.xs[self.xs.len() - 1],
            self.ys[self.ys.len() - 1],
        )
    }

    fn quantile(&self, q: f64) -> Point {
        Point::new(
            quantile_sorted(&self.xs, q).unwrap_or(f64::NAN),
            quantile_sorted(&self.ys, q).unwrap_or(f64::NAN),
        )
    }
}

impl<T: DataSummary + ?Sized> DataSummary for &T {
    #[inline]
    fn mean(&self) -> Point {
        (**self).mean()
    }

    #[inline]
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    #[inline]
    fn quantile(&self, q: f64) -> Point {
        (**self).quantile(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud() -> PointCloud {
        PointCloud::new([
            Point::new(4.0, 10.0),
            Point::new(1.0, 40.0),
            Point::new(3.0, 20.0),
            Point::new(2.0, 30.0),
        ])
        .unwrap()
    }

    #[test]
    fn empty_is_none() {
        assert!(PointCloud::new(Vec::new()).is_none());
    }

    #[test]
    fn mean() {
        assert_eq!(cloud().mean(), Point::new(2.5, 25.0));
    }

    #[test]
    fn bounds() {
        assert_eq!(cloud().bounds(), Bounds::new(1.0, 10.0, 4.0, 40.0));
    }

    #[test]
    fn quantiles() {
        let c = cloud();
        assert_eq!(c.quantile(0.5), Point::new(2.5, 25.0));
        assert_eq!(c.quantile(0.0), Point::new(1.0, 10.0));
        assert_eq!(c.quantile(1.0), Point::new(4.0, 40.0));
        let q = c.quantile(0.05);
        assert!((q.x - 1.15).abs() < 1e-12, "{q:?}");
        assert!((q.y - 11.5).abs() < 1e-12, "{q:?}");
    }

    #[test]
    fn points_keep_order() {
        let c = cloud();
        assert_eq!(c.points()[0], Point::new(4.0, 10.0));
        assert_eq!(c.points().len(), 4);
    }

    fn mean_of(data: impl DataSummary) -> Point {
        data.mean()
    }

    #[test]
    fn through_reference() {
        let c = cloud();
        let r: &dyn DataSummary = &c;
        assert_eq!(mean_of(&c), c.mean());
        assert_eq!(mean_of(r), c.mean());
    }
}
