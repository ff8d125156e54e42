// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A grid of dots.

use smallvec::SmallVec;

use crate::{DataSummary, Point, Target, QUANTILES};

/// A set of isolated points.
///
/// Fitted to data, this is a 3×3 grid whose rows and columns sit at the
/// 5th, 50th and 95th percentiles of each axis.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DotGrid {
    dots: SmallVec<[Point; 9]>,
}

impl DotGrid {
    /// A target made of the given dots.
    pub fn new(dots: impl IntoIterator<Item = Point>) -> DotGrid {
        DotGrid {
            dots: dots.into_iter().collect(),
        }
    }

    /// Every combination of one of `xs` with one of `ys`.
    ///
    /// Dots are ordered by `x` first: `(x0, y0), (x0, y1), …, (x1, y0), …`.
    pub fn grid(xs: &[f64], ys: &[f64]) -> DotGrid {
        DotGrid::new(
            xs.iter()
                .flat_map(|&x| ys.iter().map(move |&y| Point::new(x, y))),
        )
    }

    /// The 3×3 grid at the [`QUANTILES`] of `data`.
    pub fn from_data(data: &dyn DataSummary) -> DotGrid {
        let qs = QUANTILES.map(|q| data.quantile(q));
        DotGrid::grid(&qs.map(|p| p.x), &qs.map(|p| p.y))
    }

    /// The dots, in construction order.
    #[inline]
    pub fn dots(&self) -> &[Point] {
        &self.dots
    }
}

impl Target for DotGrid {
    /// The distance to the nearest dot, or infinity if there are no dots.
    fn distance(&self, pt: Point) -> f64 {
        self.dots
            .iter()
            .map(|&dot| dot.distance(pt))
            .fold(f64::INFINITY, f64::min)
    }

    #[inline]
    fn name(&self) -> &str {
        "dots"
    }
}
