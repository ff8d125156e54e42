// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::{Bullseye, Circle, DotGrid, LineFigure, Point, Target};

/// An enum type with variants matching the target types this crate exports.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ConcreteTarget {
    /// A [`Circle`] instance.
    Circle(Circle),
    /// A [`Bullseye`] instance.
    Bullseye(Bullseye),
    /// A [`DotGrid`] instance.
    DotGrid(DotGrid),
    /// A [`LineFigure`] instance.
    LineFigure(LineFigure),
}

macro_rules! from_impl {
    ($Target: ident) => {
        impl From<$Target> for ConcreteTarget {
            fn from(value: $Target) -> Self {
                Self::$Target(value)
            }
        }
    };
}

from_impl!(Circle);
from_impl!(Bullseye);
from_impl!(DotGrid);
from_impl!(LineFigure);

macro_rules! match_target {
    ($x:ident, $i:ident, $e: expr) => {
        match $x {
            ConcreteTarget::Circle($i) => $e,
            ConcreteTarget::Bullseye($i) => $e,
            ConcreteTarget::DotGrid($i) => $e,
            ConcreteTarget::LineFigure($i) => $e,
        }
    };
}

impl ConcreteTarget {
    /// If the target is a circle, make it available.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// If the target is a bullseye, make it available.
    pub fn as_bullseye(&self) -> Option<&Bullseye> {
        match self {
            Self::Bullseye(b) => Some(b),
            _ => None,
        }
    }

    /// If the target is a dot grid, make it available.
    pub fn as_dot_grid(&self) -> Option<&DotGrid> {
        match self {
            Self::DotGrid(g) => Some(g),
            _ => None,
        }
    }

    /// If the target is a line figure, make it available.
    pub fn as_line_figure(&self) -> Option<&LineFigure> {
        match self {
            Self::LineFigure(f) => Some(f),
            _ => None,
        }
    }
}

impl Target for ConcreteTarget {
    fn distance(&self, pt: Point) -> f64 {
        match_target!(self, it, it.distance(pt))
    }

    fn name(&self) -> &str {
        match_target!(self, it, it.name())
    }
}

impl fmt::Display for ConcreteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Bounds, Segment};

    #[test]
    fn test_collection() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let l = LineFigure::new("bar", [Segment::new((0.0, 0.0), (1.0, 0.0))]);
        let targets: Vec<ConcreteTarget> = vec![c.into(), l.clone().into()];

        assert_eq!(
            targets,
            vec![ConcreteTarget::Circle(c), ConcreteTarget::LineFigure(l)]
        );
        assert_eq!(targets[0].as_circle(), Some(&c));
        assert!(targets[0].as_line_figure().is_none());
        assert!(targets[1].as_bullseye().is_none());
        assert!(targets[1].as_dot_grid().is_none());
    }

    #[test]
    fn dispatch() {
        let c = Circle::new((0.0, 0.0), 5.0);
        let t = ConcreteTarget::from(c);
        assert_eq!(t.distance_xy(0.0, 8.0), c.distance_xy(0.0, 8.0));
        assert_eq!(t.name(), "circle");
    }

    #[test]
    fn render_names() {
        let targets: [ConcreteTarget; 6] = [
            Circle::default().into(),
            Bullseye::default().into(),
            DotGrid::default().into(),
            LineFigure::x_lines(Bounds::new(0.0, 0.0, 1.0, 1.0)).into(),
            LineFigure::horizontal_lines().into(),
            LineFigure::vertical_lines().into(),
        ];
        let names = targets.each_ref().map(|t| t.to_string());
        assert_eq!(names, ["circle", "bullseye", "dots", "x", "h_lines", "v_lines"]);
    }
}
