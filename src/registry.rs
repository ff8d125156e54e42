// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Looking up targets by name.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{Bullseye, Circle, ConcreteTarget, DataSummary, DotGrid, LineFigure};

/// Builds a target fitted to a dataset.
pub type Constructor = fn(&dyn DataSummary) -> ConcreteTarget;

/// The targets every registry built with [`ShapeRegistry::builtin`] knows.
pub const BUILTIN_SHAPES: &[(&str, Constructor)] = &[
    ("circle", |data| Circle::from_data(data).into()),
    ("bullseye", |data| Bullseye::from_data(data).into()),
    ("dot-grid", |data| DotGrid::from_data(data).into()),
    ("x-lines", |data| LineFigure::x_lines(data.bounds()).into()),
    ("horizontal-lines", |_| LineFigure::horizontal_lines().into()),
    ("vertical-lines", |_| LineFigure::vertical_lines().into()),
];

/// Fixed line figures added by [`ShapeRegistry::extended`].
///
/// Like the horizontal and vertical lines, these are laid out in the
/// normalized 0–100 range and ignore the data.
pub const EXTRA_SHAPES: &[(&str, Constructor)] = &[
    ("wide-lines", |_| LineFigure::wide_lines().into()),
    ("high-lines", |_| LineFigure::high_lines().into()),
    ("slant-up", |_| LineFigure::slant_up().into()),
    ("slant-down", |_| LineFigure::slant_down().into()),
    ("star", |_| LineFigure::star().into()),
    ("down-parab", |_| LineFigure::down_parab().into()),
];

/// The error returned when building a target under a name nobody registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownShape {
    name: String,
}

impl UnknownShape {
    /// The name that was looked up.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No such shape as {}.", self.name)
    }
}

impl core::error::Error for UnknownShape {}

/// The error returned when registering a name twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateShape {
    name: String,
}

impl DuplicateShape {
    /// The name that was already taken.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DuplicateShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A shape named {} is already registered.", self.name)
    }
}

impl core::error::Error for DuplicateShape {}

/// A mapping from shape names to target constructors.
///
/// Names are case-sensitive and unique. The registry is only written while
/// it is being set up; after that it is shared by reference, and building a
/// target never modifies it.
///
/// # Examples
///
/// ```
/// use morph_targets::{Point, PointCloud, ShapeRegistry, Target};
///
/// let data = PointCloud::new([Point::new(10.0, 10.0), Point::new(50.0, 30.0)]).unwrap();
/// let registry = ShapeRegistry::builtin();
///
/// let circle = registry.build("circle", &data).unwrap();
/// assert_eq!(circle.name(), "circle");
/// assert_eq!(circle.distance(Point::new(60.0, 20.0)), 0.0);
///
/// let err = registry.build("not-a-shape", &data).unwrap_err();
/// assert_eq!(err.to_string(), "No such shape as not-a-shape.");
/// ```
#[derive(Clone, Default)]
pub struct ShapeRegistry {
    entries: Vec<(Cow<'static, str>, Constructor)>,
}

impl ShapeRegistry {
    /// An empty registry.
    pub fn new() -> ShapeRegistry {
        ShapeRegistry::default()
    }

    /// A registry holding [`BUILTIN_SHAPES`].
    pub fn builtin() -> ShapeRegistry {
        ShapeRegistry::from_table(BUILTIN_SHAPES)
    }

    /// A registry holding [`BUILTIN_SHAPES`] followed by [`EXTRA_SHAPES`].
    pub fn extended() -> ShapeRegistry {
        let mut registry = ShapeRegistry::builtin();
        registry
            .entries
            .extend(EXTRA_SHAPES.iter().map(|&(name, ctor)| (Cow::Borrowed(name), ctor)));
        registry
    }

    fn from_table(table: &'static [(&'static str, Constructor)]) -> ShapeRegistry {
        ShapeRegistry {
            entries: table
                .iter()
                .map(|&(name, ctor)| (Cow::Borrowed(name), ctor))
                .collect(),
        }
    }

    /// Add a constructor under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateShape`] if `name` is already registered; the
    /// existing entry is kept.
    pub fn register(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        constructor: Constructor,
    ) -> Result<(), DuplicateShape> {
        let name = name.into();
        if self.contains(&name) {
            return Err(DuplicateShape {
                name: name.into_owned(),
            });
        }
        self.entries.push((name, constructor));
        Ok(())
    }

    /// Build the target registered as `name`, fitted to `data`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownShape`] if `name` is not registered.
    pub fn build(&self, name: &str, data: &dyn DataSummary) -> Result<ConcreteTarget, UnknownShape> {
        let ctor = self.lookup(name).ok_or_else(|| UnknownShape {
            name: name.into(),
        })?;
        Ok(ctor(data))
    }

    /// Build every registered target, in registration order.
    pub fn build_all<'a>(
        &'a self,
        data: &'a dyn DataSummary,
    ) -> impl Iterator<Item = (&'a str, ConcreteTarget)> + 'a {
        self.entries
            .iter()
            .map(move |(name, ctor)| (&**name, ctor(data)))
    }

    /// Whether a constructor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// The registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| &**name)
    }

    /// The number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, name: &str) -> Option<Constructor> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, ctor)| ctor)
    }
}

impl fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
