// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target shapes for morphing 2D point clouds.
//!
//! A morph gradually perturbs a dataset so that it comes to resemble some
//! shape while keeping its summary statistics. This crate supplies those
//! shapes: each [`Target`] answers how far a point is from its outline, and
//! the perturbation loop uses that distance to decide which moves to keep.
//!
//! Targets are built from a [`ShapeRegistry`] by name, fitted to the
//! statistics of the starting dataset (see [`DataSummary`]), and are
//! immutable afterwards.
//!
//! # Examples
//!
//! ```
//! use morph_targets::{Point, PointCloud, ShapeRegistry, Target};
//!
//! let data = PointCloud::new([
//!     Point::new(20.0, 30.0),
//!     Point::new(80.0, 70.0),
//!     Point::new(50.0, 50.0),
//! ])
//! .unwrap();
//!
//! let registry = ShapeRegistry::builtin();
//! for name in ["circle", "bullseye", "dot-grid", "x-lines"] {
//!     let target = registry.build(name, &data).unwrap();
//!     let d = target.distance_xy(50.0, 50.0);
//!     assert!(d >= 0.0, "{target}: {d}");
//! }
//!
//! assert!(registry.build("triangle", &data).is_err());
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate uses [alloc] regardless.
//!
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the
//!   geometry and target types.
//! - `schemars`: Derive `JsonSchema` for the same types.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [mint] types.
//!
//! [`libm`]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("morph_targets requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod bounds;
mod bullseye;
mod circle;
pub mod common;
mod concrete_target;
mod dataset;
mod dot_grid;
mod line_figure;
mod point;
mod registry;
mod segment;
mod target;
mod vec2;

pub use crate::bounds::Bounds;
pub use crate::bullseye::{Bullseye, BULLSEYE_RADII};
pub use crate::circle::{Circle, CIRCLE_RADIUS};
pub use crate::concrete_target::ConcreteTarget;
pub use crate::dataset::{DataSummary, PointCloud, QUANTILES};
pub use crate::dot_grid::DotGrid;
pub use crate::line_figure::{LineFigure, LINE_POSITIONS, NORMALIZED_RANGE};
pub use crate::point::Point;
pub use crate::registry::{
    Constructor, DuplicateShape, ShapeRegistry, UnknownShape, BUILTIN_SHAPES, EXTRA_SHAPES,
};
pub use crate::segment::{Segment, DEGENERATE_DISTANCE, DEGENERATE_LENGTH, PROJECTION_TOLERANCE};
pub use crate::target::Target;
pub use crate::vec2::Vec2;
