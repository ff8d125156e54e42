// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print each built-in target as an ASCII distance field.
//!
//! Pass a shape name to print just that one, e.g.
//! `cargo run --example distance_field -- bullseye`.

#[cfg(feature = "std")]
fn main() {
    use morph_targets::{Point, PointCloud, ShapeRegistry, Target};

    const SHADES: &[u8] = b"@#*+-. ";
    const COLS: u32 = 60;
    const ROWS: u32 = 30;

    // A sheared blob over roughly the middle of the 0-100 square.
    let data = PointCloud::new((0..200).map(|i| {
        let t = f64::from(i) * 0.37;
        let r = 10.0 + f64::from(i % 23);
        Point::new(50.0 + r * t.cos(), 50.0 + 0.8 * r * t.sin() + 0.2 * r * t.cos())
    }))
    .expect("non-empty data");

    let registry = ShapeRegistry::extended();
    let wanted = std::env::args().nth(1);
    if let Some(name) = &wanted {
        if !registry.contains(name) {
            let names: Vec<_> = registry.names().collect();
            eprintln!("No such shape as {name}. Known shapes: {}", names.join(", "));
            std::process::exit(1);
        }
    }

    for (name, target) in registry.build_all(&data) {
        if wanted.as_deref().is_some_and(|w| w != name) {
            continue;
        }
        println!("{name} ({target})");
        for row in 0..ROWS {
            let y = 100.0 - (f64::from(row) + 0.5) * 100.0 / f64::from(ROWS);
            let line: String = (0..COLS)
                .map(|col| {
                    let x = (f64::from(col) + 0.5) * 100.0 / f64::from(COLS);
                    let d = target.distance_xy(x, y);
                    // One shade per two units of distance.
                    #[expect(
                        clippy::cast_possible_truncation,
                        reason = "clamped to the shade table below"
                    )]
                    let ix = ((d / 2.0) as usize).min(SHADES.len() - 1);
                    char::from(SHADES[ix])
                })
                .collect();
            println!("{line}");
        }
        println!();
    }
}

#[cfg(not(feature = "std"))]
fn main() {
    println!("This example requires the standard library");
}
