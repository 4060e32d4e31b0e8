//! Curve generators: per-round stitch counts for basic solids.
//!
//! Gauge is fixed at one stitch per unit length (and one stitch of height
//! per row), so a circle of diameter `d` measures `πd` stitches around. Each
//! generator evaluates its shape's cross-section circumference per row and
//! snaps the result to a multiple of six, never below six — six is the usual
//! base count for working in the round, and no round may degenerate below a
//! workable ring.

use std::f64::consts::{PI, TAU};

use tracing::debug;

use crate::error::{Error, Result};
use crate::util::round_to_nearest_slice;

/// Stitch counts are snapped to multiples of this.
static ROUND_STEP: u32 = 6;
/// No round shrinks below this.
static MIN_STITCHES: u32 = 6;

/// Raw cross-section circumferences of a sphere, pole to pole, one per row.
///
/// `rows` is proportional to the sphere's diameter: the sphere's
/// circumference through the poles is `2 * (rows + 1)` stitches, so its
/// radius is `(rows + 1) / π`.
pub fn sphere_circumferences(rows: usize) -> Result<Vec<f64>> {
    if rows == 0 {
        return Err(Error::ZeroRows);
    }
    let radius = (rows + 1) as f64 / PI;
    let row_angle = PI / (rows + 1) as f64;
    debug!(radius, row_angle, "sphere cross-section");
    Ok((0..rows)
        .map(|row| TAU * radius * ((row + 1) as f64 * row_angle).sin())
        .collect())
}

/// Per-round stitch counts for a sphere of `rows` rows.
///
/// ```
/// use crocad::shape::sphere;
///
/// assert_eq!(sphere(4)?, [6, 12, 12, 6]);
/// # Ok::<(), crocad::Error>(())
/// ```
pub fn sphere(rows: usize) -> Result<Vec<u32>> {
    round_to_nearest_slice(&sphere_circumferences(rows)?, ROUND_STEP, MIN_STITCHES)
}

/// Raw cross-section circumferences of a torus, one per row, starting at the
/// inside of the ring and sweeping up, around and back.
///
/// Diameters are measured in stitch lengths across the whole donut
/// (`outer_diameter`) and across its hole (`inner_diameter`); the tube swept
/// between them has diameter `(outer - inner) / 2`, which fixes the row
/// count at `round(π * tube_diameter)`.
pub fn torus_circumferences(inner_diameter: u32, outer_diameter: u32) -> Result<Vec<f64>> {
    if outer_diameter <= inner_diameter {
        return Err(Error::DegenerateTorus {
            inner: inner_diameter,
            outer: outer_diameter,
        });
    }
    let tube_diameter = f64::from(outer_diameter - inner_diameter) / 2.0;
    let rows = (PI * tube_diameter).round() as usize;
    let hole = PI * f64::from(inner_diameter);
    let row_angle = TAU / rows as f64;
    debug!(hole, rows, row_angle, "torus cross-section");
    Ok((0..rows)
        .map(|row| hole + rows as f64 * (1.0 - (row as f64 * row_angle).cos()))
        .collect())
}

/// Per-round stitch counts for a torus swept between the two diameters.
pub fn torus(inner_diameter: u32, outer_diameter: u32) -> Result<Vec<u32>> {
    round_to_nearest_slice(
        &torus_circumferences(inner_diameter, outer_diameter)?,
        ROUND_STEP,
        MIN_STITCHES,
    )
}
