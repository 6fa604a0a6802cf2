use nalgebra::{SimdComplexField, SimdValue, Vector3};
use simba::simd::WideF64x4;

use crate::Float;

/// One target body evaluated against [`LANES`] source bodies at once.
pub type SimdFloat = WideF64x4;

pub const LANES: usize = 4;

/// Four-lane version of [`crate::acceleration`]: the acceleration on a body
/// at `position1` due to one source body per lane of `position2` / `mass2`.
///
/// Numerics are identical per lane to the scalar kernel, including the
/// singularity policy. Padding unused lanes with zero mass yields zero
/// acceleration in those lanes as long as their positions are distinct from
/// `position1`.
pub fn acceleration_simd(
    position1: Vector3<Float>,
    position2: Vector3<SimdFloat>,
    mass2: SimdFloat,
    g: Float,
    epsilon2: Float,
) -> Vector3<SimdFloat> {
    let pos = Vector3::<SimdFloat>::splat(position1);
    let r = position2 - pos;
    let r_square = r.norm_squared();
    let factor = SimdFloat::splat(g) * mass2
        / (r_square + SimdFloat::splat(epsilon2))
            .simd_sqrt()
            .simd_powi(3);
    r * factor
}

#[must_use]
pub fn pack_masses(masses: [Float; LANES]) -> SimdFloat {
    masses.into()
}

#[must_use]
pub fn pack_positions(positions: [Vector3<Float>; LANES]) -> Vector3<SimdFloat> {
    let mut packed: Vector3<SimdFloat> = Vector3::zeros();
    for (i, position) in positions.iter().enumerate() {
        for (j, &p) in position.iter().enumerate() {
            packed[j].replace(i, p);
        }
    }
    packed
}
