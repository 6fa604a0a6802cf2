use nalgebra::Vector3;

use crate::Float;

pub const G: Float = 6.6743015e-11;

/// Acceleration on a body at `position1` due to a source of mass `mass2` at
/// `position2`.
///
/// Plummer softening: `epsilon2` is a squared length added to the squared
/// separation in the denominator,
///
/// `a = g * mass2 * (position2 - position1) / (R² + epsilon2)^(3/2)`.
///
/// With `epsilon2 > 0` the denominator stays bounded away from zero as the
/// separation vanishes, so close encounters produce a bounded force and
/// coincident positions a zero vector. This is a modeling choice, not a
/// safety net: with `epsilon2 = 0` coincident positions divide zero by zero
/// and yield NaN, which is left for the caller to detect. No input is
/// validated.
///
/// The result points from `position1` toward `position2` (attraction).
pub fn acceleration(
    position1: Vector3<Float>,
    position2: Vector3<Float>,
    mass2: Float,
    g: Float,
    epsilon2: Float,
) -> Vector3<Float> {
    let r = position2 - position1;
    let r_square = r.norm_squared();
    r * (g * mass2 / (r_square + epsilon2).sqrt().powi(3))
}

/// Same as [`acceleration`], but writes into a caller-owned buffer.
///
/// The buffer is overwritten, never read, and no reference to it is
/// retained. An integrator summing over many pairs can hand the same scratch
/// vector to every call.
pub fn acceleration_into(
    position1: &Vector3<Float>,
    position2: &Vector3<Float>,
    mass2: Float,
    g: Float,
    epsilon2: Float,
    out: &mut Vector3<Float>,
) {
    position2.sub_to(position1, out);
    let r_square = out.norm_squared();
    let factor = g * mass2 / (r_square + epsilon2).sqrt().powi(3);
    *out *= factor;
}

/// The gravitational force, using a smoothing parameter to lessen the
/// singularity.
///
/// Bundles the simulation-wide constants `g` and `epsilon2` so that an
/// integrator configures them once and evaluates pairs against it.
#[derive(Clone, Copy, Debug)]
pub struct GravitationalAcceleration {
    g: Float,
    epsilon2: Float,
}

impl GravitationalAcceleration {
    #[must_use]
    pub fn new(g: Float, epsilon2: Float) -> Self {
        Self { g, epsilon2 }
    }

    /// Kernel using the CODATA value of the gravitational constant.
    #[must_use]
    pub fn with_standard_g(epsilon2: Float) -> Self {
        Self::new(G, epsilon2)
    }

    pub fn eval(
        &self,
        position1: Vector3<Float>,
        position2: Vector3<Float>,
        mass2: Float,
    ) -> Vector3<Float> {
        acceleration(position1, position2, mass2, self.g, self.epsilon2)
    }

    pub fn eval_into(
        &self,
        position1: &Vector3<Float>,
        position2: &Vector3<Float>,
        mass2: Float,
        out: &mut Vector3<Float>,
    ) {
        acceleration_into(position1, position2, mass2, self.g, self.epsilon2, out);
    }
}
