//! Pairwise softened-gravity kernel for N-body simulations.
//!
//! This crate provides the single-pair force law every pairwise evaluation of
//! an N-body integrator funnels through: the acceleration on a body at one
//! position due to a point mass at another, under Newtonian gravity with
//! Plummer softening. Everything around it stays with the caller: the
//! integrator, the body store, the force summation over all pairs.
//!
//! The kernel is a pure, allocation-free computation. See [`gravity`] for the
//! numerical contract and the singularity policy.

pub mod gravity;
#[cfg(feature = "simd")]
pub mod simd;

pub use gravity::{acceleration, acceleration_into, GravitationalAcceleration, G};

/// Scalar type used throughout the crate.
pub type Float = f64;
