//! Scalar math
//!
//! Thin wrappers around the `f64` transcendental and rounding functions, plus the
//! interpolation, clamping, angle conversion and random helpers that the vector
//! types apply component-wise.

use rand::Rng;
use std::f64::consts::PI;

/// Scale factor for degrees to radians conversion (`PI / 180`)
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Scale factor for radians to degrees conversion (`180 / PI`)
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Largest finite value, used to seed running minimums
pub const MAX_NUMBER: f64 = f64::MAX;

/// Smallest finite value, used to seed running maximums
pub const MIN_NUMBER: f64 = -f64::MAX;

#[inline]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

#[inline]
pub fn sin(x: f64) -> f64 {
    x.sin()
}

#[inline]
pub fn cos(x: f64) -> f64 {
    x.cos()
}

#[inline]
pub fn tan(x: f64) -> f64 {
    x.tan()
}

#[inline]
pub fn asin(x: f64) -> f64 {
    x.asin()
}

#[inline]
pub fn acos(x: f64) -> f64 {
    x.acos()
}

#[inline]
pub fn atan(x: f64) -> f64 {
    x.atan()
}

/// Four quadrant arc tangent of `y / x`
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Natural logarithm
#[inline]
pub fn ln(x: f64) -> f64 {
    x.ln()
}

/// Natural logarithm, same as [`ln`]
#[inline]
pub fn log(x: f64) -> f64 {
    x.ln()
}

#[inline]
pub fn log2(x: f64) -> f64 {
    x.log2()
}

#[inline]
pub fn log10(x: f64) -> f64 {
    x.log10()
}

#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    x.powf(y)
}

#[inline]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[inline]
pub fn floor(x: f64) -> f64 {
    x.floor()
}

/// Rounds to the nearest integer, halfway cases away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    x.round()
}

#[inline]
pub fn min(x: f64, y: f64) -> f64 {
    x.min(y)
}

#[inline]
pub fn max(x: f64, y: f64) -> f64 {
    x.max(y)
}

/// Clamps `x` to `[lo, hi]`.
///
/// The lower bound is checked first, so `lo` wins when the bounds are inverted.
#[inline]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x <= lo {
        lo
    } else if x >= hi {
        hi
    } else {
        x
    }
}

/// Linear interpolation between `x` and `y`.
///
/// `t` is not clamped, values outside `[0, 1]` extrapolate.
/// The result is exactly `x` for `t == 0` and exactly `y` for `t == 1`.
#[inline]
pub fn lerp(x: f64, y: f64, t: f64) -> f64 {
    (1.0 - t) * x + t * y
}

#[inline]
pub fn deg_to_rad(x: f64) -> f64 {
    x * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(x: f64) -> f64 {
    x * RAD_TO_DEG
}

/// Uniform random value in `[0, 1)` from the thread local generator
pub fn random() -> f64 {
    random_with(&mut rand::rng())
}

/// Alias for [`random`]
pub fn random01() -> f64 {
    random()
}

/// Uniform random value in `[-1, 1)`
pub fn random11() -> f64 {
    random11_with(&mut rand::rng())
}

/// Uniform random value in `[min, max)`
pub fn random_range(min: f64, max: f64) -> f64 {
    random_range_with(&mut rand::rng(), min, max)
}

pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

pub fn random11_with<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    random_with(rng) * 2.0 - 1.0
}

pub fn random_range_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + random_with(rng) * (max - min)
}
