//! Standard normal distribution functions.
//!
//! The CDF is computed through `statrs`'s complementary error function, which
//! is accurate to machine precision. Approximation-grade alternatives (e.g.
//! Abramowitz & Stegun 7.1.26, max error 1.5e-7) are not good enough here:
//! the Gamma calculator divides a second difference by h^2, so with h = 1e-3
//! a 1e-7 price error would swamp the result.

use statrs::function::erf::erfc;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as `0.5 * erfc(-x / sqrt(2))`.
///
/// # Examples
/// ```
/// use vanilla_models::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
///
/// Computes phi(x) = exp(-x^2 / 2) / sqrt(2 * pi).
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
