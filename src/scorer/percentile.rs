use crate::config::DistributionParams;
use std::f64::consts::{PI, SQRT_2};

// Abramowitz & Stegun 7.1.26
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

pub const MIN_PERCENTILE: u8 = 1;
pub const MAX_PERCENTILE: u8 = 99;

#[inline(always)]
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;

    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard normal CDF.
#[inline(always)]
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Normal density at `x`, used for the population curve.
#[inline(always)]
pub fn normal_pdf(x: f64, params: &DistributionParams) -> f64 {
    let z = (x - params.mean) / params.std_dev;
    (-0.5 * z * z).exp() / (params.std_dev * (2.0 * PI).sqrt())
}

/// Never reports 0 or 100; both would read as absolute.
pub fn percentile(score: f64, params: &DistributionParams) -> u8 {
    let z = (score - params.mean) / params.std_dev;
    let raw = (100.0 * normal_cdf(z)).round();
    raw.clamp(MIN_PERCENTILE as f64, MAX_PERCENTILE as f64) as u8
}

/// `points + 1` evenly spaced samples of the density over [0, 100].
pub fn population_curve(params: &DistributionParams, points: usize) -> Vec<(f64, f64)> {
    if points == 0 {
        return vec![(0.0, normal_pdf(0.0, params))];
    }
    (0..=points)
        .map(|i| {
            let x = i as f64 / points as f64 * 100.0;
            (x, normal_pdf(x, params))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erf_is_odd_and_bounded() {
        for &x in &[0.1, 0.5, 1.0, 2.0, 4.0] {
            assert!((erf(x) + erf(-x)).abs() < 1e-12);
            assert!(erf(x) <= 1.0);
        }
    }

    #[test]
    fn erf_matches_known_values() {
        assert!((erf(0.5) - 0.520_499_877_8).abs() < 1e-6);
        assert!((erf(1.0) - 0.842_700_792_9).abs() < 1e-6);
        assert!((erf(2.0) - 0.995_322_265_0).abs() < 1e-6);
    }

    #[test]
    fn cdf_is_half_at_zero() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn percentile_is_clamped() {
        let params = DistributionParams::default();
        assert_eq!(percentile(-1000.0, &params), MIN_PERCENTILE);
        assert_eq!(percentile(1000.0, &params), MAX_PERCENTILE);
    }

    #[test]
    fn zero_point_curve_has_one_sample() {
        let curve = population_curve(&DistributionParams::default(), 0);
        assert_eq!(curve.len(), 1);
    }
}
