//! # Mean elements of the theory
//!
//! Everything the per-body formulas need that depends on time alone:
//!
//! - [`MeanAnomalies`]: the mean anomalies of the eight planets, Mercury to Neptune,
//! - [`GasGiantTerms`]: the auxiliary angles shared by Jupiter, Saturn, Uranus and Neptune,
//! - [`EvalContext`]: both of the above bundled with the epoch they were computed for.
//!
//! A context is built once per evaluation. The light-time pass builds a second one
//! at the shifted epoch instead of updating the first; none of these values is ever mutated.
use crate::constants::{Degree, JulianCentury, JulianDay, Radian, RADEG};
use crate::ref_system::mod360;
use crate::time::julian_centuries_since_1900;

/// Mean anomalies of the planets, in degrees within [0, 360).
///
/// The third one is the mean anomaly of the Sun (equivalently of the Earth).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanAnomalies {
    pub mercury: Degree,
    pub venus: Degree,
    pub sun: Degree,
    pub mars: Degree,
    pub jupiter: Degree,
    pub saturn: Degree,
    pub uranus: Degree,
    pub neptune: Degree,
}

impl MeanAnomalies {
    /// Arguments
    /// ---------
    /// * `t`: julian centuries since 1900 January 0.5
    pub fn new(t: JulianCentury) -> Self {
        MeanAnomalies {
            mercury: mod360(102.27938 + (149472.51529 + 7.0E-06 * t) * t),
            venus: mod360(212.60322 + (58517.80387 + 0.001286 * t) * t),
            sun: mod360(358.47583 + (35999.04975 - (0.000150 + 0.0000033 * t) * t) * t),
            mars: mod360(319.51913 + (19139.85475 + 0.000181 * t) * t),
            jupiter: mod360(225.32833 + (3034.69202 - 0.000722 * t) * t),
            saturn: mod360(175.46622 + (1221.55147 - 0.000502 * t) * t),
            uranus: mod360(72.648778 + (428.3791132 + 0.0000788 * t) * t),
            neptune: mod360(37.73063 + (218.4613396 - 0.00007 * t) * t),
        }
    }

    /// The eight anomalies in the order of the planets.
    pub fn as_array(&self) -> [Degree; 8] {
        [
            self.mercury,
            self.venus,
            self.sun,
            self.mars,
            self.jupiter,
            self.saturn,
            self.uranus,
            self.neptune,
        ]
    }
}

/// Auxiliary quantities of the gas giants theory.
///
/// Apart from `upsilon` and `upsilon2`, which are plain numbers,
/// the angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasGiantTerms {
    /// υ = T/5 + 0.1
    pub upsilon: f64,
    pub upsilon2: f64,

    pub p: Radian,
    pub q: Radian,
    pub sin_q: f64,
    pub sin_2q: f64,
    pub sin_3q: f64,
    pub sin_4q: f64,
    pub cos_q: f64,
    pub cos_2q: f64,
    pub cos_3q: f64,
    pub cos_4q: f64,

    pub s: Radian,

    /// V = 5Q − 2P
    pub v: Radian,
    pub sin_v: f64,
    pub sin_2v: f64,
    pub cos_v: f64,
    pub cos_2v: f64,

    /// W = 2P − 6Q + 3S
    pub w: Radian,
    pub sin_w: f64,

    /// ζ = Q − P
    pub zeta: Radian,
    pub sin_zeta: f64,
    pub sin_2zeta: f64,
    pub sin_3zeta: f64,
    pub sin_4zeta: f64,
    pub sin_5zeta: f64,
    pub cos_zeta: f64,
    pub cos_2zeta: f64,
    pub cos_3zeta: f64,
    pub cos_4zeta: f64,
    pub cos_5zeta: f64,

    pub g: Radian,
    pub cos_g: f64,
    pub sin_g: f64,

    /// H = 2G − S
    pub h: Radian,
    pub sin_h: f64,
    pub sin_2h: f64,
    pub cos_h: f64,
    pub cos_2h: f64,
}

impl GasGiantTerms {
    pub fn new(t: JulianCentury) -> Self {
        let upsilon = t / 5.0 + 0.1;
        let p = (237.47555 + 3034.9061 * t) * RADEG;
        let q = (265.91650 + 1222.1139 * t) * RADEG;
        let s = (243.51721 + 428.4677 * t) * RADEG;
        let v = 5.0 * q - 2.0 * p;
        let w = 2.0 * p - 6.0 * q + 3.0 * s;
        let zeta = q - p;
        let g = (83.76922 + 218.4901 * t) * RADEG;
        let h = 2.0 * g - s;

        GasGiantTerms {
            upsilon,
            upsilon2: upsilon * upsilon,
            p,
            q,
            sin_q: q.sin(),
            sin_2q: (2.0 * q).sin(),
            sin_3q: (3.0 * q).sin(),
            sin_4q: (4.0 * q).sin(),
            cos_q: q.cos(),
            cos_2q: (2.0 * q).cos(),
            cos_3q: (3.0 * q).cos(),
            cos_4q: (4.0 * q).cos(),
            s,
            v,
            sin_v: v.sin(),
            sin_2v: (2.0 * v).sin(),
            cos_v: v.cos(),
            cos_2v: (2.0 * v).cos(),
            w,
            sin_w: w.sin(),
            zeta,
            sin_zeta: zeta.sin(),
            sin_2zeta: (2.0 * zeta).sin(),
            sin_3zeta: (3.0 * zeta).sin(),
            sin_4zeta: (4.0 * zeta).sin(),
            sin_5zeta: (5.0 * zeta).sin(),
            cos_zeta: zeta.cos(),
            cos_2zeta: (2.0 * zeta).cos(),
            cos_3zeta: (3.0 * zeta).cos(),
            cos_4zeta: (4.0 * zeta).cos(),
            cos_5zeta: (5.0 * zeta).cos(),
            g,
            cos_g: g.cos(),
            sin_g: g.sin(),
            h,
            sin_h: h.sin(),
            sin_2h: (2.0 * h).sin(),
            cos_h: h.cos(),
            cos_2h: (2.0 * h).cos(),
        }
    }
}

/// Time-dependent inputs of every per-body formula, for one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalContext {
    pub jd: JulianDay,
    /// julian centuries since 1900 January 0.5
    pub t: JulianCentury,
    pub t2: f64,
    pub t3: f64,
    pub mean_anomalies: MeanAnomalies,
    pub gaz: GasGiantTerms,
}

impl EvalContext {
    pub fn new(jd: JulianDay) -> Self {
        let t = julian_centuries_since_1900(jd);
        let t2 = t * t;
        EvalContext {
            jd,
            t,
            t2,
            t3: t2 * t,
            mean_anomalies: MeanAnomalies::new(t),
            gaz: GasGiantTerms::new(t),
        }
    }

    /// Context of the same computation, `delay` days earlier.
    pub fn delayed(&self, delay: f64) -> Self {
        EvalContext::new(self.jd - delay)
    }
}

#[cfg(test)]
mod mean_elements_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_anomalies_j1900() {
        let ma = MeanAnomalies::new(0.0);
        assert_eq!(
            ma.as_array(),
            [102.27938, 212.60322, 358.47583, 319.51913, 225.32833, 175.46622, 72.648778, 37.73063]
        );
    }

    #[test]
    fn test_mean_anomalies_2000() {
        // 2000-01-01 00:00:00
        let ma = EvalContext::new(2451544.5).mean_anomalies;

        assert_abs_diff_eq!(ma.sun, 357.0326, epsilon = 1e-3);
        assert_abs_diff_eq!(ma.mercury, 172.7485, epsilon = 1e-3);
        for m in ma.as_array() {
            assert!((0.0..360.0).contains(&m));
        }
    }

    #[test]
    fn test_gas_giant_terms() {
        let gaz = GasGiantTerms::new(1.0);

        assert_abs_diff_eq!(gaz.upsilon, 0.3, epsilon = 1e-15);
        assert_abs_diff_eq!(gaz.upsilon2, 0.09, epsilon = 1e-15);
        assert_abs_diff_eq!(gaz.v, 5.0 * gaz.q - 2.0 * gaz.p, epsilon = 1e-12);
        assert_abs_diff_eq!(gaz.w, 2.0 * gaz.p - 6.0 * gaz.q + 3.0 * gaz.s, epsilon = 1e-12);
        assert_abs_diff_eq!(gaz.zeta, gaz.q - gaz.p, epsilon = 1e-12);
        assert_abs_diff_eq!(gaz.h, 2.0 * gaz.g - gaz.s, epsilon = 1e-12);

        // harmonics stay consistent with their fundamental
        assert_abs_diff_eq!(gaz.sin_2zeta, 2.0 * gaz.sin_zeta * gaz.cos_zeta, epsilon = 1e-12);
        assert_abs_diff_eq!(gaz.cos_2q, 2.0 * gaz.cos_q.powi(2) - 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(gaz.sin_h.powi(2) + gaz.cos_h.powi(2), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_eval_context_powers() {
        let ctx = EvalContext::new(2451545.0);
        assert_eq!(ctx.t, 36525.0 / 36525.0);
        assert_eq!(ctx.t2, ctx.t * ctx.t);
        assert_eq!(ctx.t3, ctx.t2 * ctx.t);

        let shifted = ctx.delayed(36525.0);
        assert_abs_diff_eq!(shifted.t, 0.0, epsilon = 1e-15);
        assert_eq!(shifted.t2, shifted.t * shifted.t);
        assert_eq!(shifted.mean_anomalies, MeanAnomalies::new(shifted.t));
    }
}
