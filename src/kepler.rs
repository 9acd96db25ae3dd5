use log::trace;

use crate::constants::Radian;

/// Starting convergence threshold of the fixed-point iteration, in radians.
const KEPLER_PRECISION: f64 = 1e-13;

/// Number of iterations after which the threshold is relaxed.
const KEPLER_MAX_ITER: usize = 25;

/// Solve Kepler's equation `E − e·sin(E) = M` by fixed-point iteration.
///
/// The sequence `u ← M + e·sin(u)` starts from `u = M`. It stops as soon as two
/// consecutive iterates differ by at most the current precision. Whenever
/// [`KEPLER_MAX_ITER`] iterations go by without reaching it, the precision is doubled
/// and the counter restarted, so the loop always terminates and never fails.
///
/// Arguments
/// ---------
/// * `eccentricity`: orbital eccentricity, `0 ≤ e < 1`
/// * `mean_anomaly`: mean anomaly `M`, in radians
///
/// Return
/// ------
/// * the eccentric anomaly `E`, in radians
pub fn solve_kepler_equation(eccentricity: f64, mean_anomaly: Radian) -> Radian {
    let mut precision = KEPLER_PRECISION;
    let mut count = 0;
    let mut previous = 0.0;
    let mut ecc_anom = mean_anomaly;

    while (ecc_anom - previous).abs() > precision {
        previous = ecc_anom;
        ecc_anom = mean_anomaly + eccentricity * ecc_anom.sin();
        count += 1;
        if count > KEPLER_MAX_ITER {
            precision *= 2.0;
            count = 0;
            trace!(
                "Kepler solver relaxed to {precision:e} (e = {eccentricity}, M = {mean_anomaly})"
            );
        }
    }

    ecc_anom
}

/// True anomaly from the eccentric anomaly, `ν = 2·atan(√((1+e)/(1−e))·tan(E/2))`.
///
/// The result lies in (−π, π].
pub fn true_anomaly(eccentricity: f64, ecc_anom: Radian) -> Radian {
    2.0 * (((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt() * (ecc_anom / 2.0).tan()).atan()
}

#[cfg(test)]
mod kepler_test {

    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_circular_orbit() {
        for m in [0.0, 0.3, 1.0, 3.0, 6.2] {
            assert_eq!(solve_kepler_equation(0.0, m), m);
        }
    }

    #[test]
    fn test_kepler_residual() {
        for e in [0.00682069, 0.0933129, 0.20561421, 0.250236, 0.6, 0.9] {
            for i in 0..36 {
                let m = i as f64 * 10.0_f64.to_radians();
                let ecc_anom = solve_kepler_equation(e, m);
                let residual = ecc_anom - e * ecc_anom.sin() - m;
                assert!(residual.abs() < 1e-10, "e = {e}, M = {m}, residual = {residual}");
            }
        }
    }

    #[test]
    fn test_kepler_near_aphelion() {
        let ecc_anom = solve_kepler_equation(0.20563258397881889, 3.0925093042497283);
        assert_abs_diff_eq!(
            ecc_anom - 0.20563258397881889 * ecc_anom.sin(),
            3.0925093042497283,
            epsilon = 1e-12
        );
        assert!(ecc_anom > 3.0925093042497283 && ecc_anom < std::f64::consts::PI);
    }

    #[test]
    fn test_true_anomaly() {
        assert_eq!(true_anomaly(0.0, 1.2), 1.2);
        assert_abs_diff_eq!(true_anomaly(0.5, 0.0), 0.0);

        // ν = 2·atan(√3·tan(π/4)) = 2π/3 for e = 0.5, E = π/2
        assert_abs_diff_eq!(
            true_anomaly(0.5, std::f64::consts::FRAC_PI_2),
            2.0 * std::f64::consts::FRAC_PI_3,
            epsilon = 1e-12
        );

        // the true anomaly runs ahead of the eccentric one on the way out
        let e = 0.2;
        for ecc_anom in [0.1, 0.8, 2.0, 3.0] {
            assert!(true_anomaly(e, ecc_anom) > ecc_anom);
        }
    }
}
