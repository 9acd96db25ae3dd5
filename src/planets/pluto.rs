use nalgebra::Vector3;

use super::PlanetTheory;
use crate::bodies::Body;
use crate::constants::RADEG;
use crate::kepler::{solve_kepler_equation, true_anomaly};
use crate::mean_elements::EvalContext;
use crate::ref_system::{mod360, SphericalCoord};

/// Fixed elliptic orbit of Pluto, without periodic terms.
///
/// Angles of the model are in radians.
/// The position is shifted by the opposite of the Earth heliocentric position
/// in the ecliptic plane, and the returned distance is the one projected on that plane.
/// Accuracy is of the order of 1°.
pub struct Pluto;

// elements and their daily rates
const L0: f64 = 1.6406;
const L_RATE: f64 = 701214E-10;
const P0: f64 = 3.8978;
const P_RATE: f64 = 6.672E-7;
const O0: f64 = 1.9034;
const O_RATE: f64 = 66.72E-08;
const ECC: f64 = 0.250236;
const INCL: f64 = 0.29968;
const SEMI_MAJOR_AXIS: f64 = 39.438712;

impl PlanetTheory for Pluto {
    fn body(&self) -> Body {
        Body::Pluto
    }

    fn position(&self, ctx: &EvalContext, earth: &Vector3<f64>) -> SphericalCoord {
        // days since 1900 December 31.0
        let days = 36525.0 * ctx.t - 364.5;

        let perihelion = P0 + P_RATE * days;
        let mean_lon = L0 + L_RATE * days;
        let node = O0 + O_RATE * days;

        let ecc_anom = solve_kepler_equation(ECC, mean_lon - perihelion);
        let nu = true_anomaly(ECC, ecc_anom);

        // argument of latitude, projected on the ecliptic
        let u = nu + perihelion - node;
        let u_ecl = if u.cos() == 0.0 {
            u
        } else {
            (u.sin() * INCL.cos()).atan2(u.cos())
        };

        let lon = u_ecl + node;
        let lat = (u_ecl.sin() * INCL.sin()).atan2(INCL.cos());
        let radius = SEMI_MAJOR_AXIS * (1.0 - ECC * ecc_anom.cos());

        let x = radius * lat.cos() * lon.cos() - earth.x;
        let y = radius * lat.cos() * lon.sin() - earth.y;
        let z = radius * lat.sin();

        let r = x.hypot(y);
        SphericalCoord::new(r, mod360(y.atan2(x) / RADEG), z.atan2(r) / RADEG)
    }
}

#[cfg(test)]
mod pluto_test {
    use super::*;
    use crate::planets::planets_test::{ctx_2000, earth_2000};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pluto_2000() {
        let pos = Pluto.position(&ctx_2000(), &earth_2000());

        assert_abs_diff_eq!(pos.r, 30.41866392, epsilon = 1e-8);
        assert_abs_diff_eq!(pos.lon, 251.6782363, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.lat, 10.8472259, epsilon = 1e-6);
    }

    #[test]
    fn test_pluto_depends_on_earth() {
        let ctx = ctx_2000();
        let from_sun = Pluto.position(&ctx, &Vector3::zeros());
        let from_earth = Pluto.position(&ctx, &earth_2000());

        assert!((from_sun.lon - from_earth.lon).abs() > 0.5);
        assert_ne!(from_sun.r, from_earth.r);
    }
}
