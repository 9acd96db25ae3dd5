use nalgebra::Vector3;

use super::PlanetTheory;
use crate::bodies::Body;
use crate::constants::RADEG;
use crate::mean_elements::EvalContext;
use crate::ref_system::{mod360, SphericalCoord};

/// Heliocentric position of the Earth, from the solar mean longitude and the
/// equation of the centre.
///
/// The latitude is 0 by construction.
pub struct Earth;

impl PlanetTheory for Earth {
    fn body(&self) -> Body {
        Body::Earth
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        let t = ctx.t;
        let m3 = ctx.mean_anomalies.sun * RADEG;

        let mean_lon = mod360(279.6966778 + (36000.768925 + 0.0003025 * t) * t);
        let ecc = 0.01675104 - (0.0000418 + 0.000000126 * t) * t;

        let center = (1.919460 + (-0.004789 - 0.000014 * t) * t) * m3.sin()
            + (0.020094 - 0.000100 * t) * (2.0 * m3).sin()
            + 0.000293 * (3.0 * m3).sin();

        let mut lon_sun = mean_lon + center;
        let mut r_sun = 1.0000002 * (1.0 - ecc * ecc) / (1.0 + ecc * (m3 + center * RADEG).cos());

        // perturbations by Venus, Jupiter and the Moon
        let a = (153.23 + 22518.7541 * t) * RADEG;
        let b = (216.57 + 45037.5082 * t) * RADEG;
        let c = (312.69 + 32964.3577 * t) * RADEG;
        let d = (350.74 + (445267.1142 - 0.00144 * t) * t) * RADEG;
        let e = (231.19 + 20.2 * t) * RADEG;
        let h = (353.40 + 65928.7155 * t) * RADEG;

        r_sun = r_sun
            + 0.00000543 * a.sin()
            + 0.00001575 * b.sin()
            + 0.00001627 * c.sin()
            + 0.00003076 * d.cos()
            + 0.00000927 * h.sin();

        lon_sun = lon_sun
            + 0.00134 * a.cos()
            + 0.00154 * b.cos()
            + 0.00200 * c.cos()
            + 0.00179 * d.sin()
            + 0.00178 * e.sin();

        SphericalCoord::new(r_sun, mod360(lon_sun - 180.0), 0.0)
    }
}

#[cfg(test)]
mod earth_test {
    use super::*;
    use crate::planets::planets_test::ctx_2000;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_earth_2000() {
        let pos = Earth.position(&ctx_2000(), &Vector3::zeros());

        assert_abs_diff_eq!(pos.r, 0.98332234, epsilon = 1e-8);
        assert_abs_diff_eq!(pos.lon, 99.867555, epsilon = 1e-6);
        assert_eq!(pos.lat, 0.0);
    }

    #[test]
    fn test_earth_orbit_bounds() {
        // five years of perihelion and aphelion passages
        for year in 0..50 {
            let ctx = EvalContext::new(2451544.5 + 36.525 * year as f64);
            let pos = Earth.position(&ctx, &Vector3::zeros());
            assert!(pos.r > 0.9832 && pos.r < 1.0168, "r = {}", pos.r);
            assert!((0.0..360.0).contains(&pos.lon));
        }
    }
}
