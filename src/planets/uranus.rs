use nalgebra::Vector3;

use super::{MeanOrbit, PlanetTheory};
use crate::bodies::Body;
use crate::mean_elements::{EvalContext, GasGiantTerms};
use crate::ref_system::{mod360, SphericalCoord};

pub struct Uranus;

impl PlanetTheory for Uranus {
    fn body(&self) -> Body {
        Body::Uranus
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        let t = ctx.t;
        let GasGiantTerms {
            upsilon: up,
            upsilon2: up2,
            q,
            s,
            g,
            sin_w: sw,
            sin_zeta: sz,
            cos_zeta: cz,
            sin_h: sh,
            sin_2h: s2h,
            cos_h: ch,
            cos_2h: c2h,
            ..
        } = ctx.gaz;

        // η = S − Q, θ = G − S
        let eta = s - q;
        let theta = g - s;

        let aa = (0.864319 - 0.001583 * up) * sh + (0.082222 - 0.006833 * up) * ch + 0.036017 * s2h
            - 0.003019 * c2h
            + 0.008122 * sw;
        let bb = 0.120303 * sh + (0.019472 - 0.000947 * up) * ch + 0.006197 * s2h;

        let ecc = 0.0463444 + (-0.00002658 + 7.7E-08 * t) * t;
        let ecc_perturbation = ((-3349.0 + 163.0 * up) * sh + 20981.0 * ch + 1311.0 * c2h) * 1.0E-07;

        let orbit = MeanOrbit {
            mean_longitude: mod360(
                244.19747 + (429.863546 + (0.0003160 - 6.0E-07 * t) * t) * t + aa,
            ),
            mean_anomaly: ctx.mean_anomalies.uranus + aa - bb / ecc,
            semi_major_axis: 19.21814 - 0.003825 * ch,
            eccentricity: ecc + ecc_perturbation,
            inclination: 0.772464 + (0.0006253 + 0.0000395 * t) * t,
            node: 73.477111 + (0.4986678 + 0.0013117 * t) * t,
        };
        let kepler = orbit.position();

        let r = kepler.r
            + (-25948.0
                + (5795.0 * s.cos() - 1165.0 * s.sin() + 1388.0 * (2.0 * s).cos()) * eta.sin()
                + 4985.0 * cz
                + (1351.0 * s.cos() + 5702.0 * s.sin() + 1388.0 * (2.0 * s).sin()) * eta.cos()
                - 1230.0 * s.cos()
                + 904.0 * (2.0 * theta).cos()
                + 3354.0 * eta.cos()
                + 894.0 * (theta.cos() - (3.0 * theta).cos()))
                * 1.0E-06;

        let lon = kepler.lon
            + (0.010122 - 0.000988 * up) * (s + eta).sin()
            + (-0.038581 + 0.002031 * up - 0.001910 * up2) * (s + eta).cos()
            + (0.034964 - 0.001038 * up + 0.000868 * up2) * (2.0 * s + eta).cos()
            + 0.005594 * (s + 3.0 * theta).sin()
            - 0.014808 * sz
            - 0.005794 * eta.sin()
            + 0.002347 * eta.cos()
            + 0.009872 * theta.sin()
            + 0.008803 * (2.0 * theta).sin()
            - 0.004308 * (3.0 * theta).sin();

        let lat = kepler.lat
            + (0.000458 * eta.sin() - 0.000642 * eta.cos() - 0.000517 * (4.0 * theta).cos())
                * s.sin()
            - (0.000347 * eta.sin() + 0.000853 * eta.cos() + 0.000517 * (4.0 * eta).cos())
                * s.cos()
            + 0.000403
                * ((2.0 * theta).cos() * (2.0 * s).sin() + (2.0 * theta).sin() * (2.0 * s).cos());

        SphericalCoord::new(r, mod360(lon), lat)
    }
}

#[cfg(test)]
mod uranus_test {
    use super::*;
    use crate::planets::planets_test::ctx_2000;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_uranus_2000() {
        let pos = Uranus.position(&ctx_2000(), &Vector3::zeros());

        assert_abs_diff_eq!(pos.r, 19.92854657, epsilon = 1e-8);
        assert_abs_diff_eq!(pos.lon, 316.3937136, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.lat, -0.6851588, epsilon = 1e-6);
    }
}
