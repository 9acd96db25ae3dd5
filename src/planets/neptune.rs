use nalgebra::Vector3;

use super::{MeanOrbit, PlanetTheory};
use crate::bodies::Body;
use crate::mean_elements::{EvalContext, GasGiantTerms};
use crate::ref_system::{mod360, SphericalCoord};

pub struct Neptune;

impl PlanetTheory for Neptune {
    fn body(&self) -> Body {
        Body::Neptune
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        let t = ctx.t;
        let GasGiantTerms {
            upsilon: up,
            q,
            s,
            g,
            sin_g: sg,
            cos_g: cg,
            sin_zeta: sz,
            cos_zeta: cz,
            sin_h: sh,
            sin_2h: s2h,
            cos_h: ch,
            cos_2h: c2h,
            ..
        } = ctx.gaz;

        // η = G − Q, θ = G − S
        let eta = g - q;
        let theta = g - s;

        let aa = (-0.589833 + 0.001089 * up) * sh + (-0.056094 + 0.004658 * up) * ch
            - 0.024286 * s2h;
        let bb = 0.024039 * sh - 0.025303 * ch + 0.006206 * s2h - 0.005992 * c2h;

        let ecc = 0.00899704 + (6.33E-06 - 2.0E-09 * t) * t;
        let ecc_perturbation =
            (4389.0 * sh + 4262.0 * ch + 1129.0 * s2h + 1089.0 * c2h) * 1.0E-07;

        let orbit = MeanOrbit {
            mean_longitude: mod360(
                84.457994 + (219.885914 + (0.0003205 - 6.0E-07 * t) * t) * t + aa,
            ),
            mean_anomaly: ctx.mean_anomalies.neptune + aa - bb / ecc,
            semi_major_axis: 30.10957 + (-817.0 * sh + 8189.0 * ch + 781.0 * c2h) * 1.0E-06,
            eccentricity: ecc + ecc_perturbation,
            inclination: 1.779242 + (-0.0095436 - 9.1E-06 * t) * t,
            node: 130.681389 + (1.098935 + (0.00024987 - 4.718E-06 * t) * t) * t,
        };
        let kepler = orbit.position();

        let r = kepler.r
            + (40596.0
                + 4992.0 * cz
                + 2744.0 * eta.cos()
                + 2044.0 * theta.cos()
                + 1051.0 * (2.0 * theta).cos())
                * 1.0E-06;

        let lon = kepler.lon - 0.009556 * sz - 0.005178 * eta.sin() + 0.002572 * (2.0 * theta).sin()
            - 0.002972 * (2.0 * theta).cos() * sg
            - 0.002833 * (2.0 * theta).sin() * cg;

        let lat =
            kepler.lat + 0.000336 * (2.0 * theta).cos() * sg + 0.000364 * (2.0 * theta).sin() * cg;

        SphericalCoord::new(r, mod360(lon), lat)
    }
}
