use nalgebra::Vector3;

use super::{MeanOrbit, PlanetTheory};
use crate::bodies::Body;
use crate::mean_elements::{EvalContext, GasGiantTerms};
use crate::ref_system::{mod360, SphericalCoord};

pub struct Jupiter;

impl PlanetTheory for Jupiter {
    fn body(&self) -> Body {
        Body::Jupiter
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        let t = ctx.t;
        let GasGiantTerms {
            upsilon: up,
            upsilon2: up2,
            sin_q: sq,
            sin_2q: s2q,
            cos_q: cq,
            cos_2q: c2q,
            sin_v: sv,
            sin_2v: s2v,
            cos_v: cv,
            sin_w: sw,
            sin_zeta: sz,
            sin_2zeta: s2z,
            sin_3zeta: s3z,
            sin_4zeta: s4z,
            cos_zeta: cz,
            cos_2zeta: c2z,
            cos_3zeta: c3z,
            cos_4zeta: c4z,
            cos_5zeta: c5z,
            ..
        } = ctx.gaz;

        // perturbation of the mean longitude
        let aa = (0.331364 - 0.010281 * up - 0.004692 * up2) * sv
            + (0.003228 - 0.064436 * up + 0.002075 * up2) * cv
            - (0.003083 + 0.000275 * up - 0.000489 * up2) * s2v
            + 0.002472 * sw
            + 0.013619 * sz
            + 0.018472 * s2z
            + 0.006717 * s3z
            + 0.002775 * s4z
            + (0.007275 - 0.001253 * up) * sz * sq
            + 0.006417 * s2z * sq
            + 0.002439 * s3z * sq
            - (0.033839 + 0.001125 * up) * cz * sq
            - 0.003767 * c2z * sq
            - (0.035681 + 0.001208 * up) * sz * sq
            - 0.004261 * s2z * cq
            + 0.002178 * cq
            + (-0.006333 + 0.001161 * up) * cz * cq
            - 0.006675 * c2z * cq
            - 0.002664 * c3z * cq
            - 0.002572 * sz * s2q
            - 0.003567 * s2z * s2q
            + 0.002094 * cz * c2q
            + 0.003342 * c2z * c2q;

        let a = 5.202561
            + (-263.0 * cv
                + 205.0 * cz
                + 693.0 * c2z
                + 312.0 * c3z
                + 147.0 * c4z
                + 299.0 * sz * sq
                + 181.0 * c2z * sq
                + 204.0 * s2z * cq
                + 111.0 * s3z * cq
                - 337.0 * cz * cq
                - 111.0 * c2z * cq)
                * 1.0E-06;

        let ecc = 0.04833475 + (0.000164180 + (-4.676E-07 - 1.7E-09 * t) * t) * t;
        let ecc_perturbation = ((3606.0 + 130.0 * up - 43.0 * up2) * sv
            + (1289.0 - 580.0 * up) * cv
            - 6764.0 * sz * sq
            - 1110.0 * s2z * sq
            - 224.0 * s3z * sq
            - 204.0 * sq
            + (1284.0 + 116.0 * up) * cz * sq
            + 188.0 * c2z * sq
            + (1460.0 + 130.0 * up) * sz * cq
            + 224.0 * s2z * cq
            - 817.0 * cq
            + 6074.0 * cz * cq
            + 992.0 * c2z * cq
            + 508.0 * c3z * cq
            + 230.0 * c4z * cq
            + 108.0 * c5z * cq
            - (956.0 + 73.0 * up) * sz * s2q
            + 448.0 * s2z * s2q
            + 137.0 * s3z * s2q
            + (-997.0 + 108.0 * up) * cz * s2q
            + 480.0 * c2z * s2q
            + 148.0 * c3z * s2q
            + (-956.0 + 99.0 * up) * sz * c2q
            + 490.0 * s2z * c2q
            + 158.0 * s3z * c2q
            + 179.0 * c2q
            + (1024.0 + 75.0 * up) * cz * c2q
            - 437.0 * c2z * c2q
            - 132.0 * c3z * c2q)
            * 1.0E-07;

        // perturbation of the perihelion
        let bb = (0.007192 - 0.003147 * up) * sv
            + (-0.020428 - 0.000675 * up + 0.000197 * up2) * cv
            + (0.007269 + 0.000672 * up) * sz * sq
            - 0.004344 * sq
            + 0.034036 * cz * sq
            + 0.005614 * c2z * sq
            + 0.002964 * c3z * sq
            + 0.037761 * sz * cq
            + 0.006158 * s2z * cq
            - 0.006603 * cz * cq
            - 0.005356 * sz * s2q
            + 0.002722 * s2z * s2q
            + 0.004483 * cz * s2q
            - 0.002642 * c2z * s2q
            + 0.004403 * sz * c2q
            - 0.002536 * s2z * c2q
            + 0.005547 * cz * c2q
            - 0.002689 * c2z * c2q;

        let orbit = MeanOrbit {
            mean_longitude: mod360(
                238.049257 + (3036.301986 + (0.0003347 - 0.00000165 * t) * t) * t + aa,
            ),
            mean_anomaly: ctx.mean_anomalies.jupiter + aa - bb / ecc,
            semi_major_axis: a,
            eccentricity: ecc + ecc_perturbation,
            inclination: mod360(1.308736 + (-0.0056961 + 0.0000039 * t) * t),
            node: mod360(99.443414 + (1.01053 + (0.00035222 - 8.51E-06 * t) * t) * t),
        };
        let kepler = orbit.position();

        SphericalCoord::new(kepler.r, mod360(kepler.lon), kepler.lat)
    }
}
