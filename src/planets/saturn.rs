use nalgebra::Vector3;

use super::{MeanOrbit, PlanetTheory};
use crate::bodies::Body;
use crate::mean_elements::{EvalContext, GasGiantTerms};
use crate::ref_system::{mod360, SphericalCoord};

pub struct Saturn;

impl PlanetTheory for Saturn {
    fn body(&self) -> Body {
        Body::Saturn
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        let t = ctx.t;
        let GasGiantTerms {
            upsilon: up,
            upsilon2: up2,
            q,
            s,
            sin_q: sq,
            sin_2q: s2q,
            sin_3q: s3q,
            sin_4q: s4q,
            cos_q: cq,
            cos_2q: c2q,
            cos_3q: c3q,
            cos_4q: c4q,
            sin_v: sv,
            sin_2v: s2v,
            cos_v: cv,
            cos_2v: c2v,
            sin_w: sw,
            sin_zeta: sz,
            sin_2zeta: s2z,
            sin_3zeta: s3z,
            sin_4zeta: s4z,
            sin_5zeta: s5z,
            cos_zeta: cz,
            cos_2zeta: c2z,
            cos_3zeta: c3z,
            cos_4zeta: c4z,
            cos_5zeta: c5z,
            ..
        } = ctx.gaz;

        // ψ = S − Q
        let psi = s - q;
        let (s2k, c2k) = (2.0 * psi).sin_cos();
        let (s3k, c3k) = (3.0 * psi).sin_cos();

        // perturbation of the mean longitude
        let aa = (-0.814181 + 0.018150 * up + 0.016714 * up2) * sv
            + (-0.010497 + 0.160906 * up - 0.004100 * up2) * cv
            + 0.007581 * s2v
            - 0.007986 * sw
            - 0.148811 * sz
            - 0.040786 * s2z
            - 0.015208 * s3z
            - 0.006339 * s4z
            - 0.006244 * sq
            + (0.008931 - 0.002728 * up) * sz * sq
            - 0.016500 * s2z * sq
            - 0.005775 * s3z * sq
            + (0.081344 + 0.003206 * up) * cz * sq
            + 0.015019 * c2z * sq
            + (0.085581 + 0.002494 * up) * sz * cq
            + (0.025328 - 0.003117 * up) * cz * cq
            + 0.014394 * c2z * cq
            + 0.006319 * c3z * cq
            + 0.006369 * sz * s2q
            + 0.009156 * s2z * s2q
            + 0.007525 * s3k * s2q
            - 0.005236 * cz * c2q
            - 0.007736 * c2z * c2q
            - 0.007528 * c3k * c2q;

        let a = 9.554747
            + (572.0 * up * sv
                + 2933.0 * cv
                + 33629.0 * cz
                - 3081.0 * c2z
                - 1423.0 * c3z
                - 671.0 * c4z
                - 320.0 * c5z
                + 1098.0 * sq
                - 2812.0 * sz * sq
                + 688.0 * s2z * sq
                - 393.0 * s3z * sq
                - 228.0 * s4z * sq
                + 2138.0 * cz * sq
                - 999.0 * c2z * sq
                - 642.0 * c3z * sq
                - 325.0 * c4z * sq
                - 890.0 * cq
                + 2206.0 * sz * cq
                - 1590.0 * s2z * cq
                - 647.0 * s3z * cq
                - 344.0 * s4z * cq
                + 2885.0 * cz * cq
                + (2172.0 + 102.0 * up) * c2z * cq
                + 296.0 * c3z * cq
                - 267.0 * s2z * s2q
                - 778.0 * cz * s2q
                + 495.0 * c2z * s2q
                + 250.0 * c3z * s2q
                - 856.0 * sz * c2q
                + 441.0 * s2z * c2q
                + 296.0 * c2z * c2q
                + 211.0 * c3z * c2q
                - 427.0 * sz * s3q
                + 398.0 * s3z * s3q
                + 344.0 * cz * c3q
                - 427.0 * c3z * c3q)
                * 1.0E-06;

        let ecc = 0.05589232 + (-0.0003455 + (-7.28E-07 + 7.4E-10 * t) * t) * t;

        let mut ecc_perturbation = (-7927.0 + 2548.0 * up + 91.0 * up2) * sv
            + (13381.0 + 1226.0 * up - 253.0 * up2) * cv
            + (248.0 - 121.0 * up) * s2v
            - (305.0 + 91.0 * up) * c2v
            + 412.0 * s2z
            + 12415.0 * sq
            + (390.0 - 617.0 * up) * sz * sq
            + (165.0 - 204.0 * up) * s2z * sq
            + 26599.0 * cz * sq
            - 4687.0 * c2z * sq
            - 1870.0 * c3z * sq
            - 821.0 * c4z * sq
            - 377.0 * c5z * sq
            + 497.0 * c2k * sq
            + (163.0 - 611.0 * up) * cq
            - 12696.0 * sz * cq
            - 4200.0 * s2z * cq
            - 1503.0 * s3z * cq
            - 619.0 * s4z * cq
            - 268.0 * s5z * cq
            - (282.0 + 1306.0 * up) * cz * cq
            + (-86.0 + 230.0 * up) * c2z * cq
            + 461.0 * s2k * cq
            - 350.0 * s2q
            + (2211.0 - 286.0 * up) * sz * cq;
        ecc_perturbation = ecc_perturbation
            - 2208.0 * s2z * s2q
            - 568.0 * s3z * s2q
            - 346.0 * s4z * s2q
            - (2780.0 + 222.0 * up) * cz * s2q
            + (2022.0 + 263.0 * up) * c2z * s2q
            + 248.0 * c3z * s2q
            + 242.0 * s3k * s2q
            + 467.0 * c3k * s2q
            - 490.0 * c2q
            - (2842.0 + 279.0 * up) * sz * c2q
            + (128.0 + 226.0 * up) * s2z * c2q
            + 224.0 * s3z * c2q
            + (-1594.0 + 282.0 * up) * cz * c2q
            + (2162.0 - 207.0 * up) * c2z * c2q
            + 561.0 * c3z * c2q
            + 343.0 * c4z * c2q
            + 469.0 * s3k * c2q
            - 242.0 * c3k * c2q
            - 205.0 * sz * s3q
            + 262.0 * s3z * s3q
            + 208.0 * cz * c3q
            - 271.0 * c3z * c3q
            - 382.0 * c3z * s4q
            - 376.0 * s3z * c4q;
        ecc_perturbation *= 1.0E-07;

        // perturbation of the perihelion
        let bb = (0.077108 + 0.007186 * up - 0.001533 * up2) * sv
            + (0.045803 - 0.014766 * up - 0.000536 * up2) * cv
            - 0.007075 * sz
            - 0.075825 * sz * sq
            - 0.024839 * s2z * sq
            - 0.008631 * s3z * sq
            - 0.072586 * cq
            - 0.150383 * cz * cq
            + 0.026897 * c2z * cq
            + 0.010053 * c3z * cq
            - (0.013597 + 0.001719 * up) * sz * s2q
            + (-0.007742 + 0.001517 * up) * cz * s2q
            + (0.013586 - 0.001375 * up) * c2z * s2q
            + (-0.013667 + 0.001239 * up) * sz * c2q
            + 0.011981 * s2z * c2q
            + (0.014861 + 0.001136 * up) * cz * c2q
            - (0.013064 + 0.001628 * up) * c2z * c2q;

        let orbit = MeanOrbit {
            mean_longitude: mod360(
                266.564377 + (1223.509884 + (0.0003245 - 5.8E-06 * t) * t) * t + aa,
            ),
            mean_anomaly: ctx.mean_anomalies.saturn + aa - bb / ecc,
            semi_major_axis: a,
            eccentricity: ecc + ecc_perturbation,
            inclination: 2.492519 + (-0.0039189 + (-0.00001549 + 4.0E-08 * t) * t) * t,
            node: 112.790414 + (0.8731951 + (-0.00015218 - 5.31E-06 * t) * t) * t,
        };
        let kepler = orbit.position();

        let lat = kepler.lat
            + 0.000747 * cz * sq
            + 0.001069 * cz * cq
            + 0.002108 * s2z * s2q
            + 0.001261 * c2z * s2q
            + 0.001236 * s2z * c2q
            - 0.002075 * c2z * c2q;

        SphericalCoord::new(kepler.r, mod360(kepler.lon), lat)
    }
}
