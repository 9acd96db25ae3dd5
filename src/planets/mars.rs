use nalgebra::Vector3;

use super::{cosd, MeanOrbit, PlanetTheory};
use crate::bodies::Body;
use crate::constants::RADEG;
use crate::mean_elements::EvalContext;
use crate::ref_system::{mod360, SphericalCoord};

pub struct Mars;

impl PlanetTheory for Mars {
    fn body(&self) -> Body {
        Body::Mars
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        let t = ctx.t;
        let ma = &ctx.mean_anomalies;
        let (m2, m3, m5) = (ma.venus, ma.sun, ma.jupiter);

        // long period perturbation by Jupiter
        let arg = (3.0 * m5 - 8.0 * ma.mars + 4.0 * m3) * RADEG;
        let long_period = -0.01133 * arg.sin() - 0.00933 * arg.cos();
        let m4 = ma.mars + long_period;

        let orbit = MeanOrbit {
            mean_longitude: mod360(293.737334 + (19141.69551 + 0.0003107 * t) * t + long_period),
            mean_anomaly: m4,
            semi_major_axis: 1.5236883,
            eccentricity: 0.09331290 + (0.000092064 - 7.7E-08 * t) * t,
            inclination: 1.850333 + (-0.0006750 + 0.0000126 * t) * t,
            node: 48.786442 + (0.7709917 + (-1.4E-06 - 5.33E-06 * t) * t) * t,
        };
        let kepler = orbit.position();

        let r = kepler.r
            + 0.000053227 * cosd(m5 - m4 + 41.1306)
            + 0.000050989 * cosd(2.0 * m5 - 2.0 * m4 - 101.9847)
            + 0.000038278 * cosd(2.0 * m5 - m4 - 98.3292)
            + 0.000015996 * cosd(m3 - m4 - 55.555)
            + 0.000014764 * cosd(2.0 * m3 - 3.0 * m4 + 68.622)
            + 8.966E-06 * cosd(m5 - 2.0 * m4 + 43.615)
            + 7.914E-06 * cosd(3.0 * m5 - 2.0 * m4 - 139.737)
            + 7.004E-06 * cosd(2.0 * m5 - 3.0 * m4 - 102.888)
            + 6.62E-06 * cosd(m3 - 2.0 * m4 + 113.202)
            + 4.93E-06 * cosd(3.0 * m5 - 3.0 * m4 - 76.243)
            + 4.693E-06 * cosd(3.0 * m3 - 5.0 * m4 + 190.603)
            + 4.571E-06 * cosd(2.0 * m3 - 4.0 * m4 + 244.702)
            + 4.409E-06 * cosd(3.0 * m5 - m4 - 115.828);

        let lon = kepler.lon
            + 0.00705 * cosd(m5 - m4 - 48.958)
            + 0.00607 * cosd(2.0 * m5 - m4 - 188.35)
            + 0.00445 * cosd(2.0 * m5 - 2.0 * m4 - 191.897)
            + 0.00388 * cosd(m3 - 2.0 * m4 + 20.495)
            + 0.00238 * cosd(m3 - m4 + 35.097)
            + 0.00204 * cosd(2.0 * m3 - 3.0 * m4 + 158.638)
            + 0.00177 * cosd(3.0 * m4 - m2 - 57.602)
            + 0.00136 * cosd(2.0 * m3 - 4.0 * m4 + 154.093)
            + 0.00104 * cosd(m5 + 17.618);

        SphericalCoord::new(r, mod360(lon), kepler.lat)
    }
}
