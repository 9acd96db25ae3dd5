use nalgebra::Vector3;

use super::{cosd, sind, MeanOrbit, PlanetTheory};
use crate::bodies::Body;
use crate::mean_elements::EvalContext;
use crate::ref_system::{mod360, SphericalCoord};

pub struct Venus;

impl PlanetTheory for Venus {
    fn body(&self) -> Body {
        Body::Venus
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        let t = ctx.t;
        let ma = &ctx.mean_anomalies;
        let (m3, m5) = (ma.sun, ma.jupiter);

        // long period term, applied to both the mean longitude and the mean anomaly
        let long_period = 0.00077 * sind(237.24 + 150.27 * t);
        let m2 = ma.venus + long_period;

        let orbit = MeanOrbit {
            mean_longitude: mod360(342.767053 + (58519.21191 + 0.0003097 * t) * t + long_period),
            mean_anomaly: m2,
            semi_major_axis: 0.7233316,
            eccentricity: 0.00682069 + (-0.00004774 + 9.1E-08 * t) * t,
            inclination: 3.393631 + (0.0010058 - 1.0E-06 * t) * t,
            node: 75.779647 + (0.89985 + 0.00041 * t) * t,
        };
        let kepler = orbit.position();

        let r = kepler.r
            + 0.000022501 * cosd(2.0 * m3 - 2.0 * m2 - 58.208)
            + 0.000019045 * cosd(3.0 * m3 - 3.0 * m2 + 92.577)
            + 6.887E-06 * cosd(m5 - m2 - 118.09)
            + 5.172E-06 * cosd(m3 - m2 - 29.11)
            + 3.62E-06 * cosd(5.0 * m3 - 4.0 * m2 - 104.208)
            + 3.283E-06 * cosd(4.0 * m3 - 4.0 * m2 + 63.513)
            + 3.074E-06 * cosd(2.0 * m5 - 2.0 * m2 - 55.167);

        let lon = kepler.lon
            + 0.00313 * cosd(2.0 * m3 - 2.0 * m2 - 148.225)
            + 0.00198 * cosd(3.0 * m3 - 3.0 * m2 + 2.565)
            + 0.00136 * cosd(m3 - m2 - 119.107)
            + 0.00096 * cosd(3.0 * m3 - 2.0 * m2 - 135.912)
            + 0.00082 * cosd(m5 - m2 - 208.087);

        SphericalCoord::new(r, mod360(lon), kepler.lat)
    }
}
