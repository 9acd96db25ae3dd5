use nalgebra::Vector3;

use super::{cosd, MeanOrbit, PlanetTheory};
use crate::bodies::Body;
use crate::mean_elements::EvalContext;
use crate::ref_system::{mod360, SphericalCoord};

pub struct Mercury;

impl PlanetTheory for Mercury {
    fn body(&self) -> Body {
        Body::Mercury
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        let t = ctx.t;
        let ma = &ctx.mean_anomalies;
        let (m1, m2, m5) = (ma.mercury, ma.venus, ma.jupiter);

        let orbit = MeanOrbit {
            mean_longitude: mod360(178.179078 + (149474.07078 + 0.0003011 * t) * t),
            mean_anomaly: m1,
            semi_major_axis: 0.3870986,
            eccentricity: 0.20561421 + (0.00002046 - 3.0E-08 * t) * t,
            inclination: mod360(7.002881 + (0.0018608 - 0.0000183 * t) * t),
            node: mod360(47.145944 + (1.1852083 + 0.0001739 * t) * t),
        };
        let kepler = orbit.position();

        let r = kepler.r
            + 7.525E-06 * cosd(2.0 * m5 - m1 + 53.013)
            + 6.802E-06 * cosd(5.0 * m2 - 3.0 * m1 - 259.918)
            + 5.457E-06 * cosd(2.0 * m2 - 2.0 * m1 - 71.188)
            + 3.569E-06 * cosd(5.0 * m2 - m1 - 77.75);

        let lon = kepler.lon
            + 0.00204 * cosd(5.0 * m2 - 2.0 * m1 + 12.220)
            + 0.00103 * cosd(2.0 * m2 - m1 - 160.692)
            + 0.00091 * cosd(2.0 * m5 - m1 - 37.003)
            + 0.00078 * cosd(5.0 * m2 - 3.0 * m1 + 10.137);

        SphericalCoord::new(r, mod360(lon), kepler.lat)
    }
}
