use nalgebra::Vector3;

use super::PlanetTheory;
use crate::bodies::Body;
use crate::mean_elements::EvalContext;
use crate::ref_system::{mod360, RefFrame, SphericalCoord};

/// Geocentric longitude of the mean ascending node of the lunar orbit.
pub struct MeanLunarNode;

impl PlanetTheory for MeanLunarNode {
    fn body(&self) -> Body {
        Body::MeanLunarNode
    }

    fn native_frame(&self) -> RefFrame {
        RefFrame::GeocentricEcliptic
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        SphericalCoord::from_longitude(mod360(
            259.183275 - 1934.142 * ctx.t + 0.002078 * ctx.t2 - 0.0000022 * ctx.t3,
        ))
    }
}
