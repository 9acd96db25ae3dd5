//! # Per-body calculators
//!
//! One module per body, each exposing a unit struct implementing [`PlanetTheory`].
//! [`theory`] is the dispatch table from a [`Body`] to its calculator.
//!
//! ## Shape of a calculator
//!
//! The planets from Mercury to Neptune follow the same path:
//!
//! 1. mean longitude, mean anomaly and orbital elements as polynomials of `T`,
//!    corrected by periodic terms in the other planets' mean anomalies,
//! 2. Kepler's equation and the unperturbed ecliptic position ([`MeanOrbit::position`]),
//! 3. additive periodic series on the radius, the longitude and sometimes the latitude.
//!
//! The Earth, the Moon, Pluto and the lunar node have dedicated formulas.
//!
//! The series coefficients are the published ones and are kept digit for digit.
use nalgebra::Vector3;

use crate::bodies::Body;
use crate::constants::{AstronomicalUnit, Degree, RADEG};
use crate::kepler::{solve_kepler_equation, true_anomaly};
use crate::mean_elements::EvalContext;
use crate::ref_system::{clamped_asin, mod360, RefFrame, SphericalCoord};

pub mod earth;
pub mod jupiter;
pub mod lunar_node;
pub mod mars;
pub mod mercury;
pub mod moon;
pub mod neptune;
pub mod pluto;
pub mod saturn;
pub mod uranus;
pub mod venus;

/// A position calculator for one body.
pub trait PlanetTheory: Send + Sync {
    fn body(&self) -> Body;

    /// Frame in which [`PlanetTheory::position`] is natively expressed.
    fn native_frame(&self) -> RefFrame {
        RefFrame::HeliocentricEcliptic
    }

    /// Geometric ecliptic position of the body at the epoch of `ctx`, angles in degrees.
    ///
    /// Arguments
    /// ---------
    /// * `ctx`: the evaluation context of the epoch
    /// * `earth`: heliocentric cartesian position of the Earth, in AU, used by Pluto only
    fn position(&self, ctx: &EvalContext, earth: &Vector3<f64>) -> SphericalCoord;
}

/// Dispatch table of the calculators.
pub fn theory(body: Body) -> Option<&'static dyn PlanetTheory> {
    match body {
        Body::Sun => None,
        Body::Moon => Some(&moon::Moon),
        Body::Mercury => Some(&mercury::Mercury),
        Body::Venus => Some(&venus::Venus),
        Body::Earth => Some(&earth::Earth),
        Body::Mars => Some(&mars::Mars),
        Body::Jupiter => Some(&jupiter::Jupiter),
        Body::Saturn => Some(&saturn::Saturn),
        Body::Uranus => Some(&uranus::Uranus),
        Body::Neptune => Some(&neptune::Neptune),
        Body::Pluto => Some(&pluto::Pluto),
        Body::MeanLunarNode => Some(&lunar_node::MeanLunarNode),
    }
}

#[inline]
pub(crate) fn sind(angle: Degree) -> f64 {
    (angle * RADEG).sin()
}

#[inline]
pub(crate) fn cosd(angle: Degree) -> f64 {
    (angle * RADEG).cos()
}

/// Mean orbital elements of a planet at one epoch, once the periodic corrections
/// of the mean longitude and the mean anomaly are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MeanOrbit {
    /// mean longitude `L`, degrees
    pub mean_longitude: Degree,
    /// mean anomaly `M`, degrees
    pub mean_anomaly: Degree,
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    /// inclination `i`, degrees
    pub inclination: Degree,
    /// longitude of the ascending node `Ω`, degrees
    pub node: Degree,
}

impl MeanOrbit {
    /// Keplerian position on the mean orbit.
    ///
    /// The returned longitude is not normalized: the callers add their periodic
    /// terms before reducing it.
    pub fn position(&self) -> SphericalCoord {
        let ecc_anom = solve_kepler_equation(self.eccentricity, self.mean_anomaly * RADEG);
        let nu = mod360(true_anomaly(self.eccentricity, ecc_anom) / RADEG);
        let r = self.semi_major_axis * (1.0 - self.eccentricity * ecc_anom.cos());

        // argument of latitude
        let u = mod360(self.mean_longitude + nu - self.mean_anomaly - self.node) * RADEG;
        let incl = self.inclination * RADEG;

        let lon = (incl.cos() * u.sin()).atan2(u.cos()) / RADEG + self.node;
        let lat = clamped_asin(u.sin() * incl.sin()) / RADEG;

        SphericalCoord::new(r, lon, lat)
    }
}
