//! # Light-time corrected positions
//!
//! [`Ephemeris`] sequences the per-body calculators for one epoch and one set of bodies:
//!
//! 1. the geometric heliocentric position of the Earth, always first,
//! 2. in the heliocentric frame, the geometric positions of the requested bodies,
//! 3. in the geocentric frame, the apparent positions:
//!    - the Sun is the reflection of the Earth evaluated one Sun-Earth light time earlier,
//!    - each planet is evaluated a second time, one planet-Earth light time earlier, then
//!      moved to the Earth by subtracting the geometric Earth position,
//!    - the Moon and the lunar node come out of their calculator already geocentric.
//!
//! The light-time correction is a single pass. Every shifted evaluation gets its own
//! [`EvalContext`].
//!
//! Precession and nutation are not applied, positions refer to the mean ecliptic of date.
use std::collections::BTreeMap;

use log::{debug, trace};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::bodies::{Body, COMPUTABLE_BODIES};
use crate::constants::{AstronomicalUnit, Degree, JulianDay, KM_PER_AU, LIGHT_VELOCITY, SECONDS_PER_DAY};
use crate::ephem::EphemParams;
use crate::mean_elements::EvalContext;
use crate::planets::{earth::Earth, PlanetTheory};
use crate::ref_system::{
    cart_to_sphere, mod360, round3, CoordForm, Position, RefFrame, SphericalCoord,
};

/// Light travel time over `distance`, in days.
///
/// The distance is converted to km while the speed of light stays in m/s, the delays
/// are a thousandth of the physical ones.
pub fn light_time(distance: AstronomicalUnit) -> f64 {
    distance * KM_PER_AU / LIGHT_VELOCITY / SECONDS_PER_DAY
}

/// Geocentric Sun, the reflection of an heliocentric Earth.
fn sun_from_earth(earth: &SphericalCoord) -> SphericalCoord {
    SphericalCoord::new(earth.r, mod360(earth.lon - 180.0), -earth.lat)
}

/// Coordinates of an [`EphemerisResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coordinates {
    /// Ecliptic longitudes in degrees, rounded to 3 decimals
    Longitudes(BTreeMap<Body, Degree>),
    Positions(BTreeMap<Body, Position>),
}

/// Outcome of one ephemeris computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EphemerisResult {
    pub jd: JulianDay,
    pub frame: RefFrame,
    pub coordinates: Coordinates,
    /// Requested bodies that have no position in `frame`
    pub skipped: Vec<Body>,
}

impl EphemerisResult {
    /// Ecliptic longitude of `body` in degrees, if it was computed.
    pub fn longitude(&self, body: Body) -> Option<Degree> {
        match &self.coordinates {
            Coordinates::Longitudes(lons) => lons.get(&body).copied(),
            Coordinates::Positions(pos) => pos.get(&body).map(Position::longitude),
        }
    }

    /// Full position of `body`, `None` when only the longitudes were requested.
    pub fn position(&self, body: Body) -> Option<Position> {
        match &self.coordinates {
            Coordinates::Longitudes(_) => None,
            Coordinates::Positions(pos) => pos.get(&body).copied(),
        }
    }

    /// Longitudes of all the computed bodies.
    pub fn longitudes(&self) -> BTreeMap<Body, Degree> {
        match &self.coordinates {
            Coordinates::Longitudes(lons) => lons.clone(),
            Coordinates::Positions(pos) => pos.iter().map(|(b, p)| (*b, p.longitude())).collect(),
        }
    }

    /// Computed bodies, in the order of [`Body`].
    pub fn bodies(&self) -> Vec<Body> {
        match &self.coordinates {
            Coordinates::Longitudes(lons) => lons.keys().copied().collect(),
            Coordinates::Positions(pos) => pos.keys().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.coordinates {
            Coordinates::Longitudes(lons) => lons.len(),
            Coordinates::Positions(pos) => pos.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Request of positions for a set of bodies at one epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct Ephemeris {
    jd: JulianDay,
    bodies: Vec<Body>,
}

impl Ephemeris {
    /// Arguments
    /// ---------
    /// * `jd`: julian day of the epoch, UTC
    /// * `bodies`: the requested bodies, an empty slice requests every body available in the
    ///   frame given to [`Ephemeris::compute`]
    pub fn new(jd: JulianDay, bodies: &[Body]) -> Self {
        Ephemeris {
            jd,
            bodies: bodies.to_vec(),
        }
    }

    pub fn jd(&self) -> JulianDay {
        self.jd
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Split the request into the bodies available in `frame` and the others,
    /// both sorted and without duplicates.
    fn resolve_bodies(&self, frame: RefFrame) -> (Vec<Body>, Vec<Body>) {
        let mut requested = if self.bodies.is_empty() {
            COMPUTABLE_BODIES.to_vec()
        } else {
            self.bodies.clone()
        };
        requested.sort();
        requested.dedup();

        let (available, skipped): (Vec<Body>, Vec<Body>) = requested
            .into_iter()
            .partition(|body| body.is_available_in(frame));

        if !self.bodies.is_empty() {
            for body in &skipped {
                debug!("{body} has no position in the {frame} frame, skipped");
            }
            (available, skipped)
        } else {
            (available, Vec::new())
        }
    }

    /// Compute the positions of the requested bodies.
    ///
    /// Arguments
    /// ---------
    /// * `params`: frame, coordinate form and longitude-only flag
    ///
    /// Return
    /// ------
    /// * the positions, or the longitudes when `params.only_longitude` is set, along with
    ///   the requested bodies that are not available in `params.frame`
    pub fn compute(&self, params: &EphemParams) -> EphemerisResult {
        let (bodies, skipped) = self.resolve_bodies(params.frame);

        let ctx = EvalContext::new(self.jd);
        let earth_geom = Earth.position(&ctx, &Vector3::zeros());
        let earth_cart = earth_geom.to_cartesian();

        let positions = match params.frame {
            RefFrame::HeliocentricEcliptic => {
                self.heliocentric(&ctx, &bodies, &earth_geom, &earth_cart, params.form)
            }
            RefFrame::GeocentricEcliptic => {
                self.geocentric(&ctx, &bodies, &earth_geom, &earth_cart, params.form)
            }
        };

        let coordinates = if params.only_longitude {
            Coordinates::Longitudes(
                positions
                    .into_iter()
                    .map(|(body, pos)| (body, mod360(round3(pos.longitude()))))
                    .collect(),
            )
        } else {
            Coordinates::Positions(positions)
        };

        EphemerisResult {
            jd: self.jd,
            frame: params.frame,
            coordinates,
            skipped,
        }
    }

    fn heliocentric(
        &self,
        ctx: &EvalContext,
        bodies: &[Body],
        earth_geom: &SphericalCoord,
        earth_cart: &Vector3<f64>,
        form: CoordForm,
    ) -> BTreeMap<Body, Position> {
        let mut positions = BTreeMap::new();
        for &body in bodies {
            let Some(theory) = body.theory() else {
                continue;
            };
            let pos = if body == Body::Earth {
                *earth_geom
            } else {
                theory.position(ctx, earth_cart)
            };
            positions.insert(body, express(pos, form));
        }
        positions
    }

    fn geocentric(
        &self,
        ctx: &EvalContext,
        bodies: &[Body],
        earth_geom: &SphericalCoord,
        earth_cart: &Vector3<f64>,
        form: CoordForm,
    ) -> BTreeMap<Body, Position> {
        let sun_delay = light_time(earth_geom.r);
        debug!("Sun-Earth light time at JD {}: {sun_delay:e} d", self.jd);
        let earth_app = Earth.position(&ctx.delayed(sun_delay), &Vector3::zeros());

        let mut positions = BTreeMap::new();
        for &body in bodies {
            let pos = match body.theory() {
                None => express(sun_from_earth(&earth_app), form),
                Some(theory) if theory.native_frame() == RefFrame::GeocentricEcliptic => {
                    // no distance to express a cartesian position with
                    Position::Spherical(rounded(theory.position(ctx, earth_cart)))
                }
                Some(theory) => {
                    let cart = apparent_geocentric(theory, ctx, earth_cart);
                    match form {
                        CoordForm::Spherical => Position::Spherical(rounded(cart_to_sphere(&cart))),
                        CoordForm::Cartesian => Position::Cartesian(cart),
                    }
                }
            };
            positions.insert(body, pos);
        }
        positions
    }
}

/// Geocentric cartesian position of a planet, corrected for the light time.
///
/// The planet is evaluated a second time at its own shifted epoch. The Earth stays at its
/// geometric position `earth`.
fn apparent_geocentric(
    theory: &dyn PlanetTheory,
    ctx: &EvalContext,
    earth: &Vector3<f64>,
) -> Vector3<f64> {
    let geometric = theory.position(ctx, earth).to_cartesian();
    let delay = light_time((geometric - earth).norm());
    trace!("{} light time: {delay:e} d", theory.body());

    let apparent = theory.position(&ctx.delayed(delay), earth).to_cartesian();
    apparent - earth
}

fn rounded(coord: SphericalCoord) -> SphericalCoord {
    SphericalCoord {
        lon: mod360(round3(coord.lon)),
        ..coord
    }
}

fn express(coord: SphericalCoord, form: CoordForm) -> Position {
    match form {
        CoordForm::Spherical => Position::Spherical(rounded(coord)),
        CoordForm::Cartesian => Position::Cartesian(coord.to_cartesian()),
    }
}
