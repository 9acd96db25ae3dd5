//! # Ephemeris façade
//!
//! Entry points taking a UTC timestamp and a list of [`Body`]:
//!
//! 1. [`ephem`]: geocentric ecliptic longitudes, in degrees rounded to 3 decimals,
//! 2. [`ephem_with`]: the same computation with a choice of frame and coordinate form,
//! 3. [`computable_bodies`]: every body the engine knows.
//!
//! The engine itself is [`Meeus1`], the low-precision theory of J. Meeus,
//! *Astronomical Formulae for Calculators*. It implements [`EphemerisEngine`], the
//! contract any other engine would mirror.
//!
//! ## Typical usage
//!
//! ```rust
//! use meeus_ephem::bodies::Body;
//! use meeus_ephem::ephem::{ephem, ephem_with, EphemParams};
//! use meeus_ephem::ref_system::{CoordForm, RefFrame};
//!
//! let lons = ephem("2000-01-01 00:00:00", &[Body::Sun, Body::Mars]).unwrap();
//! assert_eq!(lons[&Body::Sun], 279.868);
//!
//! let params = EphemParams {
//!     frame: RefFrame::HeliocentricEcliptic,
//!     form: CoordForm::Cartesian,
//!     only_longitude: false,
//! };
//! let res = ephem_with("2000-01-01 00:00:00", &[Body::Earth, Body::Moon], &params).unwrap();
//! assert_eq!(res.skipped, vec![Body::Moon]);
//! ```
//!
//! ## Precision
//!
//! About 0.01° for the Sun, the Moon and the inner planets and a few hundredths of a degree
//! for the outer planets, around the 20th century. Pluto is about 1° away from modern theories.
//! Neither precession nor nutation is applied.
//!
//! ## See also
//! ------------
//! * [`Ephemeris`] – the light-time corrected computation for a julian day.
//! * [`PlanetTheory`](crate::planets::PlanetTheory) – the per-body calculators.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bodies::{Body, COMPUTABLE_BODIES};
use crate::constants::Degree;
use crate::ephem_errors::EphemError;
use crate::ephemeris::{Ephemeris, EphemerisResult};
use crate::ref_system::{CoordForm, RefFrame};
use crate::time::iso_date_to_jd;

/// Options of an ephemeris computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EphemParams {
    pub frame: RefFrame,
    pub form: CoordForm,
    /// Report the ecliptic longitudes only, whatever `form` is
    pub only_longitude: bool,
}

impl Default for EphemParams {
    fn default() -> Self {
        EphemParams {
            frame: RefFrame::GeocentricEcliptic,
            form: CoordForm::Spherical,
            only_longitude: true,
        }
    }
}

/// An ephemeris engine.
pub trait EphemerisEngine {
    /// Positions of `bodies` at `epoch`.
    ///
    /// Arguments
    /// ---------
    /// * `epoch`: UTC timestamp, `YYYY-MM-DD HH:MM:SS`
    /// * `bodies`: the requested bodies, all of them if empty
    /// * `params`: frame, coordinate form and longitude-only flag
    ///
    /// Return
    /// ------
    /// * the computed positions and the bodies skipped for the frame, or
    ///   [`EphemError::InvalidEpoch`] if `epoch` cannot be parsed
    fn ephem(
        &self,
        epoch: &str,
        bodies: &[Body],
        params: &EphemParams,
    ) -> Result<EphemerisResult, EphemError>;

    fn computable_bodies(&self) -> &'static [Body];
}

/// The analytical theory of *Astronomical Formulae for Calculators*.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Meeus1;

impl EphemerisEngine for Meeus1 {
    fn ephem(
        &self,
        epoch: &str,
        bodies: &[Body],
        params: &EphemParams,
    ) -> Result<EphemerisResult, EphemError> {
        let jd = iso_date_to_jd(epoch)?;
        Ok(Ephemeris::new(jd, bodies).compute(params))
    }

    fn computable_bodies(&self) -> &'static [Body] {
        &COMPUTABLE_BODIES
    }
}

/// Geocentric ecliptic longitudes of `bodies` at `epoch`.
///
/// Arguments
/// ---------
/// * `epoch`: UTC timestamp, `YYYY-MM-DD HH:MM:SS`
/// * `bodies`: the requested bodies, all of them if empty. The Earth has no geocentric
///   position and is left out.
///
/// Return
/// ------
/// * the longitudes in degrees, rounded to 3 decimals, keyed by body
pub fn ephem(epoch: &str, bodies: &[Body]) -> Result<BTreeMap<Body, Degree>, EphemError> {
    Ok(Meeus1
        .ephem(epoch, bodies, &EphemParams::default())?
        .longitudes())
}

/// Same as [`ephem`] with a choice of frame and coordinate form.
pub fn ephem_with(
    epoch: &str,
    bodies: &[Body],
    params: &EphemParams,
) -> Result<EphemerisResult, EphemError> {
    Meeus1.ephem(epoch, bodies, params)
}

pub fn computable_bodies() -> &'static [Body] {
    Meeus1.computable_bodies()
}
