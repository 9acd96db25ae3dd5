//! # Reference frames and coordinate utilities
//!
//! All positions produced by the theory are expressed in the **ecliptic** frame of date
//! (mean ecliptic, no precession nor nutation applied), either centered on the Sun
//! ([`RefFrame::HeliocentricEcliptic`]) or on the Earth ([`RefFrame::GeocentricEcliptic`]).
//!
//! This module provides:
//!
//! - the frame / coordinate-form selectors used by [`crate::ephem::EphemParams`],
//! - the tagged [`Position`] value returned to callers,
//! - the angle helpers of the theory ([`mod360`], [`atan3`], [`clamped_asin`]),
//! - spherical ⇄ cartesian conversions over [`nalgebra::Vector3`].
//!
//! ## Conventions
//!
//! - On the spherical side, angles are always in **degrees** (`lon ∈ [0, 360)` once normalized).
//! - On the cartesian side, components are in **astronomical units**.
//! - `x` points toward the mean equinox, `z` toward the north ecliptic pole.
use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Degree, Radian, DPI, RADEG};
use crate::ephem_errors::EphemError;

/// Origin of the ecliptic frame in which the positions are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefFrame {
    /// Earth-centered, apparent positions (light-time corrected)
    #[default]
    GeocentricEcliptic,
    /// Sun-centered, geometric positions
    HeliocentricEcliptic,
}

impl fmt::Display for RefFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefFrame::GeocentricEcliptic => write!(f, "geocentric-ecliptic"),
            RefFrame::HeliocentricEcliptic => write!(f, "heliocentric-ecliptic"),
        }
    }
}

impl FromStr for RefFrame {
    type Err = EphemError;

    /// Accepts the long names (`geocentric-ecliptic`) and the short ones (`ec`, `helio`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geocentric-ecliptic" | "geocentric" | "ecliptic" | "ec" => {
                Ok(RefFrame::GeocentricEcliptic)
            }
            "heliocentric-ecliptic" | "heliocentric" | "helio" => {
                Ok(RefFrame::HeliocentricEcliptic)
            }
            _ => Err(EphemError::UnknownFrame(s.to_string())),
        }
    }
}

/// Expression mode of the returned coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordForm {
    #[default]
    Spherical,
    Cartesian,
}

/// Spherical ecliptic coordinates.
///
/// Units:
/// * `r`: AU (0 when the theory does not provide a distance, e.g. the Moon)
/// * `lon`: degrees
/// * `lat`: degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoord {
    pub r: AstronomicalUnit,
    pub lon: Degree,
    pub lat: Degree,
}

impl SphericalCoord {
    pub fn new(r: AstronomicalUnit, lon: Degree, lat: Degree) -> Self {
        SphericalCoord { r, lon, lat }
    }

    /// A direction known only by its longitude (Moon, lunar node).
    pub fn from_longitude(lon: Degree) -> Self {
        SphericalCoord::new(0.0, lon, 0.0)
    }

    pub fn to_cartesian(&self) -> Vector3<f64> {
        sphere_to_cart(self)
    }
}

/// A position tagged by its coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Spherical(SphericalCoord),
    Cartesian(Vector3<f64>),
}

impl Position {
    /// Ecliptic longitude in degrees, whatever the coordinate system.
    pub fn longitude(&self) -> Degree {
        match self {
            Position::Spherical(s) => s.lon,
            Position::Cartesian(v) => atan3(v.y, v.x) / RADEG,
        }
    }

    pub fn as_spherical(&self) -> SphericalCoord {
        match self {
            Position::Spherical(s) => *s,
            Position::Cartesian(v) => cart_to_sphere(v),
        }
    }

    pub fn as_cartesian(&self) -> Vector3<f64> {
        match self {
            Position::Spherical(s) => sphere_to_cart(s),
            Position::Cartesian(v) => *v,
        }
    }
}

/// Returns a number in [0, 360).
///
/// Works for any finite input, however far it is from the interval.
/// Non finite inputs are returned unchanged.
pub fn mod360(angle: Degree) -> Degree {
    if !angle.is_finite() {
        return angle;
    }
    let reduced = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Four-quadrant arctangent giving a result in [0, 2π).
pub fn atan3(y: f64, x: f64) -> Radian {
    let alpha = y.atan2(x); // belongs to [-π, π]
    if alpha >= 0.0 {
        alpha
    } else {
        alpha + DPI
    }
}

/// `asin` with its argument clamped into [-1, 1].
///
/// Latitude formulas can drift slightly outside the domain through floating-point
/// error; the clamp keeps every calculator total.
pub fn clamped_asin(x: f64) -> Radian {
    x.clamp(-1.0, 1.0).asin()
}

/// Round to 3 decimal digits (half away from zero).
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Transform spherical coordinates (angles in degrees) to cartesian ones.
///
/// The unit of the result is the distance unit of `coord`.
pub fn sphere_to_cart(coord: &SphericalCoord) -> Vector3<f64> {
    let theta = coord.lon * RADEG;
    let phi = coord.lat * RADEG;
    Vector3::new(
        coord.r * phi.cos() * theta.cos(),
        coord.r * phi.cos() * theta.sin(),
        coord.r * phi.sin(),
    )
}

/// Transform cartesian coordinates to spherical ones, angles in degrees.
///
/// The longitude is given by [`atan3`], hence lies in [0, 360).
/// The null vector maps to `(0, 0, 0)`.
pub fn cart_to_sphere(v: &Vector3<f64>) -> SphericalCoord {
    let rho = v.norm();
    if rho == 0.0 {
        return SphericalCoord::new(0.0, 0.0, 0.0);
    }
    let theta = atan3(v.y, v.x);
    let phi = clamped_asin(v.z / rho);
    SphericalCoord::new(rho, theta / RADEG, phi / RADEG)
}
