//! # Constants and type definitions for `meeus_ephem`
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used by the analytical theory.
//!
//! ## Overview
//!
//! - Time origins of the theory (JD of 1900 January 0.5, days per Julian century)
//! - Unit conversions (degrees ↔ radians, days ↔ seconds, AU ↔ km)
//! - Speed of light, used by the light-time pass
//! - Core type aliases used across the crate
//!
//! The astronomical unit and the speed of light are the IERS 1992 / IAU 1976 values the
//! published longitudes were produced with.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians (π / 180)
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian day of 1900 January 0.5 (1899-12-31 12:00:00), origin of `T`
pub const JD1900: f64 = 2_415_020.0;

/// Julian day of J2000.0 (2000-01-01 12:00:00)
pub const JD2000: f64 = 2_451_545.0;

/// Astronomical Unit in kilometers (IERS 1992)
pub const KM_PER_AU: f64 = 149_597_870.61;

/// Speed of light (IAU 1976), in m/s
///
/// Distances in kilometers are divided by `299792458`, the value of the speed of light
/// expressed in m/s. The resulting light-time delays are one thousand times smaller than the
/// physical ones; the published longitudes depend on this value.
pub const LIGHT_VELOCITY: f64 = 299_792_458.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Day (days, UTC)
pub type JulianDay = f64;
/// Julian centuries elapsed since [`JD1900`]
pub type JulianCentury = f64;
